//! Diagnostic entries for the host's log channel.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::outcome::ResolutionOutcome;

/// Unique identifier stamped on each diagnostic entry, so the user-facing
/// "see the detailed log" message has something to correlate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(pub Uuid);

impl InvocationId {
    /// Create a new random invocation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil invocation ID (useful for fixtures).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry for the diagnostic log: the full outcome of an invocation,
/// tagged with a source label and an invocation ID.
///
/// Unlike the user notice, the rendered entry carries the specifics -
/// provenance on success, the error kind and offending values on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEntry {
    pub invocation: InvocationId,
    pub label: String,
    pub outcome: ResolutionOutcome,
}

impl DiagnosticEntry {
    /// Create an entry for the given outcome with a fresh invocation ID.
    pub fn new(label: impl Into<String>, outcome: ResolutionOutcome) -> Self {
        Self {
            invocation: InvocationId::new(),
            label: label.into(),
            outcome,
        }
    }

    /// Whether this entry records a successful resolution.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl std::fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Ok(resolution) => write!(
                f,
                "[{}] {} resolved '{}' ({})",
                self.label,
                self.invocation,
                resolution.info.display_name(),
                resolution.provenance,
            ),
            Err(err) => write!(f, "[{}] {} failed: {}", self.label, self.invocation, err),
        }
    }
}

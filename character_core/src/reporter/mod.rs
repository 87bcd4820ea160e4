//! Reporter - maps resolution outcomes to user notices and diagnostics.
//!
//! The reporter performs no I/O. It turns each terminal outcome into a
//! [`Notice`] for the host's toast mechanism and a [`DiagnosticEntry`] for
//! its log channel, and hands both to whatever [`Notifier`] the host wires
//! in. Offending values (indices, record keys) appear only in diagnostic
//! text; user-facing messages stay generic.

mod diagnostic;

pub use diagnostic::*;

use serde::{Deserialize, Serialize};

use crate::outcome::{ResolutionError, ResolutionOutcome};

/// Default source label prefixed to diagnostic entries.
pub const DEFAULT_LABEL: &str = "character-probe";

/// Severity of a user notice, matching the host's toast levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", text)
    }
}

/// A user-facing notice: severity, title, message, and an optional
/// follow-up hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub hint: Option<String>,
}

/// The pair of values produced for one outcome: what the user sees and
/// what the log records.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBundle {
    pub notice: Notice,
    pub diagnostic: DiagnosticEntry,
}

/// Host seam for rendering. The host's toast and console collaborators
/// implement this; the core never draws anything itself.
pub trait Notifier {
    /// Show a notice to the user.
    fn notify(&mut self, notice: &Notice);

    /// Record a diagnostic entry.
    fn log(&mut self, entry: &DiagnosticEntry);
}

/// Maps each terminal outcome to a notice and a diagnostic entry.
pub struct Reporter {
    label: String,
}

impl Reporter {
    /// Create a reporter with the given diagnostic source label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Create a reporter with the default label.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_LABEL)
    }

    /// Build the notice and diagnostic entry for an outcome.
    pub fn report(&self, outcome: &ResolutionOutcome) -> ReportBundle {
        ReportBundle {
            notice: self.notice_for(outcome),
            diagnostic: DiagnosticEntry::new(self.label.clone(), outcome.clone()),
        }
    }

    /// Build the bundle and push it through the host notifier: notice
    /// first, diagnostic entry second.
    pub fn dispatch(&self, outcome: &ResolutionOutcome, notifier: &mut dyn Notifier) -> ReportBundle {
        let bundle = self.report(outcome);
        notifier.notify(&bundle.notice);
        notifier.log(&bundle.diagnostic);
        bundle
    }

    fn notice_for(&self, outcome: &ResolutionOutcome) -> Notice {
        match outcome {
            Ok(resolution) => Notice {
                severity: Severity::Success,
                title: "Character info".into(),
                message: format!(
                    "Resolved character '{}'. Full details are in the diagnostic log.",
                    resolution.info.display_name()
                ),
                hint: None,
            },
            Err(ResolutionError::ContextUnavailable) => Notice {
                severity: Severity::Error,
                title: "Character info unavailable".into(),
                message: "The host application context could not be obtained.".into(),
                hint: None,
            },
            Err(ResolutionError::NoActiveCharacter { .. }) => Notice {
                severity: Severity::Warning,
                title: "No character selected".into(),
                message: "No character is currently selected.".into(),
                hint: Some("Load a character in the chat panel and try again.".into()),
            },
            Err(ResolutionError::IndexOutOfRange { .. }) => Notice {
                severity: Severity::Error,
                title: "Invalid selection".into(),
                message: "The stored selection index does not match the character list.".into(),
                hint: None,
            },
            Err(ResolutionError::MalformedRecord(_)) => Notice {
                severity: Severity::Warning,
                title: "Incomplete character record".into(),
                message: "A character record was found but it lacks the required fields.".into(),
                hint: None,
            },
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::{FieldPath, MalformedRecord};
    use crate::outcome::{NoSelectionReason, Origin, Provenance, Resolution};
    use host_state::CoreInfo;

    fn success_outcome() -> ResolutionOutcome {
        Ok(Resolution {
            info: CoreInfo::named("Alice"),
            provenance: Provenance {
                origin: Origin::TableIndex(2),
                fields: FieldPath::Nested,
            },
        })
    }

    #[test]
    fn test_success_notice_names_the_character() {
        let bundle = Reporter::with_defaults().report(&success_outcome());
        assert_eq!(bundle.notice.severity, Severity::Success);
        assert!(bundle.notice.message.contains("Alice"));
        assert!(bundle.diagnostic.is_success());
    }

    #[test]
    fn test_no_character_notice_carries_hint() {
        let outcome = Err(ResolutionError::NoActiveCharacter {
            reason: NoSelectionReason::SelectionAbsent,
        });
        let bundle = Reporter::with_defaults().report(&outcome);
        assert_eq!(bundle.notice.severity, Severity::Warning);
        assert!(bundle.notice.hint.is_some());
    }

    #[test]
    fn test_context_unavailable_is_an_error() {
        let bundle = Reporter::with_defaults().report(&Err(ResolutionError::ContextUnavailable));
        assert_eq!(bundle.notice.severity, Severity::Error);
    }

    #[test]
    fn test_out_of_range_notice_hides_offending_values() {
        let outcome = Err(ResolutionError::IndexOutOfRange {
            index: 7,
            table_len: 5,
        });
        let bundle = Reporter::with_defaults().report(&outcome);

        assert_eq!(bundle.notice.severity, Severity::Error);
        assert!(!bundle.notice.message.contains('7'));
        assert!(!bundle.notice.message.contains('5'));
        // The specifics still reach the diagnostic channel.
        assert!(bundle.diagnostic.to_string().contains('7'));
    }

    #[test]
    fn test_malformed_record_is_a_warning() {
        let outcome = Err(ResolutionError::MalformedRecord(MalformedRecord {
            keys: vec!["avatar".into()],
        }));
        let bundle = Reporter::with_defaults().report(&outcome);
        assert_eq!(bundle.notice.severity, Severity::Warning);
        assert!(!bundle.notice.message.contains("avatar"));
    }

    #[test]
    fn test_dispatch_notifies_then_logs() {
        #[derive(Default)]
        struct MockNotifier {
            calls: Vec<String>,
        }

        impl Notifier for MockNotifier {
            fn notify(&mut self, notice: &Notice) {
                self.calls.push(format!("notify:{}", notice.severity));
            }

            fn log(&mut self, entry: &DiagnosticEntry) {
                self.calls.push(format!("log:{}", entry.label));
            }
        }

        let mut notifier = MockNotifier::default();
        Reporter::with_defaults().dispatch(&success_outcome(), &mut notifier);

        assert_eq!(
            notifier.calls,
            vec!["notify:success".to_string(), "log:character-probe".to_string()]
        );
    }
}

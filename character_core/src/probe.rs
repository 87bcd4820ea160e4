//! The probe - one synchronous pass through resolver, normalizer, reporter.

use host_state::HostSnapshot;

use crate::normalizer;
use crate::outcome::{Provenance, Resolution, ResolutionError, ResolutionOutcome};
use crate::reporter::{Notifier, ReportBundle, Reporter};
use crate::resolver::Resolver;

/// Resolve and normalize the active character with default settings.
///
/// `None` means the host context handle itself could not be obtained.
pub fn inspect(snapshot: Option<&HostSnapshot>) -> ResolutionOutcome {
    CharacterProbe::with_defaults().inspect(snapshot)
}

/// Composes resolver and reporter into the full per-invocation pipeline.
///
/// Each invocation is one linear pass over an independently captured
/// snapshot: no retries, no shared mutable state, fresh outputs every time.
pub struct CharacterProbe {
    resolver: Resolver,
    reporter: Reporter,
}

impl CharacterProbe {
    /// Create a probe from explicit parts.
    pub fn new(resolver: Resolver, reporter: Reporter) -> Self {
        Self { resolver, reporter }
    }

    /// Create a probe with the default resolver and reporter.
    pub fn with_defaults() -> Self {
        Self::new(Resolver::with_defaults(), Reporter::with_defaults())
    }

    /// Run resolution and normalization, producing the tagged outcome.
    pub fn inspect(&self, snapshot: Option<&HostSnapshot>) -> ResolutionOutcome {
        let snapshot = snapshot.ok_or(ResolutionError::ContextUnavailable)?;
        let candidate = self.resolver.resolve(snapshot)?;
        let (info, fields) = normalizer::normalize(candidate.record)?;

        Ok(Resolution {
            info,
            provenance: Provenance {
                origin: candidate.origin,
                fields,
            },
        })
    }

    /// Run the full pipeline and build the report bundle.
    pub fn run(&self, snapshot: Option<&HostSnapshot>) -> ReportBundle {
        self.reporter.report(&self.inspect(snapshot))
    }

    /// Run the full pipeline and dispatch the bundle through the host
    /// notifier.
    pub fn run_with(
        &self,
        snapshot: Option<&HostSnapshot>,
        notifier: &mut dyn Notifier,
    ) -> ReportBundle {
        self.reporter.dispatch(&self.inspect(snapshot), notifier)
    }
}

impl Default for CharacterProbe {
    fn default() -> Self {
        Self::with_defaults()
    }
}

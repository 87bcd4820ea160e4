//! Resolver - finds the active character record in a host snapshot.
//!
//! Resolution walks an ordered strategy list; the first strategy to yield a
//! non-null candidate wins and later strategies are never consulted or
//! merged. A new host-state shape is handled by appending a [`Strategy`]
//! variant, leaving the existing strategies untouched.

mod index;

pub use index::*;

use host_state::HostSnapshot;
use serde_json::Value;

use crate::outcome::{NoSelectionReason, Origin, ResolutionError};

/// One way of locating the active character in a snapshot, in the order the
/// resolver should trust them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Follow the host's direct active-character reference.
    DirectReference,

    /// Look the character up in the table by the active-index value.
    IndexedLookup,
}

/// Configuration for the resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Strategies to attempt, most trustworthy first.
    pub strategies: Vec<Strategy>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strategies: vec![Strategy::DirectReference, Strategy::IndexedLookup],
        }
    }
}

/// A raw candidate record plus the strategy that produced it. The record is
/// borrowed from the snapshot and has not been validated yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub record: &'a Value,
    pub origin: Origin,
}

/// Resolves the active character reference from a host snapshot.
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create a resolver with the default strategy order.
    pub fn with_defaults() -> Self {
        Self::new(ResolverConfig::default())
    }

    /// Find the single active-character candidate in the snapshot.
    ///
    /// Strategies run in configured order; the first non-null candidate is
    /// returned as-is. A strategy that finds evidence of a broken selection
    /// (unparseable index, out-of-range index, null table entry) fails the
    /// whole resolution rather than falling through. Exhausting the list
    /// without a candidate means nothing is selected.
    pub fn resolve<'a>(
        &self,
        snapshot: &'a HostSnapshot,
    ) -> Result<Candidate<'a>, ResolutionError> {
        for strategy in &self.config.strategies {
            let candidate = match strategy {
                Strategy::DirectReference => direct_reference(snapshot),
                Strategy::IndexedLookup => indexed_lookup(snapshot)?,
            };
            if let Some(candidate) = candidate {
                return Ok(candidate);
            }
        }

        Err(ResolutionError::NoActiveCharacter {
            reason: NoSelectionReason::SelectionAbsent,
        })
    }
}

fn direct_reference(snapshot: &HostSnapshot) -> Option<Candidate<'_>> {
    snapshot.character().map(|record| Candidate {
        record,
        origin: Origin::DirectReference,
    })
}

fn indexed_lookup(snapshot: &HostSnapshot) -> Result<Option<Candidate<'_>>, ResolutionError> {
    let raw = match snapshot.active_index() {
        Some(raw) => raw,
        None => return Ok(None),
    };

    let index = parse_active_index(raw).map_err(|err| ResolutionError::NoActiveCharacter {
        reason: NoSelectionReason::IndexUnparseable(err),
    })?;

    let table_len = snapshot.table_len();
    if index >= table_len {
        return Err(ResolutionError::IndexOutOfRange { index, table_len });
    }

    let entry = snapshot
        .character_table()
        .and_then(|table| table.get(index))
        .filter(|entry| !entry.is_null());

    match entry {
        Some(record) => Ok(Some(Candidate {
            record,
            origin: Origin::TableIndex(index),
        })),
        None => Err(ResolutionError::NoActiveCharacter {
            reason: NoSelectionReason::EmptyEntry { index },
        }),
    }
}

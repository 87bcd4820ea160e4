//! Resolution outcomes - the tagged result of one invocation.

use host_state::CoreInfo;
use thiserror::Error;

use crate::normalizer::{FieldPath, MalformedRecord};
use crate::resolver::IndexParseError;

/// Which resolution strategy produced the candidate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The host exposed a direct reference to the active character.
    DirectReference,

    /// The candidate was looked up in the character table at this index.
    TableIndex(usize),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::DirectReference => write!(f, "direct reference"),
            Origin::TableIndex(index) => write!(f, "table index {}", index),
        }
    }
}

/// Record of how a successful resolution was produced: the strategy that
/// found the candidate and the field path the fields were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance {
    pub origin: Origin,
    pub fields: FieldPath,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.origin, self.fields)
    }
}

/// A successful resolution: the canonical summary plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub info: CoreInfo,
    pub provenance: Provenance,
}

/// The terminal result of one invocation.
pub type ResolutionOutcome = Result<Resolution, ResolutionError>;

/// Why no valid selection exists. Kept on [`ResolutionError::NoActiveCharacter`]
/// for the diagnostic channel; the user-facing message stays generic.
#[derive(Debug, Clone, PartialEq)]
pub enum NoSelectionReason {
    /// Neither a direct reference nor an index value is present.
    SelectionAbsent,

    /// An index value is present but could not be coerced to a table index.
    IndexUnparseable(IndexParseError),

    /// The index was valid but the table entry there is null or missing.
    EmptyEntry { index: usize },
}

impl std::fmt::Display for NoSelectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoSelectionReason::SelectionAbsent => write!(f, "no selection is present"),
            NoSelectionReason::IndexUnparseable(err) => {
                write!(f, "the selection index could not be parsed ({})", err)
            }
            NoSelectionReason::EmptyEntry { index } => {
                write!(f, "the character table has no entry at index {}", index)
            }
        }
    }
}

/// Classified failure of one invocation. All variants are terminal; nothing
/// is retried within an invocation.
///
/// `Display` text is the diagnostic rendering and may carry offending
/// values. User-facing messages are composed by the reporter and never
/// include them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    /// The host context handle itself could not be obtained.
    #[error("the host context could not be obtained")]
    ContextUnavailable,

    /// No valid selection exists: absent, unparseable, or a null entry.
    #[error("no character is currently selected: {reason}")]
    NoActiveCharacter { reason: NoSelectionReason },

    /// A syntactically valid index exceeds the character table bounds.
    #[error("selection index {index} is outside the character table (length {table_len})")]
    IndexOutOfRange { index: usize, table_len: usize },

    /// A candidate was found but no field path produced a usable name.
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecord),
}

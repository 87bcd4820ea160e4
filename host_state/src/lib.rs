//! # Host State
//!
//! Read-only view of the chat host's exposed character state. This crate
//! holds the inert data types - the snapshot of host globals taken at
//! invocation time and the canonical output record - and contains no
//! resolution logic.

pub mod record;
pub mod snapshot;

pub use record::*;
pub use snapshot::*;

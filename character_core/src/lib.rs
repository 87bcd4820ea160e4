//! # Character Core
//!
//! Resolution core for the "currently active character" exposed by a chat
//! host. This crate interfaces with `host_state`, locates the active
//! character record, normalizes it into a canonical summary, and maps the
//! result to user notices and diagnostic entries.
//!
//! ## Core Components
//!
//! - **resolver**: Finds a single candidate record via an ordered strategy list
//! - **normalizer**: Extracts the six canonical fields, nested-first with a flat fallback
//! - **reporter**: Maps each terminal outcome to a notice and a diagnostic entry
//! - **probe**: Composes the three into one synchronous pass per invocation
//!
//! ## Design Philosophy
//!
//! - **Snapshot-Driven**: The core only reads an immutable [`HostSnapshot`](host_state::HostSnapshot); ambient host state is captured once per invocation by the adapter
//! - **Explicit Outcomes**: Every invocation ends in a tagged [`ResolutionOutcome`]; "record absent" and "record present but unusable" are never conflated
//! - **Extensible**: New host-state shapes are handled by appending a resolution strategy, not by editing existing ones

pub mod normalizer;
pub mod outcome;
pub mod probe;
pub mod reporter;
pub mod resolver;

pub use normalizer::*;
pub use outcome::*;
pub use probe::*;
pub use reporter::*;
pub use resolver::*;

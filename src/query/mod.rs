//! # Query translation layer
//!
//! Turns validated request inputs into structured filter and update
//! documents for the store. Documents are built directly as key-value
//! trees; there is no intermediate string assembly, so values containing
//! quotes or braces cannot change the shape of a query.

pub mod coerce;
pub mod filter;
pub mod translate;
pub mod update;

pub use filter::{RecordFilter, ValueMatch};
pub use translate::Lookup;
pub use update::UpdateDoc;

//! Ruralis Types
//!
//! Shared value type for the Ruralis calculator ecosystem. Report snapshots
//! and webhook payloads are maps of `FieldValue`, which is deliberately
//! restricted to primitives: the document store rejects anything that is not
//! a plain JSON scalar.

#![deny(warnings)]

mod types;
pub use types::FieldValue;

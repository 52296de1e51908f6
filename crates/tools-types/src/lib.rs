//! India Tools Types
//!
//! This crate defines the untyped request value shared by `tools-calculator` and
//! `tools-api`. The API layer converts parsed JSON bodies into [`InputValue`]s and the
//! calculator plugins read them back out through strict, non-coercing accessors.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;
pub use types::{InputMap, InputValue};

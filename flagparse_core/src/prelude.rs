//! Traits which, typically, may be imported without concern: `use flagparse::prelude::*`.

// Needs to be imported in order to implement a custom flag type.
pub use crate::api::FlagValue;

// Needs to be imported in order to inspect a flag via `Parser::flag`.
pub use crate::parser::AnonymousFlag;

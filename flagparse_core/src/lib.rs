//! Core module for `flagparse`.
//! See [documentation root](https://docs.rs/flagparse/latest/flagparse/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{AnonymousFlag, ConfigError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

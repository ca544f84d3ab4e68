mod base;
mod interface;
mod printer;
mod tokens;

pub use base::*;
pub(crate) use interface::*;
pub(crate) use printer::*;
pub(crate) use tokens::*;

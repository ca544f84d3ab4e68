mod capture;
mod core;
mod field;

pub use self::core::*;
pub use capture::*;
pub use field::*;

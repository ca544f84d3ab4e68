use thiserror::Error;

/// The conversion function used to turn a raw `&str` token into a flag's type `T`.
///
/// Override the conversion for a type via [`Parser::set_parser`](./struct.Parser.html#method.set_parser).
pub type Converter<T> = fn(&str) -> Result<T, InvalidConversion>;

/// Behaviour to convert a raw command line token into a typed flag value.
///
/// `flagparse` implements this for `String`, `bool`, the integer types `i16`, `i32`, `i64`, `i128`, `u32`, `u64`, and the floating point types `f32` and `f64`.
/// Implement it to register flags of your own types.
///
/// ### Example
/// ```
/// # use flagparse_core as flagparse;
/// use flagparse::{InvalidConversion, Parser};
/// use flagparse::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl FlagValue for Level {
///     fn convert(raw: &str) -> Result<Self, InvalidConversion> {
///         match raw {
///             "low" => Ok(Level::Low),
///             "high" => Ok(Level::High),
///             _ => Err(InvalidConversion::of::<Self>(raw)),
///         }
///     }
/// }
///
/// let mut parser = Parser::default();
/// let level = parser.add("level", "How loud.", false, Level::Low);
/// parser.parse_tokens(&["program", "--level", "high"]).unwrap();
/// assert_eq!(parser.value(&level), &Level::High);
/// ```
pub trait FlagValue: Sized + 'static {
    /// Convert the raw token into `Self`.
    fn convert(raw: &str) -> Result<Self, InvalidConversion>;
}

/// The raw token could not be converted into the flag's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidConversion {
    /// The offending raw token.
    pub token: String,
    /// The name of the type the token was meant for.
    pub type_name: &'static str,
}

impl InvalidConversion {
    /// Describe a failure to convert `token` into `T`.
    pub fn of<T>(token: &str) -> Self {
        Self {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl FlagValue for String {
    fn convert(raw: &str) -> Result<Self, InvalidConversion> {
        Ok(raw.to_string())
    }
}

impl FlagValue for bool {
    // Anything other than a literal "false" turns the flag on, including the empty token.
    fn convert(raw: &str) -> Result<Self, InvalidConversion> {
        Ok(!raw.eq_ignore_ascii_case("false"))
    }
}

macro_rules! impl_from_str_flag_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl FlagValue for $t {
                fn convert(raw: &str) -> Result<Self, InvalidConversion> {
                    raw.parse::<$t>()
                        .map_err(|_| InvalidConversion::of::<$t>(raw))
                }
            }
        )*
    };
}

impl_from_str_flag_value!(i16, i32, i64, i128, u32, u64, f32, f64);

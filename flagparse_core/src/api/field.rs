use std::any::Any;

use crate::api::capture::*;
use crate::parser::AnonymousFlag;

/// A single flag, bound to its value type `T`.
///
/// A flag starts out holding its default value, with `found` set for optional flags only.
/// Each call to [`TypedFlag::parse`] marks the flag as found; only a successful conversion replaces the value and marks it as parsed.
///
/// Flags are usually created through [`Parser::add`](./struct.Parser.html#method.add), but may be used standalone.
///
/// ### Example
/// ```
/// # use flagparse_core as flagparse;
/// use flagparse::TypedFlag;
///
/// let mut retries: TypedFlag<u32> = TypedFlag::new(3, "How many attempts.", false);
/// assert!(retries.parse("banana").is_err());
/// assert_eq!(*retries.value(), 3);
/// assert!(retries.found());
/// assert!(!retries.parsed());
/// ```
pub struct TypedFlag<T> {
    description: String,
    required: bool,
    found: bool,
    parsed: bool,
    value: T,
    converter: Converter<T>,
}

impl<T: FlagValue> TypedFlag<T> {
    /// Create a flag which converts tokens via [`FlagValue::convert`].
    pub fn new(default: T, description: impl Into<String>, required: bool) -> Self {
        Self::with_converter(default, description, required, T::convert)
    }
}

impl<T> TypedFlag<T> {
    /// Create a flag which converts tokens via the provided `converter`.
    pub fn with_converter(
        default: T,
        description: impl Into<String>,
        required: bool,
        converter: Converter<T>,
    ) -> Self {
        Self {
            description: description.into(),
            required,
            found: !required,
            parsed: false,
            value: default,
            converter,
        }
    }

    /// Capture the raw token into this flag.
    ///
    /// The flag is always marked as found.
    /// On a failed conversion the previous value is kept and the error is handed back for inspection.
    pub fn parse(&mut self, raw: &str) -> Result<(), InvalidConversion> {
        self.found = true;
        let value = (self.converter)(raw)?;
        self.value = value;
        self.parsed = true;
        Ok(())
    }

    /// The current value: the default until a token converts successfully.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the current value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The flag's description, as shown by `help`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the flag must be specified.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Whether the flag was matched (or is optional).
    pub fn found(&self) -> bool {
        self.found
    }

    /// Whether a token was successfully converted into the flag's value.
    pub fn parsed(&self) -> bool {
        self.parsed
    }
}

impl<T: 'static> AnonymousFlag for TypedFlag<T> {
    fn description(&self) -> &str {
        TypedFlag::description(self)
    }

    fn required(&self) -> bool {
        TypedFlag::required(self)
    }

    fn found(&self) -> bool {
        TypedFlag::found(self)
    }

    fn parsed(&self) -> bool {
        TypedFlag::parsed(self)
    }

    fn parse(&mut self, raw: &str) -> Result<(), InvalidConversion> {
        TypedFlag::parse(self, raw)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for TypedFlag<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedFlag")
            .field("description", &self.description)
            .field("required", &self.required)
            .field("found", &self.found)
            .field("parsed", &self.parsed)
            .field("value", &self.value)
            .finish()
    }
}

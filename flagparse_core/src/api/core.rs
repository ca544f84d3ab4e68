use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::{Converter, FlagValue, TypedFlag};
use crate::constant::DEFAULT_HELP_TEXT;
use crate::model::FlagHandle;
use crate::parser::{
    AnonymousFlag, ConfigError, ConsoleInterface, ParseError, Prefix, Printer, Registry,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Every parser gets its own id, which its handles carry.
static NEXT_PARSER_ID: AtomicUsize = AtomicUsize::new(0);

/// The command line flag parser.
///
/// Register flags via [`Parser::add`], run [`Parser::parse`] (or [`Parser::parse_tokens`]) once, and then read the values back through the returned handles.
///
/// ### Example
/// ```
/// # use flagparse_core as flagparse;
/// use flagparse::Parser;
///
/// let mut parser = Parser::default();
/// let name = parser.add("name", "Who to greet.", true, String::default());
/// let retries = parser.add("retries", "How many attempts.", false, 3i32);
///
/// let complete = parser
///     .parse_tokens(&["program", "--name", "alice", "--retries=5"])
///     .unwrap();
///
/// assert!(complete);
/// assert_eq!(parser.value(&name), "alice");
/// assert_eq!(*parser.value(&retries), 5);
/// ```
pub struct Parser {
    id: usize,
    prefix: Prefix,
    help_text: String,
    registry: Registry,
    // Keyed by the `TypeId` of `T`, holding a `Converter<T>`.
    converters: HashMap<TypeId, Box<dyn Any>>,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("prefix", &self.prefix.as_str())
            .field("help_text", &self.help_text)
            .field("registry", &self.registry)
            .finish()
    }
}

impl Default for Parser {
    /// A parser using the `--` prefix and the `Help:` help text.
    fn default() -> Self {
        Self::with_prefix(Prefix::default(), DEFAULT_HELP_TEXT)
    }
}

impl Parser {
    /// Create a parser with a custom flag prefix and help text.
    ///
    /// The prefix must not be empty, and must not contain `=`.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_core as flagparse;
    /// use flagparse::Parser;
    ///
    /// let mut parser = Parser::new("/", "Usage:").unwrap();
    /// let verbose = parser.add("verbose", "Print more.", false, false);
    /// parser.parse_tokens(&["program", "/verbose"]).unwrap();
    /// assert!(*parser.value(&verbose));
    ///
    /// assert!(Parser::new("", "Usage:").is_err());
    /// ```
    pub fn new(prefix: impl Into<String>, help_text: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::with_prefix(Prefix::new(prefix)?, help_text))
    }

    fn with_prefix(prefix: Prefix, help_text: impl Into<String>) -> Self {
        Self {
            id: NEXT_PARSER_ID.fetch_add(1, Ordering::Relaxed),
            prefix,
            help_text: help_text.into(),
            registry: Registry::default(),
            converters: HashMap::default(),
        }
    }

    /// The flag prefix.
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Add a flag to the parser.
    ///
    /// The flag holds `default` until a token for it is successfully parsed.
    /// A `required` flag counts as found only once it is specified on the command line; an optional flag always counts as found.
    ///
    /// Adding a flag under an existing name replaces it: the previous flag no longer takes part in parsing, counting or help.
    /// Its handle remains readable, so the replaced flag stays in the parser's storage: every re-registration grows the parser.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_core as flagparse;
    /// use flagparse::Parser;
    ///
    /// let mut parser = Parser::default();
    /// let ratio = parser.add("ratio", "The ratio.", false, 0.5f64);
    /// assert_eq!(*parser.value(&ratio), 0.5);
    /// ```
    pub fn add<T: FlagValue>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        default: T,
    ) -> FlagHandle<T> {
        let name = name.into();
        let flag = TypedFlag::with_converter(default, description, required, self.converter::<T>());

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Adding flag '{name}' of {t} (required: {required}).",
                t = std::any::type_name::<T>()
            );
        }

        FlagHandle::new(self.id, self.registry.insert(name, Box::new(flag)))
    }

    /// Register the conversion used for flags of type `T` added from now on.
    ///
    /// Every [`FlagValue`] type starts with [`FlagValue::convert`]; this overrides it for this parser.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_core as flagparse;
    /// use flagparse::{InvalidConversion, Parser};
    ///
    /// fn strict_bool(raw: &str) -> Result<bool, InvalidConversion> {
    ///     match raw {
    ///         "" | "true" => Ok(true),
    ///         "false" => Ok(false),
    ///         _ => Err(InvalidConversion::of::<bool>(raw)),
    ///     }
    /// }
    ///
    /// let mut parser = Parser::default();
    /// parser.set_parser::<bool>(strict_bool);
    /// let verbose = parser.add("verbose", "Print more.", false, false);
    /// parser.parse_tokens(&["program", "--verbose", "maybe"]).unwrap();
    ///
    /// assert!(!*parser.value(&verbose));
    /// assert_eq!(parser.get_parsed(), 0);
    /// ```
    pub fn set_parser<T: FlagValue>(&mut self, converter: Converter<T>) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Overriding the converter for {t}.",
                t = std::any::type_name::<T>()
            );
        }

        self.converters.insert(TypeId::of::<T>(), Box::new(converter));
    }

    fn converter<T: FlagValue>(&self) -> Converter<T> {
        self.converters
            .get(&TypeId::of::<T>())
            .and_then(|converter| converter.downcast_ref::<Converter<T>>())
            .copied()
            .unwrap_or(T::convert as Converter<T>)
    }

    /// The value of the flag, or `None` if the handle belongs to another parser.
    pub fn try_value<T: 'static>(&self, handle: &FlagHandle<T>) -> Option<&T> {
        self.typed_flag(handle).map(TypedFlag::value)
    }

    /// The value of the flag: its default, or the last successfully parsed token.
    ///
    /// # Panics
    /// If the handle was created by another parser.
    pub fn value<T: 'static>(&self, handle: &FlagHandle<T>) -> &T {
        self.try_value(handle)
            .expect("internal error - the handle must have been created by this parser")
    }

    /// Mutable access to the value of the flag.
    ///
    /// # Panics
    /// If the handle was created by another parser.
    pub fn value_mut<T: 'static>(&mut self, handle: &FlagHandle<T>) -> &mut T {
        Some(handle.index())
            .filter(|_| handle.parser() == self.id)
            .and_then(|index| self.registry.slot_mut(index))
            .and_then(|flag| flag.as_any_mut().downcast_mut::<TypedFlag<T>>())
            .map(TypedFlag::value_mut)
            .expect("internal error - the handle must have been created by this parser")
    }

    /// The flag behind the handle, including its found/parsed state.
    ///
    /// `None` if the handle belongs to another parser.
    pub fn typed_flag<T: 'static>(&self, handle: &FlagHandle<T>) -> Option<&TypedFlag<T>> {
        if handle.parser() != self.id {
            return None;
        }

        self.registry
            .slot(handle.index())
            .and_then(|flag| flag.as_any().downcast_ref::<TypedFlag<T>>())
    }

    /// The flag currently registered under `name`.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_core as flagparse;
    /// use flagparse::Parser;
    /// use flagparse::prelude::*;
    ///
    /// let mut parser = Parser::default();
    /// parser.add("count", "How many.", true, 0u32);
    /// parser.parse_tokens(&["program", "--count", "many"]).unwrap();
    ///
    /// let count = parser.flag("count").unwrap();
    /// assert!(count.found());
    /// assert!(!count.parsed());
    /// ```
    pub fn flag(&self, name: &str) -> Option<&dyn AnonymousFlag> {
        self.registry.get(name)
    }

    /// Run the parser against the Cli [`env::args`].
    ///
    /// See [`Parser::parse_tokens`].
    ///
    /// # Panics
    /// If any argument is not valid unicode (see [`env::args`]).
    pub fn parse(&mut self) -> Result<bool, ParseError> {
        let command_input: Vec<String> = env::args().collect();
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Run the parser against the input tokens.
    ///
    /// The first token is the program name, and is never matched as a flag.
    /// A token starting with the prefix (and carrying a name after it) is a flag token; `--name=value` is equivalent to `--name value`.
    /// Each flag token captures the token which follows it, and a trailing flag token captures the empty string.
    /// Values which do not convert are recorded on their flag, rather than failing the parse.
    ///
    /// Returns whether every flag has been found, in other words whether all required flags were specified.
    ///
    /// If a flag token names an unregistered flag, this returns `Err` and no flag is modified.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_core as flagparse;
    /// use flagparse::{ParseError, Parser};
    ///
    /// let mut parser = Parser::default();
    /// let verbose = parser.add("verbose", "Print more.", true, false);
    ///
    /// assert_eq!(
    ///     parser.parse_tokens(&["program", "--quiet"]),
    ///     Err(ParseError::UnknownFlag("quiet".to_string()))
    /// );
    /// assert_eq!(parser.parse_tokens(&["program", "--verbose"]), Ok(true));
    /// assert!(*parser.value(&verbose));
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<bool, ParseError> {
        let tokens = self.prefix.tokenize(tokens);
        let captures = self.resolve(&tokens)?;

        for (index, raw) in captures {
            if let Some(flag) = self.registry.slot_mut(index) {
                let _result = flag.parse(raw);

                #[cfg(feature = "tracing_debug")]
                {
                    match &_result {
                        Ok(()) => debug!("Captured '{raw}' into slot {index}."),
                        Err(error) => debug!("Slot {index} found, but not parsed: {error}"),
                    };
                }
            }
        }

        let complete = self.get_found() == self.flag_count();

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Parsed {p}, found {f} of {n} flags (complete: {complete}).",
                p = self.get_parsed(),
                f = self.get_found(),
                n = self.flag_count()
            );
        }

        Ok(complete)
    }

    // Pair each flag token with the token it captures, without modifying any flag.
    fn resolve<'t>(&self, tokens: &[&'t str]) -> Result<Vec<(usize, &'t str)>, ParseError> {
        let mut captures = Vec::default();
        let last = tokens.len().saturating_sub(1);

        for (offset, token) in tokens.iter().enumerate().skip(1) {
            if let Some(name) = self.prefix.flag_name(token) {
                let index = self.registry.resolve(name)?;
                let raw = if offset < last { tokens[offset + 1] } else { "" };
                captures.push((index, raw));
            }
        }

        Ok(captures)
    }

    /// The number of registered flags.
    pub fn flag_count(&self) -> usize {
        self.registry.len()
    }

    /// The number of flags which have been found (optional flags always are).
    pub fn get_found(&self) -> usize {
        self.registry.count_found()
    }

    /// The number of flags which have been successfully parsed.
    pub fn get_parsed(&self) -> usize {
        self.registry.count_parsed()
    }

    /// Print the help message to stdout.
    ///
    /// The help text is followed by one `\t<prefix><name>: <description>` line per flag, in name order.
    pub fn help(&self) {
        self.printer().print_help(&ConsoleInterface::default());
    }

    /// The help message, as printed by [`Parser::help`].
    ///
    /// ### Example
    /// ```
    /// # use flagparse_core as flagparse;
    /// use flagparse::Parser;
    ///
    /// let mut parser = Parser::default();
    /// parser.add("name", "Who to greet.", true, String::default());
    /// assert_eq!(parser.help_message(), "Help:\n\t--name: Who to greet.");
    /// ```
    pub fn help_message(&self) -> String {
        self.printer().render().join("\n")
    }

    fn printer(&self) -> Printer<'_> {
        Printer::new(&self.prefix, &self.help_text, &self.registry)
    }
}

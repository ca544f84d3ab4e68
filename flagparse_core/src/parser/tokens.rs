use crate::constant::{DEFAULT_PREFIX, VALUE_SEPARATOR};
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The marker identifying a token as a flag, rather than a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Prefix(String);

impl Default for Prefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

impl Prefix {
    pub(crate) fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Err(ConfigError("prefix must not be empty.".to_string()));
        }

        if prefix.contains(VALUE_SEPARATOR) {
            return Err(ConfigError(format!(
                "prefix '{prefix}' must not contain '{VALUE_SEPARATOR}'."
            )));
        }

        Ok(Self(prefix))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// The flag name carried by `token`, if it is a flag token.
    ///
    /// A flag token starts with the whole prefix and has at least one character after it.
    pub(crate) fn flag_name<'t>(&self, token: &'t str) -> Option<&'t str> {
        token
            .strip_prefix(self.0.as_str())
            .filter(|name| !name.is_empty())
    }

    pub(crate) fn is_flag(&self, token: &str) -> bool {
        self.flag_name(token).is_some()
    }

    /// Break the raw command line into tokens.
    ///
    /// Flag tokens are split at every `=`, so `--key=value` becomes `--key value`.
    /// A single trailing empty piece is dropped (`--key=` becomes `--key`), while inner empty pieces are kept.
    /// All other tokens pass through unchanged.
    pub(crate) fn tokenize<'t>(&self, raw: &[&'t str]) -> Vec<&'t str> {
        let mut tokens = Vec::with_capacity(raw.len());

        for token in raw {
            if self.is_flag(token) && token.contains(VALUE_SEPARATOR) {
                let mut parts: Vec<&'t str> = token.split(VALUE_SEPARATOR).collect();

                if parts.last().map_or(false, |last| last.is_empty()) {
                    parts.pop();
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Split '{token}' into {parts:?}.");
                }

                tokens.extend(parts);
            } else {
                tokens.push(*token);
            }
        }

        tokens
    }
}

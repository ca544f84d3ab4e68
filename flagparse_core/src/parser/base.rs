use std::any::Any;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::api::InvalidConversion;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The parser was configured incorrectly.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The command line tokens could not be parsed.
///
/// Values which fail to convert are not errors: they are recorded on the flag (see [`AnonymousFlag::parsed`]).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token carried the prefix, but names no registered flag.
    #[error("Parse error: unknown flag '{0}'.")]
    UnknownFlag(String),
}

/// Behaviour of a flag with its value type `T` erased.
///
/// We use this at the top of the parser object graph so that flags of different types may all live in a single registry.
pub trait AnonymousFlag {
    /// The flag's description, as shown by `help`.
    fn description(&self) -> &str;

    /// Whether the flag must be specified.
    fn required(&self) -> bool;

    /// Whether the flag was matched (or is optional).
    fn found(&self) -> bool;

    /// Whether a token was successfully converted into the flag's value.
    fn parsed(&self) -> bool;

    /// Capture the raw token into the flag.
    fn parse(&mut self, raw: &str) -> Result<(), InvalidConversion>;

    /// The name of the flag's value type.
    fn type_name(&self) -> &'static str;

    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// Flags live in an arena addressed by index, so handles stay valid for as long as the registry does.
// A re-registered name points at its newest slot; the replaced slot is retired, but kept alive for its handles.
pub(crate) struct Registry {
    slots: Vec<Box<dyn AnonymousFlag>>,
    names: BTreeMap<String, usize>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names)
            .field("slots", &self.slots.len())
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            slots: Vec::default(),
            names: BTreeMap::default(),
        }
    }
}

impl Registry {
    pub(crate) fn insert(&mut self, name: impl Into<String>, flag: Box<dyn AnonymousFlag>) -> usize {
        let name = name.into();
        let index = self.slots.len();
        self.slots.push(flag);

        if let Some(_retired) = self.names.insert(name.clone(), index) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag '{name}' re-registered; retiring slot {_retired} for slot {index}.");
            }
        }

        index
    }

    pub(crate) fn slot(&self, index: usize) -> Option<&dyn AnonymousFlag> {
        self.slots.get(index).map(|flag| &**flag)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut (dyn AnonymousFlag + 'static)> {
        self.slots.get_mut(index).map(|flag| &mut **flag)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&dyn AnonymousFlag> {
        self.names.get(name).and_then(|index| self.slot(*index))
    }

    pub(crate) fn resolve(&self, name: &str) -> Result<usize, ParseError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| ParseError::UnknownFlag(name.to_string()))
    }

    /// The registered flags, in name order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &(dyn AnonymousFlag + 'static))> {
        self.names
            .iter()
            .map(move |(name, index)| (name.as_str(), &*self.slots[*index]))
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn count_found(&self) -> usize {
        self.iter().filter(|(_, flag)| flag.found()).count()
    }

    pub(crate) fn count_parsed(&self) -> usize {
        self.iter().filter(|(_, flag)| flag.parsed()).count()
    }
}

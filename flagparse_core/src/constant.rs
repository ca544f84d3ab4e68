pub(crate) const DEFAULT_PREFIX: &str = "--";
pub(crate) const DEFAULT_HELP_TEXT: &str = "Help:";
pub(crate) const VALUE_SEPARATOR: char = '=';

use crate::parser::interface::UserInterface;
use crate::parser::{Prefix, Registry};

pub(crate) struct Printer<'r> {
    prefix: &'r Prefix,
    help_text: &'r str,
    registry: &'r Registry,
}

impl<'r> Printer<'r> {
    pub(crate) fn new(prefix: &'r Prefix, help_text: &'r str, registry: &'r Registry) -> Self {
        Self {
            prefix,
            help_text,
            registry,
        }
    }

    /// The help text, followed by one `\t<prefix><name>: <description>` line per flag (in name order).
    pub(crate) fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.registry.len() + 1);
        lines.push(self.help_text.to_string());

        for (name, flag) in self.registry.iter() {
            lines.push(format!(
                "\t{p}{name}: {d}",
                p = self.prefix.as_str(),
                d = flag.description()
            ));
        }

        lines
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.render() {
            user_interface.print(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::test::Recorder;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;

    #[test]
    fn render_empty() {
        let prefix = Prefix::new("--").unwrap();
        let registry = Registry::default();
        let printer = Printer::new(&prefix, "Help:", &registry);
        assert_eq!(printer.render(), vec!["Help:".to_string()]);
    }

    #[test]
    fn render() {
        let prefix = Prefix::new("/").unwrap();
        let mut registry = Registry::default();
        registry.insert("verbose", Box::new(Recorder::new(false)));
        registry.insert("count", Box::new(Recorder::new(true)));
        let printer = Printer::new(&prefix, "Usage of program:", &registry);
        assert_eq!(
            printer.render(),
            vec![
                "Usage of program:".to_string(),
                "\t/count: recorder".to_string(),
                "\t/verbose: recorder".to_string(),
            ]
        );
    }

    #[test]
    fn print_help() {
        let prefix = Prefix::new("--").unwrap();
        let mut registry = Registry::default();
        registry.insert("flag", Box::new(Recorder::new(false)));
        let interface = InMemoryInterface::default();

        Printer::new(&prefix, "Help:", &registry).print_help(&interface);

        let message = interface.consume_message();
        assert_eq!(message, "Help:\n\t--flag: recorder");
        assert_contains!(message, "--flag");
    }
}

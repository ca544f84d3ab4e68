pub(crate) trait UserInterface {
    fn print(&self, message: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::UserInterface;
    use std::cell::RefCell;

    pub(crate) struct InMemoryInterface {
        message: RefCell<Option<Vec<String>>>,
    }

    impl Default for InMemoryInterface {
        fn default() -> Self {
            Self {
                message: RefCell::new(None),
            }
        }
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            self.message
                .borrow_mut()
                .get_or_insert_with(Vec::default)
                .push(message);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> Option<String> {
            self.message
                .take()
                .map(|messages| messages.join("\n"))
        }

        pub(crate) fn consume_message(self) -> String {
            self.consume().unwrap()
        }
    }
}

use assert_matches::assert_matches;
use flagparse::prelude::*;
use flagparse::{FlagHandle, InvalidConversion, ParseError, Parser};
use rstest::rstest;

struct Cli {
    parser: Parser,
    name: FlagHandle<String>,
    retries: FlagHandle<i32>,
}

fn cli() -> Cli {
    let mut parser = Parser::default();
    let name = parser.add("name", "Who to greet.", true, String::default());
    let retries = parser.add("retries", "How many attempts.", false, 3);
    Cli {
        parser,
        name,
        retries,
    }
}

#[test]
fn all_flags_given() {
    let Cli {
        mut parser,
        name,
        retries,
    } = cli();

    assert!(parser
        .parse_tokens(&["prog", "--name", "alice", "--retries", "5"])
        .unwrap());
    assert_eq!(parser.value(&name), "alice");
    assert_eq!(*parser.value(&retries), 5);
    assert_eq!(parser.get_found(), 2);
    assert_eq!(parser.get_parsed(), 2);
}

#[test]
fn optional_flag_omitted() {
    let Cli {
        mut parser,
        name,
        retries,
    } = cli();

    assert!(parser.parse_tokens(&["prog", "--name", "alice"]).unwrap());
    assert_eq!(parser.value(&name), "alice");
    assert_eq!(*parser.value(&retries), 3);
    assert_eq!(parser.get_found(), 2);
    assert_eq!(parser.get_parsed(), 1);
}

#[test]
fn required_flag_omitted() {
    let Cli { mut parser, .. } = cli();

    assert!(!parser.parse_tokens(&["prog", "--retries", "5"]).unwrap());
    assert_eq!(parser.get_found(), 1);
    assert!(!parser.flag("name").unwrap().found());
}

#[test]
fn inconvertible_value() {
    let Cli {
        mut parser,
        retries,
        ..
    } = cli();

    assert!(!parser.parse_tokens(&["prog", "--retries", "banana"]).unwrap());
    assert_eq!(*parser.value(&retries), 3);
    assert!(parser.flag("retries").unwrap().found());
    assert!(!parser.flag("retries").unwrap().parsed());
    assert_eq!(parser.get_found(), 1);
    assert_eq!(parser.get_parsed(), 0);
}

#[rstest]
#[case(vec!["prog", "--count=42"])]
#[case(vec!["prog", "--count", "42"])]
fn joined_and_separate_equivalent(#[case] tokens: Vec<&str>) {
    let mut parser = Parser::default();
    let count = parser.add("count", "How many.", true, 0u64);

    assert!(parser.parse_tokens(tokens.as_slice()).unwrap());
    assert_eq!(*parser.value(&count), 42);
    assert_eq!(parser.get_parsed(), 1);
}

#[rstest]
#[case(true)]
#[case(false)]
fn untouched_flag_keeps_default(#[case] required: bool) {
    let mut parser = Parser::default();
    let ratio = parser.add("ratio", "The ratio.", required, 0.25f32);
    parser.add("other", "Something else.", false, String::default());

    assert_eq!(
        parser.parse_tokens(&["prog", "--other", "x"]).unwrap(),
        !required
    );
    assert_eq!(*parser.value(&ratio), 0.25);
    assert_eq!(parser.flag("ratio").unwrap().found(), !required);
    assert!(!parser.flag("ratio").unwrap().parsed());
}

#[rstest]
#[case("", true)]
#[case("True", true)]
#[case("anything", true)]
#[case("false", false)]
#[case("FALSE", false)]
fn boolean_values(#[case] value: &str, #[case] expected: bool) {
    let mut parser = Parser::default();
    let verbose = parser.add("verbose", "Print more.", true, !expected);

    assert!(parser
        .parse_tokens(&["prog", "--verbose", value])
        .unwrap());
    assert_eq!(*parser.value(&verbose), expected);
    assert_eq!(parser.get_parsed(), 1);
}

#[test]
fn trailing_switch() {
    let mut parser = Parser::default();
    let level = parser.add("level", "The level.", false, 1i64);
    let verbose = parser.add("verbose", "Print more.", false, false);

    assert!(parser
        .parse_tokens(&["prog", "--level", "-2", "--verbose"])
        .unwrap());
    assert_eq!(*parser.value(&level), -2);
    assert!(*parser.value(&verbose));
}

#[test]
fn unknown_flag() {
    let Cli {
        mut parser, name, ..
    } = cli();

    assert_matches!(
        parser.parse_tokens(&["prog", "--name", "alice", "--colour", "red"]),
        Err(ParseError::UnknownFlag(flag)) if flag == "colour"
    );
    assert_eq!(parser.value(&name), "");
    assert_eq!(parser.get_found(), 1);
}

#[test]
fn custom_type() {
    #[derive(Debug, PartialEq)]
    enum Mode {
        Fast,
        Safe,
    }

    impl FlagValue for Mode {
        fn convert(raw: &str) -> Result<Self, InvalidConversion> {
            match raw.to_ascii_lowercase().as_str() {
                "fast" => Ok(Mode::Fast),
                "safe" => Ok(Mode::Safe),
                _ => Err(InvalidConversion::of::<Mode>(raw)),
            }
        }
    }

    let mut parser = Parser::default();
    let mode = parser.add("mode", "How to run.", false, Mode::Safe);

    assert!(parser.parse_tokens(&["prog", "--mode", "reckless"]).unwrap());
    assert_eq!(parser.value(&mode), &Mode::Safe);
    assert_eq!(parser.get_parsed(), 0);

    assert!(parser.parse_tokens(&["prog", "--mode=FAST"]).unwrap());
    assert_eq!(parser.value(&mode), &Mode::Fast);
    assert_eq!(parser.get_parsed(), 1);
}

#[test]
fn help_message() {
    let mut parser = Parser::new("-", "Usage of prog:").unwrap();
    parser.add("width", "Column width.", false, 80u32);
    parser.add("align", "Alignment.", false, String::from("left"));

    assert_eq!(
        parser.help_message(),
        "Usage of prog:\n\t-align: Alignment.\n\t-width: Column width."
    );
}

#[test]
fn no_tokens() {
    let Cli { mut parser, .. } = cli();

    assert!(!parser.parse_tokens(&[]).unwrap());
    assert_eq!(parser.get_found(), 1);
    assert_eq!(parser.get_parsed(), 0);
}

//! `flagparse` is a small command line flag parser for Rust.
//!
//! A program declares its flags up front (each with a name, description, default value and required/optional status), parses the command line once, and then reads the typed values back.
//! `flagparse` deliberately keeps to that single concern:
//! * *Typed flags*:
//! Each flag is bound to its value type `T` at registration, and the parser converts tokens into `T` for you.
//! * *Lenient values*:
//! A value which does not convert is not an error.
//! The flag is marked as found, keeps its previous value, and the program decides what to do about it.
//! * *Caller driven failure*:
//! `flagparse` never exits the process, and only writes to the console when asked for `help`.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/greeter.rs")]
//! ```
//!
//! ```console
//! $ greeter --name alice
//! Hello alice (1 attempt(s)).
//!
//! $ greeter --name=alice --retries 5 --shout
//! HELLO ALICE (5 ATTEMPT(S)).
//!
//! $ greeter --retries 5
//! Usage: greeter --name NAME [--retries N] [--shout]
//!         --name: Who to greet.
//!         --retries: How many attempts.
//!         --shout: Greet loudly.
//! ```
//!
//! # Flags
//! Register flags with [`Parser::add`], which returns a [`FlagHandle`] for reading the value back via [`Parser::value`].
//! The value type decides how tokens are converted (see [`FlagValue`](prelude::FlagValue)):
//!
//! ```console
//! Type                     | Conversion
//! -------------------------------------------------------------------------------------------
//! String                   | the token, verbatim
//! i16, i32, i64, i128      | base 10 integer; out of range is a failure
//! u32, u64                 | base 10 unsigned integer; out of range is a failure
//! f32, f64                 | decimal floating point
//! bool                     | false for a (case-insensitive) "false", true for anything else
//! ```
//!
//! Implement [`FlagValue`](prelude::FlagValue) to add your own types, or use [`Parser::set_parser`] to change the conversion of an existing type.
//!
//! Each flag tracks two states:
//! * *Found*: the flag was specified on the command line.
//! Optional flags count as found from the start.
//! * *Parsed*: a token was successfully converted into the flag's value.
//!
//! [`Parser::parse`] returns whether every flag was found, in other words whether all required flags were specified.
//! The counts are available via [`Parser::get_found`] and [`Parser::get_parsed`], and per flag via [`Parser::flag`].
//!
//! # Cli Semantics
//! * The first token is the program name, and is never matched as a flag.
//! * A token which starts with the prefix (default `--`) and carries a name after it is a flag token.
//! A flag token which does not name a registered flag is an error ([`ParseError::UnknownFlag`]), in which case no flag is modified.
//! * Each flag token captures the token which follows it, whatever that token is.
//! For example, `--name --verbose` captures `--verbose` into `name` (and `--verbose` then captures the next token in turn).
//! * A flag token at the very end captures the empty string.
//! Since the empty string converts to `true`, a trailing `--verbose` behaves as a switch.
//! * The flag name and value may be joined with `=`: `--count=42` is equivalent to `--count 42`.
//! Every `=` splits, so `--key=a=b` is equivalent to `--key a b`; use the two token form for values containing `=`.
//! * When a flag is specified more than once, the last convertible value wins.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while registering and parsing flags.
pub use flagparse_core::*;

use flagparse::Parser;

fn main() {
    let mut parser = Parser::new("--", "Usage: greeter --name NAME [--retries N] [--shout]")
        .expect("the prefix must be valid");
    let name = parser.add("name", "Who to greet.", true, String::default());
    let retries = parser.add("retries", "How many attempts.", false, 1u32);
    let shout = parser.add("shout", "Greet loudly.", false, false);

    match parser.parse() {
        Ok(true) => {}
        Ok(false) => {
            parser.help();
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let greeting = format!(
        "Hello {n} ({r} attempt(s)).",
        n = parser.value(&name),
        r = parser.value(&retries)
    );

    if *parser.value(&shout) {
        println!("{}", greeting.to_uppercase());
    } else {
        println!("{greeting}");
    }
}

//! Common test utilities

use std::io::Cursor;

use teller::handlers::BankHandler;
use teller::repl::Session;

/// Run a scripted session, one input per line, and return handler and output
pub fn run_script(lines: &[&str]) -> (BankHandler, String) {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut session = Session::new(BankHandler::default(), Cursor::new(script), Vec::new());
    session.run().expect("session failed");

    let (handler, output) = session.into_parts();
    (handler, String::from_utf8(output).expect("output is not UTF-8"))
}

/// Inputs that register customer `tax_id` and open account `number`
pub fn onboarding(tax_id: &'static str, number: &'static str) -> Vec<&'static str> {
    vec![
        "C", "Ana", "01/02/1990", tax_id, "Rua A, 10",
        "A", tax_id, number,
    ]
}

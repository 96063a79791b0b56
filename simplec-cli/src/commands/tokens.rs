//! The `simplec tokens` command.

use simplec::Lexer;
use std::fs;

pub fn run(file: &str) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let (tokens, diagnostics) = Lexer::new(&source).tokenize();

    for token in &tokens {
        println!("{}", token);
    }
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(format!("{} lexical error(s) found", diagnostics.len()))
    }
}

//! The `simplec ast` command.

use simplec::parse;
use std::fs;

pub fn run(file: &str) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let (program, diagnostics) = parse(&source);

    println!("{:#?}", program);
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(format!("{} error(s) found", diagnostics.len()))
    }
}

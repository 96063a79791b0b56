//! The `simplec check` command.

use simplec::{compile_frontend, render};
use std::fs;

pub fn run(file: &str, json: bool, quiet: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let result = compile_frontend(&source);

    if json {
        let report = serde_json::json!({
            "tokens": result.tokens,
            "diagnostics": result.diagnostics,
        });
        let rendered = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", rendered);
    } else {
        for diagnostic in &result.diagnostics {
            render(&source, file, diagnostic);
        }
    }

    if result.diagnostics.is_empty() {
        if !quiet {
            println!("{}: no errors found", file);
        }
        Ok(())
    } else {
        Err(format!(
            "{}: {} error(s) found",
            file,
            result.diagnostics.len()
        ))
    }
}

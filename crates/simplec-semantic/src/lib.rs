//! Semantic analysis for SimpleC.
//!
//! This crate checks variable declarations against a scoped symbol table:
//! a name may be declared once per scope and must be declared before use.
//! The AST is read without mutation, and `Error` nodes left behind by
//! parser recovery are skipped, never entered.

mod analyze;
mod scope;

pub use analyze::Analyzer;
pub use scope::{Symbol, SymbolTable};

use simplec_diagnostic::Diagnostic;
use simplec_syntax::Program;

/// Analyze a program and return its semantic diagnostics.
pub fn analyze(program: &Program) -> Vec<Diagnostic> {
    Analyzer::new().analyze(program)
}

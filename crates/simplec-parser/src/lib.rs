//! Parser for SimpleC.
//!
//! This crate provides a recursive descent parser that converts
//! tokens into an abstract syntax tree.
//!
//! ## Error Recovery
//!
//! The parser keeps going after a fault so that one pass can report
//! every independent error: missing terminators (`;`, `)`, `}`) are
//! logically synthesized when the next token could legitimately follow
//! the construct, a stray `;` after an if-condition is consumed, and
//! anything else falls back to panic-mode skipping with a one-token
//! progress guarantee.

mod parser;
mod recovery;

pub use parser::Parser;
pub use recovery::{Rule, at_resync_boundary, in_cond_follow, in_stmt_follow, suggestion};

use simplec_diagnostic::Diagnostic;
use simplec_lexer::Lexer;
use simplec_syntax::Program;

/// Parse source code into an AST, collecting lexical and syntax
/// diagnostics in emission order.
pub fn parse(source: &str) -> (Program, Vec<Diagnostic>) {
    let lexer = Lexer::new(source);
    let (tokens, mut diagnostics) = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    diagnostics.extend(parser.diagnostics());
    (program, diagnostics)
}

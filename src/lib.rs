//! The SimpleC compiler front-end.
//!
//! SimpleC is a small C-like teaching language. This crate wires the three
//! front-end stages together: the lexer, the error-recovering parser and
//! the symbol-resolving semantic pass. One call yields the token stream,
//! the AST and a collated diagnostic report:
//!
//! ```
//! let output = simplec::compile_frontend("int a = 1; int b = 2;");
//! assert!(output.diagnostics.is_empty());
//! assert_eq!(output.ast.children.len(), 2);
//! ```
//!
//! No stage aborts on a fault. Each one runs to the end of its input and
//! hands a structurally usable artifact to the next; callers detect
//! failure by inspecting `diagnostics`, which holds all lexical, then all
//! syntax, then all semantic entries, each phase in source order.

pub use simplec_common::Span;
pub use simplec_diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, ErrorCode, render};
pub use simplec_lexer::{Lexer, Token, TokenKind};
pub use simplec_parser::{Parser, parse};
pub use simplec_semantic::{Analyzer, Symbol, SymbolTable};
pub use simplec_syntax::{
    BinOp, Expr, ExprKind, Ident, Program, Stmt, StmtKind, TyName, TypeNode,
};

/// Everything the front-end produces for one source string.
#[derive(Debug)]
pub struct CompileOutput {
    /// The token stream, always terminated by a single `Eof` token.
    pub tokens: Vec<Token>,
    /// The AST. Always rooted at a `Program`; may contain `Error` nodes.
    pub ast: Program,
    /// All diagnostics, grouped by phase (lexical, syntax, semantic) and
    /// in emission order within each phase.
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the full front-end on a source string.
///
/// This is a pure function of its input: each invocation owns its own
/// cursor, parser state, symbol stack and diagnostic buffers, so
/// concurrent calls share nothing.
pub fn compile_frontend(source: &str) -> CompileOutput {
    let (tokens, mut diagnostics) = Lexer::new(source).tokenize();

    let mut parser = Parser::new(tokens.clone());
    let ast = parser.parse_program();
    diagnostics.extend(parser.diagnostics());

    diagnostics.extend(simplec_semantic::analyze(&ast));

    CompileOutput {
        tokens,
        ast,
        diagnostics,
    }
}

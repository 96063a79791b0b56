//! Error codes for SimpleC diagnostics.

use serde::Serialize;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,

    // Parser errors (E0100 - E0199)
    MissingSemicolon,
    MissingCloseParen,
    UnclosedBlock,
    StraySemicolon,
    UnexpectedStatementStart,
    ExpectedExpression,
    ExpectedIdentifier,
    ExpectedTypeSpecifier,
    ExpectedOpenParen,

    // Semantic errors (E0200 - E0299)
    UndeclaredVariable,
    RedeclaredVariable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",

            // Parser
            ErrorCode::MissingSemicolon => "E0100",
            ErrorCode::MissingCloseParen => "E0101",
            ErrorCode::UnclosedBlock => "E0102",
            ErrorCode::StraySemicolon => "E0103",
            ErrorCode::UnexpectedStatementStart => "E0104",
            ErrorCode::ExpectedExpression => "E0105",
            ErrorCode::ExpectedIdentifier => "E0106",
            ErrorCode::ExpectedTypeSpecifier => "E0107",
            ErrorCode::ExpectedOpenParen => "E0108",

            // Semantic
            ErrorCode::UndeclaredVariable => "E0200",
            ErrorCode::RedeclaredVariable => "E0201",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",

            // Parser
            ErrorCode::MissingSemicolon => "missing semicolon",
            ErrorCode::MissingCloseParen => "missing closing parenthesis",
            ErrorCode::UnclosedBlock => "block is never closed",
            ErrorCode::StraySemicolon => "semicolon makes the statement empty",
            ErrorCode::UnexpectedStatementStart => "token cannot start a statement",
            ErrorCode::ExpectedExpression => "expected an expression",
            ErrorCode::ExpectedIdentifier => "expected an identifier",
            ErrorCode::ExpectedTypeSpecifier => "expected a type specifier",
            ErrorCode::ExpectedOpenParen => "expected an opening parenthesis",

            // Semantic
            ErrorCode::UndeclaredVariable => "use of a variable that was never declared",
            ErrorCode::RedeclaredVariable => "variable declared twice in the same scope",
        }
    }
}

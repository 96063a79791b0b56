//! Token definitions for SimpleC.

use serde::Serialize;
use simplec_common::Span;
use std::fmt;

/// A token with its kind, verbatim source text and position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The source text this token was lexed from (empty for `Eof`).
    pub lexeme: String,
    /// 1-based source line.
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }

    /// Renders the token the way diagnostics quote it: delimiters as the
    /// bare character (`'{'`), everything else as `KIND('<lexeme>')`, with
    /// `EOF('')` for the end of input.
    pub fn describe(&self) -> String {
        match self.kind.category() {
            "DELIM" => format!("'{}'", self.lexeme),
            category => format!("{}('{}')", category, self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    /// The debug/report rendering: `Token(KEYWORD, 'if', L3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, '{}', L{})",
            self.kind.category(),
            self.lexeme,
            self.line
        )
    }
}

/// The kind of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    // Literals
    Number(f64),
    Str(String),

    // Identifiers
    Ident(String),

    // Keywords
    KwInt,
    KwFloat,
    KwIf,
    KwElse,

    // Operators
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    Eq,     // =
    EqEq,   // ==
    BangEq, // !=
    Lt,     // <
    LtEq,   // <=
    Gt,     // >
    GtEq,   // >=

    // Delimiters
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Comma,     // ,

    // Special
    Eof,
}

impl TokenKind {
    /// Returns the keyword for an identifier, if any.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "int" => Some(TokenKind::KwInt),
            "float" => Some(TokenKind::KwFloat),
            "if" => Some(TokenKind::KwIf),
            "else" => Some(TokenKind::KwElse),
            _ => None,
        }
    }

    /// The coarse token class used by the report format.
    pub fn category(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Str(_) => "STRING",
            TokenKind::Ident(_) => "ID",
            TokenKind::KwInt | TokenKind::KwFloat | TokenKind::KwIf | TokenKind::KwElse => {
                "KEYWORD"
            }
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::EqEq
            | TokenKind::BangEq
            | TokenKind::Lt
            | TokenKind::LtEq
            | TokenKind::Gt
            | TokenKind::GtEq => "OP",
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::Semicolon
            | TokenKind::Comma => "DELIM",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for the relational operators of the `rel` grammar rule.
    pub fn is_rel_op(&self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::BangEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }
}

//! Diagnostic types and the shared collector.

use crate::ErrorCode;
use serde::Serialize;
use simplec_common::Span;
use std::fmt;

/// The front-end phase a diagnostic originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    Lex,
    Syntax,
    Semantic,
}

impl DiagnosticKind {
    /// Short label used when rendering a source snippet.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::Lex => "lexical error here",
            DiagnosticKind::Syntax => "syntax error here",
            DiagnosticKind::Semantic => "semantic error here",
        }
    }
}

/// A single fault report with an optional advisory suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    /// 1-based source line the diagnostic is keyed on.
    pub line: u32,
    pub span: Span,
    pub message: String,
    /// Advisory suggestion; never present without an accompanying error.
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, line: u32, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            line,
            span,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Plain-text report form, one line per diagnostic (plus the
    /// suggestion continuation line when one exists).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Lex => {
                write!(f, "Lexical Error on line {}: {}", self.line, self.message)?;
            }
            DiagnosticKind::Syntax => {
                write!(f, "Syntax Error on line {}: {}", self.line, self.message)?;
            }
            DiagnosticKind::Semantic => {
                write!(f, "Semantic Error: {} on line {}", self.message, self.line)?;
            }
        }
        if let Some(help) = &self.help {
            write!(f, "\n   -> Suggestion: {}", help)?;
        }
        Ok(())
    }
}

/// An ordered diagnostic buffer.
///
/// Emission order is preserved and nothing is deduplicated; the emitting
/// stage is responsible for not reporting the same fault twice for one
/// source position.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic, preserving emission order.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of everything emitted so far.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

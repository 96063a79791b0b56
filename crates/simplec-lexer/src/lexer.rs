//! The SimpleC lexer.
//! SimpleC 词法分析器。

use crate::token::{Token, TokenKind};
use simplec_common::Span;
use simplec_diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, ErrorCode};

/// The SimpleC lexer.
/// SimpleC 词法分析器。
///
/// Converts source code into a sequence of tokens ending in `Eof`.
/// 将源代码转换为以 `Eof` 结尾的 token 序列。
pub struct Lexer<'src> {
    src: &'src str,
    /// Character iterator with position info
    /// 带位置信息的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current byte position in source
    /// 当前在源码中的字节位置
    pos: usize,
    /// Current 1-based line
    /// 当前行号（从 1 开始）
    line: u32,
    /// Line of the last token or fault seen, used for the `Eof` token
    /// 最后一个 token 或故障所在的行，用于 `Eof` token
    last_line: u32,
    /// Collected lexical diagnostics
    /// 收集的词法诊断信息
    diagnostics: Diagnostics,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            src: source,
            chars: source.char_indices().peekable(),
            pos: 0,
            line: 1,
            last_line: 1,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, self.diagnostics.into_vec())
    }

    /// Get the next token, skipping trivia and unknown characters.
    /// 获取下一个 token，跳过空白和无法识别的字符。
    fn next_token(&mut self) -> Token {
        loop {
            // Skip whitespace and line comments - 跳过空白字符和行注释
            self.skip_trivia();

            let start = self.pos;
            let line = self.line;

            // Check for end of file - 检查是否到达文件末尾
            let Some((_pos, ch)) = self.advance() else {
                return Token::new(
                    TokenKind::Eof,
                    "",
                    self.last_line,
                    Span::from_usize(start, start),
                );
            };

            let kind = match ch {
                // Delimiters - 定界符
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,

                // Single-character arithmetic operators - 单字符算术运算符
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,

                // Slash; `//` comments were consumed by skip_trivia
                // 斜杠；`//` 注释已由 skip_trivia 消耗
                '/' => TokenKind::Slash,

                // Equals or double equals - 等号或双等号
                '=' => {
                    if self.peek_char() == Some('=') {
                        self.advance();
                        TokenKind::EqEq
                    } else {
                        TokenKind::Eq
                    }
                }

                // Bang is only valid as part of `!=` - 感叹号仅在 `!=` 中有效
                '!' => {
                    if self.peek_char() == Some('=') {
                        self.advance();
                        TokenKind::BangEq
                    } else {
                        self.error_unexpected_char(ch, start, line);
                        continue;
                    }
                }

                // Less than - 小于号
                '<' => {
                    if self.peek_char() == Some('=') {
                        self.advance();
                        TokenKind::LtEq
                    } else {
                        TokenKind::Lt
                    }
                }

                // Greater than - 大于号
                '>' => {
                    if self.peek_char() == Some('=') {
                        self.advance();
                        TokenKind::GtEq
                    } else {
                        TokenKind::Gt
                    }
                }

                // String literal - 字符串字面量
                '"' => match self.string_literal(start, line) {
                    Some(kind) => kind,
                    None => continue,
                },

                // Numbers - 数字
                '0'..='9' => self.number(),

                // Identifiers and keywords - 标识符和关键字
                'a'..='z' | 'A'..='Z' | '_' => self.identifier(),

                _ => {
                    self.error_unexpected_char(ch, start, line);
                    continue;
                }
            };

            self.last_line = line;
            let lexeme = &self.src[start..self.pos];
            return Token::new(kind, lexeme, line, Span::from_usize(start, self.pos));
        }
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
            }
        }
        result
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Peek at the nth character ahead.
    /// 查看前方第 n 个字符。
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    /// Skip whitespace and `//` line comments.
    /// 跳过空白字符和 `//` 行注释。
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '/' && self.peek_nth(1) == Some('/') {
                // Consume to end of line; the newline itself is whitespace
                // 消耗到行尾；换行符本身作为空白处理
                while let Some(c) = self.peek_char() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    /// Parse a string literal (double-quoted). Returns `None` when the
    /// literal never terminates.
    /// 解析字符串字面量（双引号包围）。未终止时返回 `None`。
    fn string_literal(&mut self, start: usize, line: u32) -> Option<TokenKind> {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some((_, '"')) => break,
                Some((_, ch)) => value.push(ch),
                None => {
                    let span = Span::from_usize(start, self.pos);
                    self.last_line = line;
                    self.diagnostics.emit(
                        Diagnostic::error(
                            DiagnosticKind::Lex,
                            line,
                            span,
                            "Unterminated string literal",
                        )
                        .with_code(ErrorCode::UnterminatedString),
                    );
                    return None;
                }
            }
        }

        Some(TokenKind::Str(value))
    }

    /// Parse a number literal: digits with an optional fraction.
    /// 解析数字字面量：整数部分加可选的小数部分。
    fn number(&mut self) -> TokenKind {
        let start = self.pos - 1;

        // Integer part - 整数部分
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        // Fraction, only when a digit follows the dot
        // 小数部分，仅当点号后面确实是数字时
        if self.peek_char() == Some('.') {
            let mut lookahead = self.chars.clone();
            lookahead.next(); // skip .
            if let Some((_, ch)) = lookahead.next()
                && ch.is_ascii_digit()
            {
                self.advance(); // consume .
                while let Some(ch) = self.peek_char() {
                    if ch.is_ascii_digit() {
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        let value: f64 = self.src[start..self.pos].parse().unwrap_or_default();
        TokenKind::Number(value)
    }

    /// Parse an identifier or keyword.
    /// 解析标识符或关键字。
    fn identifier(&mut self) -> TokenKind {
        let start = self.pos - 1;

        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        // Check for keywords - 检查是否为关键字
        let text = &self.src[start..self.pos];
        TokenKind::keyword_from_str(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()))
    }

    /// Report an unexpected character and skip it.
    /// 报告意外字符并跳过它。
    fn error_unexpected_char(&mut self, ch: char, pos: usize, line: u32) {
        let span = Span::from_usize(pos, self.pos);
        self.last_line = line;
        self.diagnostics.emit(
            Diagnostic::error(
                DiagnosticKind::Lex,
                line,
                span,
                format!("Unexpected character '{}'", ch),
            )
            .with_code(ErrorCode::UnexpectedCharacter),
        );
    }
}

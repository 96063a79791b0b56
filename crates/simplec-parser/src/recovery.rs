//! Error recovery data for the parser.
//! 解析器的错误恢复数据。
//!
//! This module holds the follow sets used to decide when a missing
//! terminator can be synthesized, the panic-mode resynchronization
//! boundary, and the static suggestion table keyed on (rule, observed
//! token).
//! 本模块包含用于判断何时可以合成缺失终结符的 follow 集合、
//! panic 模式的重新同步边界，以及以（规则，观察到的 token）为键的
//! 静态建议表。

use simplec_lexer::TokenKind;

/// Follow set of a declaration, assignment or expression statement.
/// Seeing one of these where a `;` was expected means the `;` can be
/// synthesized.
/// 声明、赋值或表达式语句的 follow 集合。
/// 在期望 `;` 的位置看到其中之一，意味着可以合成 `;`。
pub fn in_stmt_follow(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::KwIf
            | TokenKind::KwInt
            | TokenKind::KwFloat
            | TokenKind::Ident(_)
            | TokenKind::RBrace
            | TokenKind::Eof
    )
}

/// Follow set of an if-condition. Seeing one of these where a `)` was
/// expected means the `)` can be synthesized.
/// if 条件的 follow 集合。
/// 在期望 `)` 的位置看到其中之一，意味着可以合成 `)`。
pub fn in_cond_follow(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LBrace
            | TokenKind::KwIf
            | TokenKind::Ident(_)
            | TokenKind::KwInt
            | TokenKind::KwFloat
    )
}

/// Panic-mode boundary: skipping stops at one of these (or end of input).
/// panic 模式的边界：跳过 token 时遇到其中之一（或输入结束）即停止。
pub fn at_resync_boundary(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Semicolon | TokenKind::RBrace | TokenKind::RParen
    )
}

/// The grammar rule a recoverable fault was detected in.
/// 检测到可恢复故障时所处的语法规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `type ID ('=' expr)? (',' ID ('=' expr)?)* ';'`
    Declaration,
    /// `ID '=' expr ';'` and other expression statements
    /// `ID '=' expr ';'` 以及其他表达式语句
    ExprStatement,
    /// `'(' expr ')'` after `if`
    IfCondition,
    /// The statement position following `if (expr)`
    /// `if (expr)` 之后的语句位置
    IfBody,
}

/// Advisory text for each recoverable fault, keyed on the rule being
/// parsed and the token observed instead of the expected one. One
/// suggestion per fault; adding a new suggestion means adding a row here,
/// not touching parser control flow.
/// 每种可恢复故障的建议文本，以正在解析的规则和实际观察到的 token 为键。
/// 每个故障一条建议；新增建议只需在此加一行，无需改动解析器控制流。
pub fn suggestion(rule: Rule, observed: &TokenKind) -> Option<&'static str> {
    match (rule, observed) {
        (Rule::Declaration, _) => Some("Did you forget a ';' at the end of the declaration?"),
        (Rule::ExprStatement, _) => Some("Did you forget a ';' at the end of the statement?"),
        (Rule::IfCondition, TokenKind::LBrace) => Some("Did you forget a ')' before the '{'?"),
        (Rule::IfCondition, _) => Some("Did you forget a ')' to close the if-condition?"),
        (Rule::IfBody, TokenKind::Semicolon) => Some("Did you mean to delete this ';'?"),
        (Rule::IfBody, _) => None,
    }
}

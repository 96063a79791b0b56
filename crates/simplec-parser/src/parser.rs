//! The SimpleC parser.

use simplec_common::Span;
use simplec_diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, ErrorCode};
use simplec_lexer::{Token, TokenKind};
use simplec_syntax::*;

use crate::recovery::{self, Rule};

/// The SimpleC parser.
///
/// A recursive-descent parser with localized panic-mode recovery. It
/// never fails: structural faults degrade to `Error` nodes and every
/// fault is reported through the diagnostic buffer.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Diagnostics,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_vec()
    }

    /// Parse a complete program.
    pub fn parse_program(&mut self) -> Program {
        let start = self.current_span();
        let mut children = Vec::new();

        while !self.at_end() {
            self.parse_statement_into(&mut children);
        }

        let span = start.merge(self.current_span());
        Program { children, span }
    }

    /// Parse one statement into `out`. Declarations may contribute several
    /// statements (`int a = 1, b = 2;`); an unrecognized statement head is
    /// reported, one token is consumed, and the caller's loop retries.
    fn parse_statement_into(&mut self, out: &mut Vec<Stmt>) {
        match self.current_kind() {
            TokenKind::KwInt | TokenKind::KwFloat => self.parse_var_decl(out),
            TokenKind::KwIf => out.push(self.parse_if()),
            TokenKind::LBrace => out.push(self.parse_block()),
            TokenKind::Ident(_) => out.push(self.parse_expr_stmt()),
            _ => {
                self.unexpected_statement_start();
                self.advance();
            }
        }
    }

    /// Parse exactly one statement, for the if/else body position.
    ///
    /// Retries after statement-head panics; gives up with an `Error` node
    /// when the body position runs into `}` or end of input.
    fn parse_statement(&mut self) -> Stmt {
        loop {
            let line = self.current_line();
            let span = self.current_span();
            match self.current_kind() {
                TokenKind::KwInt | TokenKind::KwFloat => {
                    let mut decls = Vec::new();
                    self.parse_var_decl(&mut decls);
                    if decls.len() == 1 {
                        if let Some(stmt) = decls.pop() {
                            return stmt;
                        }
                    }
                    // A declarator list in single-statement position keeps
                    // its statements together as one block.
                    return Stmt::new(StmtKind::Block(decls), line, span);
                }
                TokenKind::KwIf => return self.parse_if(),
                TokenKind::LBrace => return self.parse_block(),
                TokenKind::Ident(_) => return self.parse_expr_stmt(),
                TokenKind::RBrace | TokenKind::Eof => {
                    return Stmt::new(StmtKind::Error, line, span);
                }
                _ => {
                    self.unexpected_statement_start();
                    self.advance();
                }
            }
        }
    }

    /// `var_decl := type ID ('=' expr)? (',' ID ('=' expr)?)* ';'`
    ///
    /// Pushes one `VarDecl` per declarator, all sharing the written type.
    fn parse_var_decl(&mut self, out: &mut Vec<Stmt>) {
        let ty = self.parse_type_specifier();

        loop {
            let name = match self.current_kind() {
                TokenKind::Ident(name) => {
                    let name = name.clone();
                    let ident = Ident::new(name, self.current_line(), self.current_span());
                    self.advance();
                    ident
                }
                _ => {
                    self.error_and_resync(
                        ErrorCode::ExpectedIdentifier,
                        "Expected an identifier after type specifier",
                    );
                    return;
                }
            };

            let init = if self.eat(TokenKind::Eq) {
                Some(self.parse_expr())
            } else {
                None
            };

            let end = init.as_ref().map(|e| e.span).unwrap_or(name.span);
            out.push(Stmt::new(
                StmtKind::VarDecl {
                    ty: ty.clone(),
                    name,
                    init,
                },
                ty.line,
                ty.span.merge(end),
            ));

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.finish_statement(Rule::Declaration);
    }

    /// `type_specifier := 'int' | 'float'`
    fn parse_type_specifier(&mut self) -> TypeNode {
        let line = self.current_line();
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::KwInt => {
                self.advance();
                TypeNode {
                    name: TyName::Int,
                    line,
                    span,
                }
            }
            TokenKind::KwFloat => {
                self.advance();
                TypeNode {
                    name: TyName::Float,
                    line,
                    span,
                }
            }
            _ => {
                let message = format!(
                    "Expected a type specifier (e.g., int, float). Encountered {}",
                    self.current().describe()
                );
                self.emit(ErrorCode::ExpectedTypeSpecifier, message, None);
                // Dummy type so parsing can continue.
                TypeNode {
                    name: TyName::Int,
                    line,
                    span,
                }
            }
        }
    }

    /// `if_stmt := 'if' '(' expr ')' statement ('else' statement)?`
    fn parse_if(&mut self) -> Stmt {
        let line = self.current_line();
        let start = self.current_span();
        self.advance(); // if

        if !self.eat(TokenKind::LParen) {
            let message = format!(
                "Expected '(' after 'if'. Encountered {}",
                self.current().describe()
            );
            self.emit(ErrorCode::ExpectedOpenParen, message, None);
            // The '(' is synthesized; the condition starts at the current
            // token.
        }

        let condition = self.parse_expr();

        if !self.eat(TokenKind::RParen) {
            if recovery::in_cond_follow(self.current_kind()) {
                let message = format!(
                    "Missing ')' after if-condition. Encountered {}",
                    self.current().describe()
                );
                let help = recovery::suggestion(Rule::IfCondition, self.current_kind());
                self.emit(ErrorCode::MissingCloseParen, message, help);
            } else {
                self.error_and_resync(
                    ErrorCode::MissingCloseParen,
                    "Expected ')' after if-condition",
                );
            }
        }

        let if_block = if self.check(TokenKind::Semicolon) {
            let semi_line = self.current_line();
            let semi_span = self.current_span();
            let help = recovery::suggestion(Rule::IfBody, self.current_kind());
            self.emit(
                ErrorCode::StraySemicolon,
                "Unexpected ';' after if-condition. This creates an empty 'if' statement."
                    .to_string(),
                help,
            );
            self.advance(); // the stray ';'
            Stmt::new(StmtKind::Block(Vec::new()), semi_line, semi_span)
        } else {
            self.parse_statement()
        };

        let else_block = if self.eat(TokenKind::KwElse) {
            Some(Box::new(self.parse_statement()))
        } else {
            None
        };

        let span = start.merge(self.previous_span());
        Stmt::new(
            StmtKind::If {
                condition,
                if_block: Box::new(if_block),
                else_block,
            },
            line,
            span,
        )
    }

    /// `block := '{' statement* '}'`
    fn parse_block(&mut self) -> Stmt {
        let line = self.current_line();
        let start = self.current_span();
        self.advance(); // {

        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.at_end() {
            self.parse_statement_into(&mut statements);
        }

        if !self.eat(TokenKind::RBrace) {
            // Only EOF exits the loop without a '}'. Nested unclosed blocks
            // each report here, innermost first.
            let message = format!(
                "Missing '}}' to close block. Encountered {}",
                self.current().describe()
            );
            self.emit(ErrorCode::UnclosedBlock, message, None);
        }

        let span = start.merge(self.previous_span());
        Stmt::new(StmtKind::Block(statements), line, span)
    }

    /// An expression statement: an assignment or a bare expression,
    /// terminated by `;`.
    fn parse_expr_stmt(&mut self) -> Stmt {
        let line = self.current_line();
        let start = self.current_span();
        let expr = self.parse_expr();
        self.finish_statement(Rule::ExprStatement);
        let span = start.merge(self.previous_span());
        Stmt::new(StmtKind::Expr(expr), line, span)
    }

    /// Expect the `;` that terminates a declaration or expression
    /// statement.
    ///
    /// If the current token may legitimately begin what follows the
    /// statement, the `;` is synthesized: the fault is reported with a
    /// suggestion and the cursor stays put. Anything else is a confusing
    /// token, reported through the panic path.
    fn finish_statement(&mut self, rule: Rule) {
        if self.eat(TokenKind::Semicolon) {
            return;
        }

        if recovery::in_stmt_follow(self.current_kind()) {
            let context = match rule {
                Rule::Declaration => "declaration",
                _ => "statement",
            };
            let message = format!(
                "Missing ';' after {}. Encountered {}",
                context,
                self.current().describe()
            );
            let help = recovery::suggestion(rule, self.current_kind());
            self.emit(ErrorCode::MissingSemicolon, message, help);
            return;
        }

        let context = match rule {
            Rule::Declaration => "Expected ';' after declaration",
            _ => "Expected ';' after expression statement",
        };
        self.error_and_resync(ErrorCode::MissingSemicolon, context);
    }

    // ========== Expression Parsing ==========

    /// `expr := assignment | rel` — an identifier directly followed by `=`
    /// begins a (right-associative) assignment.
    fn parse_expr(&mut self) -> Expr {
        if let TokenKind::Ident(name) = self.current_kind()
            && matches!(self.peek_kind(1), TokenKind::Eq)
        {
            let name = name.clone();
            let line = self.current_line();
            let start = self.current_span();
            let target = Ident::new(name, line, start);
            self.advance(); // identifier
            self.advance(); // =
            let value = self.parse_expr();
            let span = start.merge(value.span);
            return Expr::new(
                ExprKind::Assign {
                    target,
                    value: Box::new(value),
                },
                line,
                span,
            );
        }

        self.parse_rel()
    }

    /// `rel := add (REL_OP add)?`
    fn parse_rel(&mut self) -> Expr {
        let left = self.parse_add();

        let op = match self.current_kind() {
            TokenKind::EqEq => Some(BinOp::Eq),
            TokenKind::BangEq => Some(BinOp::Ne),
            TokenKind::Lt => Some(BinOp::Lt),
            TokenKind::LtEq => Some(BinOp::Le),
            TokenKind::Gt => Some(BinOp::Gt),
            TokenKind::GtEq => Some(BinOp::Ge),
            _ => None,
        };

        match op {
            Some(op) => {
                self.advance();
                let right = self.parse_add();
                let line = left.line;
                let span = left.span.merge(right.span);
                Expr::new(
                    ExprKind::Binary {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    line,
                    span,
                )
            }
            None => left,
        }
    }

    /// `add := mul (('+'|'-') mul)*`
    fn parse_add(&mut self) -> Expr {
        let mut left = self.parse_mul();

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_mul();
            let line = left.line;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                line,
                span,
            );
        }

        left
    }

    /// `mul := primary (('*'|'/') primary)*`
    fn parse_mul(&mut self) -> Expr {
        let mut left = self.parse_primary();

        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_primary();
            let line = left.line;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                line,
                span,
            );
        }

        left
    }

    /// `primary := NUMBER | ID | '(' expr ')'`
    ///
    /// A token that cannot start an expression is reported and substituted
    /// with an `Error` node without consuming anything; the enclosing
    /// statement's terminator handling makes progress.
    fn parse_primary(&mut self) -> Expr {
        let line = self.current_line();
        let span = self.current_span();

        match self.current_kind().clone() {
            TokenKind::Number(value) => {
                self.advance();
                Expr::new(ExprKind::Number(value), line, span)
            }
            TokenKind::Ident(name) => {
                self.advance();
                Expr::new(ExprKind::Variable(Ident::new(name, line, span)), line, span)
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr();
                if !self.eat(TokenKind::RParen) {
                    let message = format!(
                        "Missing ')' to close parenthesized expression. Encountered {}",
                        self.current().describe()
                    );
                    self.emit(ErrorCode::MissingCloseParen, message, None);
                }
                expr
            }
            _ => {
                self.emit(
                    ErrorCode::ExpectedExpression,
                    "Invalid syntax in expression. Expected number, variable, or '('.".to_string(),
                    None,
                );
                Expr::new(ExprKind::Error, line, span)
            }
        }
    }

    // ========== Token Helpers ==========

    fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or(&self.tokens[self.tokens.len() - 1])
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current_line(&self) -> u32 {
        self.current().line
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn peek_kind(&self, n: usize) -> &TokenKind {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(&kind)
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========== Error Reporting and Recovery ==========

    /// Report a syntax fault at the current token.
    fn emit(&mut self, code: ErrorCode, message: String, help: Option<&'static str>) {
        let mut diagnostic = Diagnostic::error(
            DiagnosticKind::Syntax,
            self.current_line(),
            self.current_span(),
            message,
        )
        .with_code(code);
        if let Some(help) = help {
            diagnostic = diagnostic.with_help(help);
        }
        self.diagnostics.emit(diagnostic);
    }

    /// Report the statement-head panic diagnostic. The caller consumes one
    /// token afterwards, which bounds successive resyncs at one site.
    fn unexpected_statement_start(&mut self) {
        let message = format!(
            "Unexpected token {} at start of statement",
            self.current().describe()
        );
        self.emit(ErrorCode::UnexpectedStatementStart, message, None);
    }

    /// Report a fault and skip ahead to a statement boundary: one of `;`,
    /// `}`, `)` or end of input. A boundary `;` is consumed.
    fn error_and_resync(&mut self, code: ErrorCode, context: &str) {
        let message = format!("{}. Encountered {}", context, self.current().describe());
        self.emit(code, message, None);

        while !self.at_end() && !recovery::at_resync_boundary(self.current_kind()) {
            self.advance();
        }
        if self.check(TokenKind::Semicolon) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplec_lexer::Lexer;

    fn parse_source(source: &str) -> (Program, Vec<Diagnostic>) {
        let (tokens, _) = Lexer::new(source).tokenize();
        let mut parser = Parser::new(tokens);
        let program = parser.parse_program();
        (program, parser.diagnostics())
    }

    #[test]
    fn declarator_list_shares_type() {
        let (program, diags) = parse_source("int a = 1, b, c = 3;");
        assert!(diags.is_empty());
        assert_eq!(program.children.len(), 3);
        for stmt in &program.children {
            let StmtKind::VarDecl { ty, .. } = &stmt.kind else {
                panic!("expected VarDecl, got {:?}", stmt.kind);
            };
            assert_eq!(ty.name, TyName::Int);
        }
    }

    #[test]
    fn chained_assignment_is_right_associative() {
        let (program, diags) = parse_source("x = y = 5;");
        assert!(diags.is_empty());
        let StmtKind::Expr(expr) = &program.children[0].kind else {
            panic!("expected expression statement");
        };
        let ExprKind::Assign { target, value } = &expr.kind else {
            panic!("expected assignment");
        };
        assert_eq!(target.name, "x");
        assert!(matches!(value.kind, ExprKind::Assign { .. }));
    }

    #[test]
    fn missing_semicolon_is_synthesized_before_statement_head() {
        let (program, diags) = parse_source("int x = 10\nx = 5;");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].message,
            "Missing ';' after declaration. Encountered ID('x')"
        );
        assert_eq!(program.children.len(), 2);
    }

    #[test]
    fn expression_slot_failure_consumes_nothing() {
        let (program, diags) = parse_source("x = ;");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].message,
            "Invalid syntax in expression. Expected number, variable, or '('."
        );
        let StmtKind::Expr(expr) = &program.children[0].kind else {
            panic!("expected expression statement");
        };
        let ExprKind::Assign { value, .. } = &expr.kind else {
            panic!("expected assignment");
        };
        assert!(value.is_error());
    }
}

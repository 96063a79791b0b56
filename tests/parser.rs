//! Integration tests for the simplec-parser crate.

use simplec_diagnostic::{Diagnostic, DiagnosticKind};
use simplec_parser::parse;
use simplec_syntax::{BinOp, ExprKind, Program, Stmt, StmtKind, TyName};

fn parse_clean(source: &str) -> Program {
    let (program, diagnostics) = parse(source);
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
    program
}

fn syntax_messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::Syntax)
        .map(|d| d.message.as_str())
        .collect()
}

fn expect_var_decl(stmt: &Stmt) -> (&TyName, &str, bool) {
    let StmtKind::VarDecl { ty, name, init } = &stmt.kind else {
        panic!("expected VarDecl, got {:?}", stmt.kind);
    };
    (&ty.name, &name.name, init.is_some())
}

// ============================================================================
// Basic Parsing Tests
// ============================================================================

#[test]
fn test_parse_clean_program() {
    let program = parse_clean("int a = 1; int b = 2;");
    assert_eq!(program.children.len(), 2);
    assert_eq!(expect_var_decl(&program.children[0]), (&TyName::Int, "a", true));
    assert_eq!(expect_var_decl(&program.children[1]), (&TyName::Int, "b", true));
}

#[test]
fn test_parse_decl_without_initializer() {
    let program = parse_clean("float f;");
    assert_eq!(expect_var_decl(&program.children[0]), (&TyName::Float, "f", false));
}

#[test]
fn test_parse_declarator_list() {
    let program = parse_clean("int a = 1, b, c = 3;");
    assert_eq!(program.children.len(), 3);
    assert_eq!(expect_var_decl(&program.children[1]), (&TyName::Int, "b", false));
}

#[test]
fn test_parse_if_else() {
    let program = parse_clean("int x = 1; if (x > 0) { x = 2; } else { x = 3; }");
    let StmtKind::If { else_block, .. } = &program.children[1].kind else {
        panic!("expected If");
    };
    assert!(else_block.is_some());
}

#[test]
fn test_else_binds_to_nearest_if() {
    let program = parse_clean("int x = 1; if (x > 0) if (x > 1) x = 2; else x = 3;");
    let StmtKind::If {
        if_block,
        else_block,
        ..
    } = &program.children[1].kind
    else {
        panic!("expected If");
    };
    assert!(else_block.is_none());
    let StmtKind::If { else_block, .. } = &if_block.kind else {
        panic!("expected nested If");
    };
    assert!(else_block.is_some());
}

#[test]
fn test_parse_nested_blocks() {
    let program = parse_clean("{ { int a = 1; } }");
    let StmtKind::Block(outer) = &program.children[0].kind else {
        panic!("expected Block");
    };
    assert!(matches!(outer[0].kind, StmtKind::Block(_)));
}

#[test]
fn test_precedence_mul_over_add() {
    let program = parse_clean("x = 1 + 2 * 3;");
    let StmtKind::Expr(expr) = &program.children[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Assign { value, .. } = &expr.kind else {
        panic!("expected assignment");
    };
    let ExprKind::Binary { op, right, .. } = &value.kind else {
        panic!("expected binary expression");
    };
    assert_eq!(*op, BinOp::Add);
    assert_eq!(op.symbol(), "+");
    assert!(matches!(
        right.kind,
        ExprKind::Binary { op: BinOp::Mul, .. }
    ));
}

#[test]
fn test_parens_override_precedence() {
    let program = parse_clean("x = (1 + 2) * 3;");
    let StmtKind::Expr(expr) = &program.children[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Assign { value, .. } = &expr.kind else {
        panic!("expected assignment");
    };
    assert!(matches!(
        value.kind,
        ExprKind::Binary { op: BinOp::Mul, .. }
    ));
}

#[test]
fn test_relational_expression() {
    let program = parse_clean("int x = 1; if (x >= 10) { }");
    let StmtKind::If { condition, .. } = &program.children[1].kind else {
        panic!("expected If");
    };
    assert!(matches!(
        condition.kind,
        ExprKind::Binary { op: BinOp::Ge, .. }
    ));
}

#[test]
fn test_empty_input_parses_to_empty_program() {
    assert!(parse_clean("").children.is_empty());
    assert!(parse_clean("  \n // nothing\n").children.is_empty());
}

// ============================================================================
// Error Recovery - Missing Semicolon
// ============================================================================

#[test]
fn test_missing_semicolon_before_keyword() {
    let (program, diags) = parse("int x = 10\nif (x > 5) { }");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Missing ';' after declaration. Encountered KEYWORD('if')"
    );
    assert_eq!(diags[0].line, 2);
    assert_eq!(
        diags[0].help.as_deref(),
        Some("Did you forget a ';' at the end of the declaration?")
    );
    // Both statements survive
    assert_eq!(program.children.len(), 2);
}

#[test]
fn test_missing_semicolon_before_identifier() {
    let (program, diags) = parse("int x = 10\nx = 5;");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Missing ';' after declaration. Encountered ID('x')"
    );
    assert_eq!(program.children.len(), 2);
}

#[test]
fn test_missing_semicolon_at_eof() {
    let (program, diags) = parse("x = 5");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Missing ';' after statement. Encountered EOF('')"
    );
    assert_eq!(
        diags[0].help.as_deref(),
        Some("Did you forget a ';' at the end of the statement?")
    );
    assert_eq!(program.children.len(), 1);
}

#[test]
fn test_missing_semicolon_before_closing_brace() {
    let (_, diags) = parse("{ x = 1 }");
    assert_eq!(syntax_messages(&diags).len(), 1);
    assert_eq!(
        diags[0].message,
        "Missing ';' after statement. Encountered '}'"
    );
}

#[test]
fn test_confusing_token_takes_panic_path() {
    let (program, diags) = parse("int x = 1 2;");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Expected ';' after declaration. Encountered NUMBER('2')"
    );
    assert!(diags[0].help.is_none());
    // The declaration itself survives; resync consumed through the ';'
    assert_eq!(program.children.len(), 1);
}

// ============================================================================
// Error Recovery - If Statements
// ============================================================================

#[test]
fn test_missing_close_paren_before_brace() {
    let (program, diags) = parse("int x = 1; if (x > 5 { x = 2; }");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Missing ')' after if-condition. Encountered '{'"
    );
    assert_eq!(
        diags[0].help.as_deref(),
        Some("Did you forget a ')' before the '{'?")
    );
    // The '{' begins the if-body
    let StmtKind::If { if_block, .. } = &program.children[1].kind else {
        panic!("expected If");
    };
    assert!(matches!(if_block.kind, StmtKind::Block(_)));
}

#[test]
fn test_missing_close_paren_before_statement() {
    let (_, diags) = parse("int x = 1; if (x > 5 x = 2;");
    assert_eq!(
        diags[0].message,
        "Missing ')' after if-condition. Encountered ID('x')"
    );
    assert_eq!(
        diags[0].help.as_deref(),
        Some("Did you forget a ')' to close the if-condition?")
    );
}

#[test]
fn test_missing_open_paren() {
    let (program, diags) = parse("int x = 1; if x > 1) { }");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Expected '(' after 'if'. Encountered ID('x')"
    );
    assert_eq!(program.children.len(), 2);
}

#[test]
fn test_stray_semicolon_after_condition() {
    let (program, diags) = parse("int a = 0;\nif (a > 0); { a = 0; }");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Unexpected ';' after if-condition. This creates an empty 'if' statement."
    );
    assert_eq!(diags[0].line, 2);
    assert_eq!(diags[0].help.as_deref(), Some("Did you mean to delete this ';'?"));

    // The if-body is an empty block; the braced block is a sibling statement
    assert_eq!(program.children.len(), 3);
    let StmtKind::If {
        if_block,
        else_block,
        ..
    } = &program.children[1].kind
    else {
        panic!("expected If");
    };
    let StmtKind::Block(body) = &if_block.kind else {
        panic!("expected Block body");
    };
    assert!(body.is_empty());
    assert!(else_block.is_none());
    assert!(matches!(program.children[2].kind, StmtKind::Block(_)));
}

// ============================================================================
// Error Recovery - Blocks
// ============================================================================

#[test]
fn test_unclosed_block() {
    let (_, diags) = parse("{ x = 1;");
    let messages = syntax_messages(&diags);
    assert_eq!(
        messages,
        vec!["Missing '}' to close block. Encountered EOF('')"]
    );
}

#[test]
fn test_deeply_unclosed_blocks() {
    // One diagnostic per syntactically-opened block, innermost first
    let (_, diags) = parse("{ { { ");
    assert_eq!(diags.len(), 3);
    for diag in &diags {
        assert_eq!(
            diag.message,
            "Missing '}' to close block. Encountered EOF('')"
        );
        assert_eq!(diag.line, 1);
    }
}

// ============================================================================
// Error Recovery - Statements and Expressions
// ============================================================================

#[test]
fn test_unexpected_statement_head() {
    let (program, diags) = parse(") x = 1;");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Unexpected token ')' at start of statement"
    );
    // Parsing resumed on the real statement
    assert_eq!(program.children.len(), 1);
    assert!(matches!(program.children[0].kind, StmtKind::Expr(_)));
}

#[test]
fn test_statement_panic_consumes_one_token_each() {
    let (program, diags) = parse("+ + + +");
    assert_eq!(diags.len(), 4);
    for diag in &diags {
        assert_eq!(diag.message, "Unexpected token OP('+') at start of statement");
    }
    assert!(program.children.is_empty());
}

#[test]
fn test_expression_slot_failure_substitutes_error_node() {
    let (program, diags) = parse("x = ;");
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

#[test]
fn test_missing_close_paren_in_expression() {
    let (program, diags) = parse("x = (1 + 2;");
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].message,
        "Missing ')' to close parenthesized expression. Encountered ';'"
    );
    assert_eq!(program.children.len(), 1);
}

#[test]
fn test_recovery_after_error_continues() {
    let (program, diags) = parse("x = ;\nint y = 2;");
    assert!(!diags.is_empty());
    assert_eq!(program.children.len(), 2);
}

// ============================================================================
// The Canonical Recovery Case
// ============================================================================

const CANONICAL: &str = "int x = 10\nif (x > 5 {\nif (y > 2); {\nx = 5\ny = 10;";

#[test]
fn test_canonical_diagnostic_sequence() {
    let (_, diags) = parse(CANONICAL);
    let expected: &[(u32, &str)] = &[
        (2, "Missing ';' after declaration. Encountered KEYWORD('if')"),
        (2, "Missing ')' after if-condition. Encountered '{'"),
        (
            3,
            "Unexpected ';' after if-condition. This creates an empty 'if' statement.",
        ),
        (5, "Missing ';' after statement. Encountered ID('y')"),
        (5, "Missing '}' to close block. Encountered EOF('')"),
        (5, "Missing '}' to close block. Encountered EOF('')"),
    ];
    let actual: Vec<(u32, &str)> = diags
        .iter()
        .map(|d| (d.line, d.message.as_str()))
        .collect();
    assert_eq!(actual, expected);

    // The first three recoveries carry suggestions, the rest do not
    assert!(diags[0].help.is_some());
    assert!(diags[1].help.is_some());
    assert!(diags[2].help.is_some());
    assert!(diags[4].help.is_none());
    assert!(diags[5].help.is_none());
}

#[test]
fn test_canonical_ast_shape() {
    let (program, _) = parse(CANONICAL);
    assert_eq!(program.children.len(), 2);
    assert!(matches!(program.children[0].kind, StmtKind::VarDecl { .. }));

    // The outer if's body is the block opened on line 2
    let StmtKind::If { if_block, .. } = &program.children[1].kind else {
        panic!("expected If");
    };
    let StmtKind::Block(body) = &if_block.kind else {
        panic!("expected Block body");
    };
    assert_eq!(body.len(), 2);

    // First the inner if (its stray ';' left it with an empty body)...
    let StmtKind::If { if_block, .. } = &body[0].kind else {
        panic!("expected inner If");
    };
    let StmtKind::Block(inner_body) = &if_block.kind else {
        panic!("expected Block body");
    };
    assert!(inner_body.is_empty());

    // ...then the block holding both assignments
    let StmtKind::Block(trailing) = &body[1].kind else {
        panic!("expected trailing Block");
    };
    assert_eq!(trailing.len(), 2);
    for stmt in trailing {
        let StmtKind::Expr(expr) = &stmt.kind else {
            panic!("expected expression statement");
        };
        assert!(matches!(expr.kind, ExprKind::Assign { .. }));
    }
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_syntax_diagnostics_are_line_monotonic() {
    for source in [
        CANONICAL,
        "int x = 10\nif (x > 5 {\n}",
        "x = ;\ny = ;\nz = ;",
        "{ { {",
    ] {
        let (_, diags) = parse(source);
        let lines: Vec<u32> = diags
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Syntax)
            .map(|d| d.line)
            .collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted, "source {:?}", source);
    }
}

#[test]
fn test_diagnostic_lines_stay_in_bounds() {
    for source in [CANONICAL, "{ x = 1;", "int x = 10\nif (x > 5 {"] {
        let (_, diags) = parse(source);
        let max_line = source.lines().count() as u32;
        for diag in &diags {
            assert!(
                diag.line >= 1 && diag.line <= max_line,
                "line {} out of bounds for {:?}",
                diag.line,
                source
            );
        }
    }
}

#[test]
fn test_parser_terminates_on_garbage() {
    // Progress guarantee: one diagnostic never comes for free
    let sources = [
        "= = = = =",
        "))))(((",
        "; ; ; ;",
        "int int int",
        "else else",
        "if if if",
        ", , ,",
    ];
    for source in sources {
        let (program, diags) = parse(source);
        assert!(!diags.is_empty(), "source {:?}", source);
        // No more diagnostics than a small multiple of the token count
        let token_count = source.split_whitespace().count();
        assert!(
            diags.len() <= 3 * token_count,
            "diagnostic cascade for {:?}: {}",
            source,
            diags.len()
        );
        drop(program);
    }
}

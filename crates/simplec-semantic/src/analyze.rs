//! The AST-walking analyzer.

use crate::scope::{Symbol, SymbolTable};
use simplec_diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, ErrorCode};
use simplec_syntax::{Expr, ExprKind, Ident, Program, Stmt, StmtKind};

/// Walks the AST with a scoped symbol table and collects semantic
/// diagnostics. The walk is purely observational: nothing in the tree is
/// mutated, and traversal order is source order, so diagnostics come out
/// line-ordered.
pub struct Analyzer {
    table: SymbolTable,
    diagnostics: Diagnostics,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Analyze a whole program and return the diagnostics in emission
    /// order.
    pub fn analyze(mut self, program: &Program) -> Vec<Diagnostic> {
        for stmt in &program.children {
            self.visit_stmt(stmt);
        }
        self.diagnostics.into_vec()
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::VarDecl { ty, name, init } => {
                let symbol = Symbol {
                    declared_type: ty.name,
                    decl_line: name.line,
                };
                if !self.table.declare(&name.name, symbol) {
                    self.diagnostics.emit(
                        Diagnostic::error(
                            DiagnosticKind::Semantic,
                            name.line,
                            name.span,
                            format!("Variable '{}' redeclared", name.name),
                        )
                        .with_code(ErrorCode::RedeclaredVariable),
                    );
                }
                // The binding is visible to its own initializer.
                if let Some(init) = init {
                    self.visit_expr(init);
                }
            }

            StmtKind::If {
                condition,
                if_block,
                else_block,
            } => {
                self.visit_expr(condition);
                self.visit_stmt(if_block);
                if let Some(else_block) = else_block {
                    self.visit_stmt(else_block);
                }
            }

            StmtKind::Block(statements) => {
                self.table.enter_scope();
                for stmt in statements {
                    self.visit_stmt(stmt);
                }
                self.table.exit_scope();
            }

            StmtKind::Expr(expr) => self.visit_expr(expr),

            // Recovery placeholder: skipped, never entered.
            StmtKind::Error => {}
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Number(_) => {}

            ExprKind::Variable(ident) => self.check_declared(ident),

            ExprKind::Assign { target, value } => {
                // The target must resolve; the value is analyzed either way.
                self.check_declared(target);
                self.visit_expr(value);
            }

            ExprKind::Binary { left, right, .. } => {
                self.visit_expr(left);
                self.visit_expr(right);
            }

            // Recovery placeholder: skipped, never entered.
            ExprKind::Error => {}
        }
    }

    fn check_declared(&mut self, ident: &Ident) {
        if self.table.lookup(&ident.name).is_none() {
            self.diagnostics.emit(
                Diagnostic::error(
                    DiagnosticKind::Semantic,
                    ident.line,
                    ident.span,
                    format!("Variable '{}' not declared", ident.name),
                )
                .with_code(ErrorCode::UndeclaredVariable),
            );
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

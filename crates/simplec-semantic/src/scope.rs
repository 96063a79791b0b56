//! The scoped symbol table.

use simplec_syntax::TyName;
use std::collections::HashMap;

/// A symbol record. Holds copies of declaration metadata, never
/// references back into the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub declared_type: TyName,
    pub decl_line: u32,
}

/// A stack of scopes, each mapping an identifier to its symbol record.
///
/// The bottom scope is the global one and is never popped; one scope is
/// pushed per `Block` and popped on exit.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<HashMap<String, Symbol>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// Enter a new, nested scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Exit the current scope. The global scope stays.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare a name in the current scope. Returns `false` when the name
    /// is already declared in this scope (the outer scopes do not count —
    /// shadowing is allowed).
    pub fn declare(&mut self, name: &str, symbol: Symbol) -> bool {
        let Some(scope) = self.scopes.last_mut() else {
            return false;
        };
        if scope.contains_key(name) {
            return false;
        }
        scope.insert(name.to_string(), symbol);
        true
    }

    /// Look a name up, searching from the innermost scope outwards.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_symbol(line: u32) -> Symbol {
        Symbol {
            declared_type: TyName::Int,
            decl_line: line,
        }
    }

    #[test]
    fn redeclaration_in_same_scope_is_rejected() {
        let mut table = SymbolTable::new();
        assert!(table.declare("x", int_symbol(1)));
        assert!(!table.declare("x", int_symbol(2)));
    }

    #[test]
    fn shadowing_in_inner_scope_is_allowed() {
        let mut table = SymbolTable::new();
        assert!(table.declare("x", int_symbol(1)));
        table.enter_scope();
        assert!(table.declare("x", int_symbol(2)));
        assert_eq!(table.lookup("x").map(|s| s.decl_line), Some(2));
        table.exit_scope();
        assert_eq!(table.lookup("x").map(|s| s.decl_line), Some(1));
    }

    #[test]
    fn names_die_with_their_scope() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        assert!(table.declare("y", int_symbol(3)));
        table.exit_scope();
        assert!(table.lookup("y").is_none());
    }

    #[test]
    fn global_scope_cannot_be_popped() {
        let mut table = SymbolTable::new();
        table.exit_scope();
        assert!(table.declare("x", int_symbol(1)));
        assert!(table.lookup("x").is_some());
    }
}

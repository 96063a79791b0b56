//! AST and syntax definitions for SimpleC.
//! SimpleC 的抽象语法树和语法定义。
//!
//! This crate defines the abstract syntax tree produced by the parser and
//! read by the semantic analyzer. The tree is strictly ownership-shaped:
//! parents own their children and nothing points back up.
//! 本 crate 定义了解析器生成、语义分析器读取的抽象语法树。
//! 树是严格的所有权结构：父节点拥有子节点，没有任何反向引用。

mod ast;
mod expr;

pub use ast::*;
pub use expr::*;

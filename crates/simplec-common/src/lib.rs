//! Common utilities for the SimpleC front-end.
//!
//! This crate provides the foundational type shared by every stage:
//! `Span`, the byte-range source location attached to tokens, AST nodes
//! and diagnostics.

mod span;

pub use span::Span;

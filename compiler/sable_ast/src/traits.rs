//! Focused traits for interface segregation.

use crate::node::{Decl, Expr, Pattern, Stmt};
use crate::Span;

/// Trait for types that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Pattern {
    fn span(&self) -> Span {
        self.span
    }
}

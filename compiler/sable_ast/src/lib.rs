//! Sable AST - Source Tree Types
//!
//! This crate contains the source-side data structures for the Sable
//! compiler:
//! - Spans and source positions
//! - Names for interned identifiers
//! - AST nodes for the four node categories (Stmt, Expr, Decl, Pattern)
//! - The `SourceTree` arena that owns every node
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → `Name(u32)`
//! - **Flatten Everything**: No `Box<Stmt>`, use `StmtId(u32)` indices
//! - **Non-owning references**: IR that points back into the tree holds
//!   IDs, never borrows; the tree outlives everything lowered from it

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod node;
mod node_id;
mod span;
mod traits;
mod tree;

pub use interner::StringInterner;
pub use name::Name;
pub use node::{
    Decl, DeclKind, Expr, ExprKind, NodeCategory, NodeRef, Pattern, PatternKind, Stmt, StmtKind,
};
pub use node_id::{DeclId, ExprId, ExprRange, PatternId, PatternRange, StmtId, StmtRange};
pub use span::{SourceLoc, SourceRange, Span, SpanError};
pub use traits::Spanned;
pub use tree::SourceTree;

//! AST node types for the four node categories.
//!
//! Every node is `{ kind, span }` with children referenced by IDs or ranges,
//! never boxed. The categories are closed: statement, expression,
//! declaration, pattern. New syntax is added as a new kind variant beneath
//! one of the four roots, never as a fifth root.

use std::fmt;

use crate::node_id::{DeclId, ExprId, ExprRange, PatternId, PatternRange, StmtId, StmtRange};
use crate::{Name, Span};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression statement.
    Expr(ExprId),

    /// Braced block: `{ ... }`
    Brace(StmtRange),

    /// Return statement: `return`, `return e`
    Return(Option<ExprId>),

    /// Conditional: `if cond { } else { }`
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },

    /// Loop: `while cond { }`
    While { cond: ExprId, body: StmtId },
}

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`
    Int(i64),

    /// Boolean literal: `true`, `false`
    Bool(bool),

    /// Variable reference (interned).
    Ident(Name),

    /// Parenthesized expression: `(e)`
    Paren(ExprId),

    /// Call: `f(a, b)`
    Call { callee: ExprId, args: ExprRange },

    /// Closure literal: `|params| body`
    Closure { params: PatternRange, body: StmtId },
}

/// Declaration node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Decl {
    pub kind: DeclKind,
    pub span: Span,
}

impl Decl {
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Decl { kind, span }
    }
}

impl fmt::Debug for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Declaration kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// Function declaration. `body` is absent for extern declarations.
    Func {
        name: Name,
        params: PatternRange,
        body: Option<StmtId>,
    },

    /// Single-name variable declaration.
    Var { name: Name, init: Option<ExprId> },

    /// Destructuring binding: `let (a, b) = e`
    PatternBinding {
        pattern: PatternId,
        init: Option<ExprId>,
    },
}

/// Pattern node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Pattern kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// Wildcard: `_`
    Wildcard,

    /// Name binding.
    Binding(Name),

    /// Tuple destructuring: `(a, b, _)`
    Tuple(PatternRange),
}

/// The coarse node categories a location payload can reference.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeCategory {
    Stmt,
    Expr,
    Decl,
    Pattern,
}

/// Non-owning reference to a node in a [`SourceTree`](crate::SourceTree):
/// exactly one of the four category alternatives.
///
/// The tree that allocated the ID must outlive every `NodeRef` into it;
/// the compilation pipeline guarantees this (source trees outlive all IR
/// lowered from them).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeRef {
    Stmt(StmtId),
    Expr(ExprId),
    Decl(DeclId),
    Pattern(PatternId),
}

impl NodeRef {
    /// The category root this reference belongs to.
    #[inline]
    pub const fn category(self) -> NodeCategory {
        match self {
            NodeRef::Stmt(_) => NodeCategory::Stmt,
            NodeRef::Expr(_) => NodeCategory::Expr,
            NodeRef::Decl(_) => NodeCategory::Decl,
            NodeRef::Pattern(_) => NodeCategory::Pattern,
        }
    }
}

impl From<StmtId> for NodeRef {
    fn from(id: StmtId) -> Self {
        NodeRef::Stmt(id)
    }
}

impl From<ExprId> for NodeRef {
    fn from(id: ExprId) -> Self {
        NodeRef::Expr(id)
    }
}

impl From<DeclId> for NodeRef {
    fn from(id: DeclId) -> Self {
        NodeRef::Decl(id)
    }
}

impl From<PatternId> for NodeRef {
    fn from(id: PatternId) -> Self {
        NodeRef::Pattern(id)
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::NodeRef;
    crate::static_assert_size!(NodeRef, 8);
}

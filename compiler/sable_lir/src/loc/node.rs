//! Node-subtype dispatch for location payloads.
//!
//! [`NodeSubtype`] maps a concrete source-tree construct (a return
//! statement, a closure expression, ...) to its category root and narrows
//! a node reference already known to be in that category. It underlies
//! `Location::{node_as, is_node, cast_to_node}`.
//!
//! Resolution is total and unambiguous: every marker belongs to exactly
//! one of the four categories, and the family grows only by adding markers
//! beneath an existing category.

use sable_ast::{
    Decl, DeclKind, Expr, ExprKind, NodeCategory, NodeRef, Pattern, PatternKind, SourceTree, Stmt,
    StmtKind,
};

/// Compile-time mapping from a concrete node subtype to its category root,
/// plus the runtime narrowing within that category.
pub trait NodeSubtype {
    /// The category root this subtype belongs to.
    const CATEGORY: NodeCategory;

    /// The node data a successful narrowing yields.
    type Data;

    /// Narrow `node` to this subtype. Callers have already checked that
    /// `node.category() == Self::CATEGORY`; a reference of the wrong
    /// category simply fails to match.
    fn narrow<'t>(tree: &'t SourceTree, node: NodeRef) -> Option<&'t Self::Data>;
}

macro_rules! node_subtype {
    ($(#[$doc:meta])* $marker:ident: $category:ident($data:ident) via $getter:ident, $pat:pat) => {
        $(#[$doc])*
        pub struct $marker;

        impl NodeSubtype for $marker {
            const CATEGORY: NodeCategory = NodeCategory::$category;

            type Data = $data;

            fn narrow<'t>(tree: &'t SourceTree, node: NodeRef) -> Option<&'t $data> {
                let NodeRef::$category(id) = node else {
                    return None;
                };
                let data = tree.$getter(id);
                if matches!(data.kind, $pat) {
                    Some(data)
                } else {
                    None
                }
            }
        }
    };
}

node_subtype! {
    /// `return` / `return e` statements.
    ReturnStmt: Stmt(Stmt) via stmt, StmtKind::Return(_)
}

node_subtype! {
    /// Braced block statements.
    BraceStmt: Stmt(Stmt) via stmt, StmtKind::Brace(_)
}

node_subtype! {
    /// `if` statements.
    IfStmt: Stmt(Stmt) via stmt, StmtKind::If { .. }
}

node_subtype! {
    /// `while` statements.
    WhileStmt: Stmt(Stmt) via stmt, StmtKind::While { .. }
}

node_subtype! {
    /// Closure literals.
    ClosureExpr: Expr(Expr) via expr, ExprKind::Closure { .. }
}

node_subtype! {
    /// Call expressions.
    CallExpr: Expr(Expr) via expr, ExprKind::Call { .. }
}

node_subtype! {
    /// Parenthesized expressions.
    ParenExpr: Expr(Expr) via expr, ExprKind::Paren(_)
}

node_subtype! {
    /// Identifier references.
    IdentExpr: Expr(Expr) via expr, ExprKind::Ident(_)
}

node_subtype! {
    /// Function declarations.
    FuncDecl: Decl(Decl) via decl, DeclKind::Func { .. }
}

node_subtype! {
    /// Single-name variable declarations.
    VarDecl: Decl(Decl) via decl, DeclKind::Var { .. }
}

node_subtype! {
    /// Declarations that introduce a value: functions and variables.
    ValueDecl: Decl(Decl) via decl, DeclKind::Func { .. } | DeclKind::Var { .. }
}

node_subtype! {
    /// Destructuring bindings.
    PatternBindingDecl: Decl(Decl) via decl, DeclKind::PatternBinding { .. }
}

node_subtype! {
    /// Name-binding patterns.
    BindingPattern: Pattern(Pattern) via pattern, PatternKind::Binding(_)
}

node_subtype! {
    /// Tuple-destructuring patterns.
    TuplePattern: Pattern(Pattern) via pattern, PatternKind::Tuple(_)
}

node_subtype! {
    /// Wildcard patterns.
    WildcardPattern: Pattern(Pattern) via pattern, PatternKind::Wildcard
}

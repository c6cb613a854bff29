//! The source tree arena.
//!
//! [`SourceTree`] owns every AST node for a compilation unit in per-category
//! contiguous arrays, plus flattened ID lists for child ranges. All nodes
//! are referenced by IDs ([`StmtId`], [`ExprId`], [`DeclId`], [`PatternId`])
//! and stay alive as long as the tree, which outlives all IR lowered
//! from it.

use crate::node::{Decl, Expr, NodeRef, Pattern, Stmt};
use crate::node_id::{DeclId, ExprId, ExprRange, PatternId, PatternRange, StmtId, StmtRange};
use crate::{Name, Span, StringInterner};

fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len}"))
}

fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("list of {what} too long: {len}"))
}

/// Arena owner of all source-tree nodes.
///
/// # Index Spaces
///
/// - `stmts` / `exprs` / `decls` / `patterns`: per-category node arrays
/// - `stmt_lists` / `expr_lists` / `pattern_lists`: flat ID vectors indexed
///   by the corresponding range types
pub struct SourceTree {
    stmts: Vec<Stmt>,
    exprs: Vec<Expr>,
    decls: Vec<Decl>,
    patterns: Vec<Pattern>,
    stmt_lists: Vec<StmtId>,
    expr_lists: Vec<ExprId>,
    pattern_lists: Vec<PatternId>,
    interner: StringInterner,
}

impl SourceTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        SourceTree {
            stmts: Vec::new(),
            exprs: Vec::new(),
            decls: Vec::new(),
            patterns: Vec::new(),
            stmt_lists: Vec::new(),
            expr_lists: Vec::new(),
            pattern_lists: Vec::new(),
            interner: StringInterner::new(),
        }
    }

    /// Create a tree pre-allocated based on source length.
    ///
    /// Uses the heuristic of ~1 node per 20 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 20;
        SourceTree {
            stmts: Vec::with_capacity(estimated),
            exprs: Vec::with_capacity(estimated),
            decls: Vec::new(),
            patterns: Vec::new(),
            stmt_lists: Vec::new(),
            expr_lists: Vec::new(),
            pattern_lists: Vec::new(),
            interner: StringInterner::new(),
        }
    }

    /// Allocate a statement, returning its ID.
    pub fn push_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statements"));
        self.stmts.push(stmt);
        id
    }

    /// Allocate an expression, returning its ID.
    pub fn push_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Allocate a declaration, returning its ID.
    pub fn push_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::new(to_u32(self.decls.len(), "declarations"));
        self.decls.push(decl);
        id
    }

    /// Allocate a pattern, returning its ID.
    pub fn push_pattern(&mut self, pattern: Pattern) -> PatternId {
        let id = PatternId::new(to_u32(self.patterns.len(), "patterns"));
        self.patterns.push(pattern);
        id
    }

    /// Store a statement list, returning its range.
    pub fn push_stmt_list(&mut self, ids: &[StmtId]) -> StmtRange {
        let start = to_u32(self.stmt_lists.len(), "statement list entries");
        self.stmt_lists.extend_from_slice(ids);
        StmtRange::new(start, to_u16(ids.len(), "statements"))
    }

    /// Store an expression list, returning its range.
    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression list entries");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expressions"))
    }

    /// Store a pattern list, returning its range.
    pub fn push_pattern_list(&mut self, ids: &[PatternId]) -> PatternRange {
        let start = to_u32(self.pattern_lists.len(), "pattern list entries");
        self.pattern_lists.extend_from_slice(ids);
        PatternRange::new(start, to_u16(ids.len(), "patterns"))
    }

    /// Get a statement by ID.
    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Get an expression by ID.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get a declaration by ID.
    #[inline]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    /// Get a pattern by ID.
    #[inline]
    pub fn pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id.index()]
    }

    /// Slice a stored statement list.
    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    /// Slice a stored expression list.
    #[inline]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    /// Slice a stored pattern list.
    #[inline]
    pub fn pattern_list(&self, range: PatternRange) -> &[PatternId] {
        &self.pattern_lists[range.to_range()]
    }

    /// The recorded source span of any node.
    ///
    /// This is the range-resolution entry point consumed by location
    /// values: given a node reference, answer where in the file it came
    /// from.
    pub fn span(&self, node: NodeRef) -> Span {
        match node {
            NodeRef::Stmt(id) => self.stmt(id).span,
            NodeRef::Expr(id) => self.expr(id).span,
            NodeRef::Decl(id) => self.decl(id).span,
            NodeRef::Pattern(id) => self.pattern(id).span,
        }
    }

    /// Intern an identifier.
    pub fn intern(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Resolve an interned identifier.
    pub fn resolve(&self, name: Name) -> &'static str {
        self.interner.resolve(name)
    }

    /// The tree's interner.
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{DeclKind, ExprKind, PatternKind, StmtKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn push_and_get() {
        let mut tree = SourceTree::new();
        let expr = tree.push_expr(Expr::new(ExprKind::Int(7), Span::new(0, 1)));
        let stmt = tree.push_stmt(Stmt::new(StmtKind::Expr(expr), Span::new(0, 2)));

        assert_eq!(tree.expr(expr).kind, ExprKind::Int(7));
        assert_eq!(tree.stmt(stmt).span, Span::new(0, 2));
    }

    #[test]
    fn ids_are_sequential() {
        let mut tree = SourceTree::new();
        let a = tree.push_expr(Expr::new(ExprKind::Bool(true), Span::DUMMY));
        let b = tree.push_expr(Expr::new(ExprKind::Bool(false), Span::DUMMY));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
    }

    #[test]
    fn lists_round_trip() {
        let mut tree = SourceTree::new();
        let a = tree.push_stmt(Stmt::new(StmtKind::Return(None), Span::new(0, 6)));
        let b = tree.push_stmt(Stmt::new(StmtKind::Return(None), Span::new(7, 13)));
        let range = tree.push_stmt_list(&[a, b]);
        assert_eq!(tree.stmt_list(range), &[a, b]);

        let empty = tree.push_stmt_list(&[]);
        assert!(tree.stmt_list(empty).is_empty());
    }

    #[test]
    fn span_of_every_category() {
        let mut tree = SourceTree::new();
        let name = tree.intern("x");

        let stmt = tree.push_stmt(Stmt::new(StmtKind::Return(None), Span::new(1, 2)));
        let expr = tree.push_expr(Expr::new(ExprKind::Ident(name), Span::new(3, 4)));
        let decl = tree.push_decl(Decl::new(DeclKind::Var { name, init: None }, Span::new(5, 6)));
        let pattern = tree.push_pattern(Pattern::new(PatternKind::Wildcard, Span::new(7, 8)));

        assert_eq!(tree.span(NodeRef::Stmt(stmt)), Span::new(1, 2));
        assert_eq!(tree.span(NodeRef::Expr(expr)), Span::new(3, 4));
        assert_eq!(tree.span(NodeRef::Decl(decl)), Span::new(5, 6));
        assert_eq!(tree.span(NodeRef::Pattern(pattern)), Span::new(7, 8));
    }

    #[test]
    fn interner_passthrough() {
        let tree = SourceTree::new();
        let name = tree.intern("main");
        assert_eq!(tree.resolve(name), "main");
        assert_eq!(tree.interner().len(), 2);
    }
}

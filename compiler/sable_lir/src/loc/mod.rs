//! Instruction locations.
//!
//! Every IR instruction embeds one [`Location`] by value. The location
//! records which source-tree construct the instruction was derived from
//! (or which position in a textual IR listing it was parsed from), which
//! producer generated it (the [`LocationKind`]), and a small set of
//! orthogonal annotations ([`LocationFlags`]) consumed by debug-info and
//! diagnostic emission.
//!
//! # Shape
//!
//! The representation is a genuine sum type: `kind` and `flags` are stored
//! separately and the payload is the exhaustively-matchable [`Payload`].
//! Kind-specific behavior lives in the view wrappers ([`RegularLocation`],
//! [`ReturnLocation`], ...) which only expose the constructors legal for
//! their kind; the base type performs runtime-checked narrowing into them
//! through the [`KindView`] protocol.
//!
//! # Ownership
//!
//! Node payloads are non-owning IDs into a [`SourceTree`]. The tree is
//! owned by the front end and outlives all IR lowered from it; this module
//! documents that precondition and does no lifetime management of its own.

use std::fmt;
use std::hash::{Hash, Hasher};

use bitflags::bitflags;
use sable_ast::{DeclId, ExprId, NodeRef, PatternId, SourceLoc, SourceRange, SourceTree, StmtId};

mod node;
mod views;


pub use node::{
    BindingPattern, BraceStmt, CallExpr, ClosureExpr, FuncDecl, IdentExpr, IfStmt, NodeSubtype,
    ParenExpr, PatternBindingDecl, ReturnStmt, TuplePattern, ValueDecl, VarDecl, WhileStmt,
    WildcardPattern,
};
pub use views::{
    ArtificialUnreachableLocation, CleanupLocation, FileLocation, ImplicitReturnLocation,
    InlinedLocation, KindView, MandatoryInlinedLocation, RegularLocation, ReturnLocation,
};

/// The producer provenance of a location. Exactly one kind is active.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[repr(u8)]
pub enum LocationKind {
    /// No provenance information.
    #[default]
    None,
    /// Ordinary lowering from a source node.
    Regular,
    /// A return instruction present in user code.
    Return,
    /// A compiler-generated return from a function.
    ImplicitReturn,
    /// Inlined function body or setup code; wraps the call site.
    Inlined,
    /// Body inlined by the mandatory inlining pass; wraps the call site.
    MandatoryInlined,
    /// Auto-generated cleanup (deallocation, destructor calls) performed
    /// when the wrapped scope finishes.
    Cleanup,
    /// An unreachable point inserted by analysis, with no correspondence
    /// to user code.
    ArtificialUnreachable,
    /// Parsed from a textual IR listing; no source tree exists.
    FileListing,
}

bitflags! {
    /// Orthogonal location annotations, independent of kind.
    ///
    /// Any subset may be set on any location; setting is idempotent and
    /// commutative, and never touches kind or payload.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct LocationFlags: u8 {
        /// Part of an auto-generated body (thunks, default destructors).
        /// Excluded from debug line tables.
        const AUTO_GENERATED = 1 << 0;
        /// Resolve to the start of the node's range instead of the default.
        const POINTS_TO_START = 1 << 1;
        /// Resolve to the end of the node's range instead of the default.
        const POINTS_TO_END = 1 << 2;
        /// Belongs to top-level (module) scope.
        const IN_TOP_LEVEL = 1 << 3;
        /// Part of the function prologue (stack-frame setup). The first
        /// breakpoint location in a function is at the end of the prologue.
        const IN_PROLOGUE = 1 << 4;
    }
}

/// The discriminated payload of a location: one of the four node-category
/// references, a raw file position, or nothing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Payload {
    /// No payload (synthetic and top-level locations).
    #[default]
    Empty,
    /// Statement reference.
    Stmt(StmtId),
    /// Expression reference.
    Expr(ExprId),
    /// Declaration reference.
    Decl(DeclId),
    /// Pattern reference.
    Pattern(PatternId),
    /// Raw position in a textual IR listing.
    File(SourceLoc),
}

impl Payload {
    /// The node reference, if the payload carries one.
    #[inline]
    pub const fn node(self) -> Option<NodeRef> {
        match self {
            Payload::Stmt(id) => Some(NodeRef::Stmt(id)),
            Payload::Expr(id) => Some(NodeRef::Expr(id)),
            Payload::Decl(id) => Some(NodeRef::Decl(id)),
            Payload::Pattern(id) => Some(NodeRef::Pattern(id)),
            Payload::Empty | Payload::File(_) => None,
        }
    }
}

impl From<NodeRef> for Payload {
    fn from(node: NodeRef) -> Self {
        match node {
            NodeRef::Stmt(id) => Payload::Stmt(id),
            NodeRef::Expr(id) => Payload::Expr(id),
            NodeRef::Decl(id) => Payload::Decl(id),
            NodeRef::Pattern(id) => Payload::Pattern(id),
        }
    }
}

/// Source provenance of one IR instruction.
///
/// A trivially-copyable 12-byte value; construction goes through the
/// kind views (or the `From` impls for the common Regular case), queries
/// and narrowing live here.
///
/// # Equality
///
/// Two locations are equal when they have the same kind and the same
/// payload. Annotation flags are presentation hints and deliberately do
/// **not** participate in equality or hashing: an auto-generated copy of a
/// location still refers to the same place.
#[derive(Copy, Clone)]
pub struct Location {
    payload: Payload,
    kind: LocationKind,
    flags: LocationFlags,
}

impl Location {
    // Internal constructors, used by the kind views. Keeping these
    // crate-private means every public construction path goes through a
    // view that enforces its kind's payload shapes.

    #[inline]
    pub(crate) const fn with_kind(kind: LocationKind) -> Self {
        Location {
            payload: Payload::Empty,
            kind,
            flags: LocationFlags::empty(),
        }
    }

    #[inline]
    pub(crate) fn with_node(node: NodeRef, kind: LocationKind) -> Self {
        Location {
            payload: Payload::from(node),
            kind,
            flags: LocationFlags::empty(),
        }
    }

    #[inline]
    pub(crate) const fn with_file(loc: SourceLoc, kind: LocationKind) -> Self {
        Location {
            payload: Payload::File(loc),
            kind,
            flags: LocationFlags::empty(),
        }
    }

    /// Same payload and flags, different kind. This is the reinterpretation
    /// primitive behind the `from_location` view factories.
    #[inline]
    pub(crate) const fn rekinded(self, kind: LocationKind) -> Self {
        Location {
            payload: self.payload,
            kind,
            flags: self.flags,
        }
    }

    /// The active kind.
    #[inline]
    pub const fn kind(&self) -> LocationKind {
        self.kind
    }

    /// The annotation flags currently set.
    #[inline]
    pub const fn flags(&self) -> LocationFlags {
        self.flags
    }

    /// The payload.
    #[inline]
    pub const fn payload(&self) -> Payload {
        self.payload
    }

    /// The node reference, if the payload carries one.
    #[inline]
    pub const fn node(&self) -> Option<NodeRef> {
        self.payload.node()
    }

    /// Whether the location references neither a node nor a valid file
    /// position.
    ///
    /// A null location still carries kind and flags; top-level synthetic
    /// locations and artificial unreachable points are null by design.
    #[inline]
    pub const fn is_null(&self) -> bool {
        match self.payload {
            Payload::Empty => true,
            Payload::File(loc) => !loc.is_valid(),
            Payload::Stmt(_) | Payload::Expr(_) | Payload::Decl(_) | Payload::Pattern(_) => false,
        }
    }

    /// Whether the payload is a source-tree node.
    #[inline]
    pub const fn has_node(&self) -> bool {
        self.payload.node().is_some()
    }

    /// Mark as coming from an auto-generated body.
    #[inline]
    pub fn mark_auto_generated(&mut self) {
        self.flags |= LocationFlags::AUTO_GENERATED;
    }

    /// Whether the location is part of auto-generated code. Such locations
    /// are excluded from debug line tables.
    #[inline]
    pub const fn is_auto_generated(&self) -> bool {
        self.flags.contains(LocationFlags::AUTO_GENERATED)
    }

    /// Resolve to the start of the node's range from now on.
    #[inline]
    pub fn point_to_start(&mut self) {
        self.flags |= LocationFlags::POINTS_TO_START;
    }

    /// Whether resolution is pinned to the start of the node's range.
    #[inline]
    pub const fn always_points_to_start(&self) -> bool {
        self.flags.contains(LocationFlags::POINTS_TO_START)
    }

    /// Resolve to the end of the node's range from now on.
    #[inline]
    pub fn point_to_end(&mut self) {
        self.flags |= LocationFlags::POINTS_TO_END;
    }

    /// Whether resolution is pinned to the end of the node's range.
    #[inline]
    pub const fn always_points_to_end(&self) -> bool {
        self.flags.contains(LocationFlags::POINTS_TO_END)
    }

    /// Mark as belonging to top-level (module) scope.
    #[inline]
    pub fn mark_as_top_level(&mut self) {
        self.flags |= LocationFlags::IN_TOP_LEVEL;
    }

    /// Whether the location belongs to top-level (module) scope.
    #[inline]
    pub const fn is_in_top_level(&self) -> bool {
        self.flags.contains(LocationFlags::IN_TOP_LEVEL)
    }

    /// Mark as part of the function prologue.
    #[inline]
    pub fn mark_as_prologue(&mut self) {
        self.flags |= LocationFlags::IN_PROLOGUE;
    }

    /// Whether the location is part of the function prologue.
    #[inline]
    pub const fn is_in_prologue(&self) -> bool {
        self.flags.contains(LocationFlags::IN_PROLOGUE)
    }

    /// Whether this location carries view `V`'s kind.
    #[inline]
    pub fn is<V: KindView>(&self) -> bool {
        V::is_kind(self)
    }

    /// Narrow to view `V`.
    ///
    /// # Panics
    /// Panics if the kind does not match; a mismatch here is a programmer
    /// error, not a recoverable condition. Use [`Location::get_as`] for the
    /// total query.
    #[inline]
    pub fn cast_to<V: KindView>(self) -> V {
        assert!(
            V::is_kind(&self),
            "cannot view a {:?} location as {}",
            self.kind,
            std::any::type_name::<V>()
        );
        V::wrap(self)
    }

    /// Narrow to view `V` if the kind matches. Total: never panics.
    #[inline]
    pub fn get_as<V: KindView>(self) -> Option<V> {
        if V::is_kind(&self) {
            Some(V::wrap(self))
        } else {
            None
        }
    }

    /// Narrow the payload to the concrete node subtype `T`.
    ///
    /// Resolves `T`'s category root, checks the payload alternative
    /// matches, then narrows within the category. Total: returns `None` if
    /// the payload is empty, a file position, a node of a different
    /// category, or a node of a different subtype.
    pub fn node_as<'t, T: NodeSubtype>(&self, tree: &'t SourceTree) -> Option<&'t T::Data> {
        let node = self.node()?;
        if node.category() != T::CATEGORY {
            return None;
        }
        T::narrow(tree, node)
    }

    /// Whether the payload is a node of the concrete subtype `T`.
    #[inline]
    pub fn is_node<T: NodeSubtype>(&self, tree: &SourceTree) -> bool {
        self.node_as::<T>(tree).is_some()
    }

    /// Narrow the payload to the concrete node subtype `T`.
    ///
    /// # Panics
    /// Panics if the payload is not a `T`; precondition violation. Use
    /// [`Location::node_as`] for the total query.
    pub fn cast_to_node<'t, T: NodeSubtype>(&self, tree: &'t SourceTree) -> &'t T::Data {
        match self.node_as::<T>(tree) {
            Some(data) => data,
            None => panic!(
                "location payload {:?} is not a {}",
                self.payload,
                std::any::type_name::<T>()
            ),
        }
    }

    /// The position this location resolves to.
    ///
    /// Node payloads resolve to the start of the node's recorded range
    /// unless pinned by [`point_to_start`](Location::point_to_start) /
    /// [`point_to_end`](Location::point_to_end); an unpinned Cleanup
    /// location resolves to the end of its scope's range, which is where
    /// the cleanup runs. File payloads resolve to the stored position. A
    /// null location resolves to [`SourceLoc::INVALID`], never a panic.
    pub fn source_loc(&self, tree: &SourceTree) -> SourceLoc {
        match self.payload.node() {
            Some(node) => {
                let span = tree.span(node);
                if self.always_points_to_start() {
                    span.start_loc()
                } else if self.always_points_to_end() {
                    span.end_loc()
                } else if matches!(self.kind, LocationKind::Cleanup) {
                    span.end_loc()
                } else {
                    span.start_loc()
                }
            }
            None => self.file_loc_or_invalid(),
        }
    }

    /// The start of the range this location resolves to.
    pub fn start_source_loc(&self, tree: &SourceTree) -> SourceLoc {
        match self.payload.node() {
            Some(node) => tree.span(node).start_loc(),
            None => self.file_loc_or_invalid(),
        }
    }

    /// The end of the range this location resolves to.
    pub fn end_source_loc(&self, tree: &SourceTree) -> SourceLoc {
        match self.payload.node() {
            Some(node) => tree.span(node).end_loc(),
            None => self.file_loc_or_invalid(),
        }
    }

    /// The full range this location resolves to. Both bounds are invalid
    /// for a null location.
    pub fn source_range(&self, tree: &SourceTree) -> SourceRange {
        SourceRange::new(self.start_source_loc(tree), self.end_source_loc(tree))
    }

    #[inline]
    const fn file_loc_or_invalid(&self) -> SourceLoc {
        match self.payload {
            Payload::File(loc) => loc,
            _ => SourceLoc::INVALID,
        }
    }
}

/// A location with no provenance: kind `None`, no payload, no flags.
impl Default for Location {
    fn default() -> Self {
        Location::with_kind(LocationKind::None)
    }
}

// Equality over (kind, payload) only; see the type-level docs.
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.payload == other.payload
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.payload.hash(state);
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.payload)?;
        if !self.flags.is_empty() {
            write!(f, " [{:?}]", self.flags)?;
        }
        Ok(())
    }
}

// A node reference with no special kind is a Regular location; this is the
// overwhelmingly common case at IR-construction call sites.
impl From<NodeRef> for Location {
    fn from(node: NodeRef) -> Self {
        Location::with_node(node, LocationKind::Regular)
    }
}

impl From<StmtId> for Location {
    fn from(id: StmtId) -> Self {
        Location::from(NodeRef::Stmt(id))
    }
}

impl From<ExprId> for Location {
    fn from(id: ExprId) -> Self {
        Location::from(NodeRef::Expr(id))
    }
}

impl From<DeclId> for Location {
    fn from(id: DeclId) -> Self {
        Location::from(NodeRef::Decl(id))
    }
}

impl From<PatternId> for Location {
    fn from(id: PatternId) -> Self {
        Location::from(NodeRef::Pattern(id))
    }
}

// Size assertions to prevent accidental regressions: one Location is
// embedded per instruction.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Location, Payload};
    sable_ast::static_assert_size!(Location, 12);
    sable_ast::static_assert_size!(Payload, 8);
}

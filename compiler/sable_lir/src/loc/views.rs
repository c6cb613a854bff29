//! Kind-restricted views over [`Location`].
//!
//! Each view is a zero-cost newtype over the base value, constructible
//! only with the payload shapes its kind admits. The base type narrows
//! into views through [`KindView`], the single extension point a new kind
//! has to implement.
//!
//! Views deref to [`Location`], so every base query and flag operation is
//! available on them; converting a view back to the base (or constructing
//! one via `from_location`) never touches flags or payload, only kind.

use std::ops::{Deref, DerefMut};

use sable_ast::{DeclId, ExprId, NodeRef, SourceLoc, StmtId};

use super::{Location, LocationKind, Payload};

mod sealed {
    pub trait Sealed {}
}

/// Narrowing protocol between [`Location`] and its kind views.
///
/// Sealed: the set of kinds is closed, and `wrap` must only be reachable
/// from the module that owns both the base type and the views.
pub trait KindView: Copy + Into<Location> + sealed::Sealed {
    /// Whether `loc` carries this view's kind.
    fn is_kind(loc: &Location) -> bool;

    /// Wrap a base value already known to carry this view's kind.
    #[doc(hidden)]
    fn wrap(loc: Location) -> Self;
}

macro_rules! kind_view {
    ($(#[$doc:meta])* $view:ident => $kind:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub struct $view(Location);

        impl sealed::Sealed for $view {}

        impl KindView for $view {
            #[inline]
            fn is_kind(loc: &Location) -> bool {
                loc.kind() == LocationKind::$kind
            }

            #[inline]
            fn wrap(loc: Location) -> Self {
                debug_assert!(Self::is_kind(&loc), "wrapped a {:?} location", loc.kind());
                $view(loc)
            }
        }

        impl Deref for $view {
            type Target = Location;

            fn deref(&self) -> &Location {
                &self.0
            }
        }

        impl DerefMut for $view {
            fn deref_mut(&mut self) -> &mut Location {
                &mut self.0
            }
        }

        impl From<$view> for Location {
            fn from(view: $view) -> Location {
                view.0
            }
        }
    };
}

kind_view! {
    /// Ordinary lowering provenance. Allowed on any instruction; the
    /// default kind for every call site that has a node and nothing
    /// special to say about it.
    RegularLocation => Regular
}

impl RegularLocation {
    /// A regular location wrapping any source-tree node.
    pub fn new(node: impl Into<NodeRef>) -> Self {
        RegularLocation(Location::with_node(node.into(), LocationKind::Regular))
    }

    /// The location representing the module itself: no payload, marked
    /// top-level.
    pub fn module() -> Self {
        let mut loc = Location::with_kind(LocationKind::Regular);
        loc.mark_as_top_level();
        RegularLocation(loc)
    }

    /// A payload-less location for synthesized code with no source
    /// counterpart.
    pub fn auto_generated() -> Self {
        let mut loc = Location::with_kind(LocationKind::Regular);
        loc.mark_auto_generated();
        RegularLocation(loc)
    }
}

kind_view! {
    /// A return instruction present in user code.
    ReturnLocation => Return
}

impl ReturnLocation {
    /// Wrap a return statement.
    pub fn new(return_stmt: StmtId) -> Self {
        ReturnLocation(Location::with_node(
            NodeRef::Stmt(return_stmt),
            LocationKind::Return,
        ))
    }

    /// The return point of a constructor or destructor, which has no
    /// return statement: wraps the body's brace statement instead.
    pub fn function_exit(brace_stmt: StmtId) -> Self {
        ReturnLocation(Location::with_node(
            NodeRef::Stmt(brace_stmt),
            LocationKind::Return,
        ))
    }

    /// The wrapped statement.
    pub fn get(&self) -> StmtId {
        match self.0.payload() {
            Payload::Stmt(id) => id,
            payload => panic!("return location carries {payload:?}, not a statement"),
        }
    }
}

kind_view! {
    /// A compiler-generated return from a function.
    ImplicitReturnLocation => ImplicitReturn
}

impl ImplicitReturnLocation {
    /// Implicit return from a closure body.
    pub fn from_closure(closure: ExprId) -> Self {
        ImplicitReturnLocation(Location::with_node(
            NodeRef::Expr(closure),
            LocationKind::ImplicitReturn,
        ))
    }

    /// Implicit return lowered out of an explicit return statement.
    pub fn from_return_stmt(return_stmt: StmtId) -> Self {
        ImplicitReturnLocation(Location::with_node(
            NodeRef::Stmt(return_stmt),
            LocationKind::ImplicitReturn,
        ))
    }

    /// Implicit return at the end of a function declaration's body.
    pub fn from_function(func: DeclId) -> Self {
        ImplicitReturnLocation(Location::with_node(
            NodeRef::Decl(func),
            LocationKind::ImplicitReturn,
        ))
    }

    /// Reinterpret an existing location as an implicit return, preserving
    /// payload and flags.
    ///
    /// The source value must wrap an expression, a declaration (a value or
    /// pattern-binding declaration), or be a null top-level location; in
    /// auto-generated bodies the expression may be arbitrary.
    pub fn from_location(loc: Location) -> Self {
        debug_assert!(
            matches!(loc.payload(), Payload::Expr(_) | Payload::Decl(_))
                || (loc.is_null() && loc.is_in_top_level()),
            "implicit return from incompatible location {loc:?}"
        );
        ImplicitReturnLocation(loc.rekinded(LocationKind::ImplicitReturn))
    }
}

kind_view! {
    /// Inlined function body and setup code; wraps the call site. Not used
    /// for bodies inlined by the mandatory pass, see
    /// [`MandatoryInlinedLocation`].
    InlinedLocation => Inlined
}

impl InlinedLocation {
    /// Wrap the call-site node.
    pub fn new(call_site: impl Into<NodeRef>) -> Self {
        InlinedLocation(Location::with_node(call_site.into(), LocationKind::Inlined))
    }

    /// Inlined location whose call site is a position in a textual IR
    /// listing rather than a tree node.
    pub fn from_file_position(loc: SourceLoc) -> Self {
        InlinedLocation(Location::with_file(loc, LocationKind::Inlined))
    }

    /// The listing position, for a location constructed from one.
    ///
    /// # Panics
    /// Panics if the payload is a tree node.
    pub fn file_position(&self) -> SourceLoc {
        assert!(
            !self.0.has_node(),
            "inlined location wraps a node, not a file position"
        );
        self.0.file_loc_or_invalid()
    }

    /// Reinterpret an existing location as inlined, preserving payload and
    /// flags.
    pub fn from_location(loc: Location) -> Self {
        InlinedLocation(loc.rekinded(LocationKind::Inlined))
    }
}

kind_view! {
    /// Body inlined by the mandatory inlining pass; wraps the call site.
    MandatoryInlinedLocation => MandatoryInlined
}

impl MandatoryInlinedLocation {
    /// Wrap the call-site node.
    pub fn new(call_site: impl Into<NodeRef>) -> Self {
        MandatoryInlinedLocation(Location::with_node(
            call_site.into(),
            LocationKind::MandatoryInlined,
        ))
    }

    /// Mandatory-inlined location whose call site is a position in a
    /// textual IR listing.
    pub fn from_file_position(loc: SourceLoc) -> Self {
        MandatoryInlinedLocation(Location::with_file(loc, LocationKind::MandatoryInlined))
    }

    /// The listing position, for a location constructed from one.
    ///
    /// # Panics
    /// Panics if the payload is a tree node.
    pub fn file_position(&self) -> SourceLoc {
        assert!(
            !self.0.has_node(),
            "mandatory-inlined location wraps a node, not a file position"
        );
        self.0.file_loc_or_invalid()
    }

    /// Reinterpret an existing location as mandatory-inlined, preserving
    /// payload and flags.
    pub fn from_location(loc: Location) -> Self {
        MandatoryInlinedLocation(loc.rekinded(LocationKind::MandatoryInlined))
    }
}

kind_view! {
    /// Auto-generated cleanup (deallocation, destructor calls) performed
    /// after the wrapped scope finishes evaluating. Resolves to the end of
    /// the scope's range by default, which is when the cleanup runs.
    CleanupLocation => Cleanup
}

impl CleanupLocation {
    /// Wrap the enclosing-scope node the cleanup belongs to.
    pub fn new(scope: impl Into<NodeRef>) -> Self {
        CleanupLocation(Location::with_node(scope.into(), LocationKind::Cleanup))
    }

    /// A cleanup on the module level: no payload, marked top-level.
    pub fn module_cleanup() -> Self {
        let mut loc = Location::with_kind(LocationKind::Cleanup);
        loc.mark_as_top_level();
        CleanupLocation(loc)
    }

    /// Reinterpret an existing location as a cleanup, preserving payload
    /// and flags.
    pub fn from_location(loc: Location) -> Self {
        CleanupLocation(loc.rekinded(LocationKind::Cleanup))
    }
}

kind_view! {
    /// An unreachable point inserted by analysis (dead-code elimination),
    /// distinguished from an unreachable present in lowered user code. Not
    /// used in diagnostics or debugging; payload-less by construction, and
    /// deliberately without a `from_location` factory.
    ArtificialUnreachableLocation => ArtificialUnreachable
}

impl ArtificialUnreachableLocation {
    /// The artificial unreachable location.
    pub fn new() -> Self {
        ArtificialUnreachableLocation(Location::with_kind(LocationKind::ArtificialUnreachable))
    }
}

impl Default for ArtificialUnreachableLocation {
    fn default() -> Self {
        Self::new()
    }
}

kind_view! {
    /// A location parsed from a textual IR listing. The only kind usable
    /// when no source tree exists; every accessor operates on the raw
    /// position alone.
    FileLocation => FileListing
}

impl FileLocation {
    /// Wrap a listing position.
    pub fn new(loc: SourceLoc) -> Self {
        FileLocation(Location::with_file(loc, LocationKind::FileListing))
    }

    /// The listing position.
    pub fn file_position(&self) -> SourceLoc {
        self.0.file_loc_or_invalid()
    }
}

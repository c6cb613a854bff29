//! Sable LIR - Lowered IR Support Types
//!
//! This crate contains the location abstraction that ties every lowered IR
//! instruction back to the source construct it was derived from. A
//! [`Location`] is a compact `Copy` value (12 bytes) embedded in each
//! instruction; it carries a kind discriminant, orthogonal annotation
//! flags, and a payload that is one of the four source-tree node
//! references, a raw file position, or nothing.
//!
//! Instructions come from many producers (direct lowering, inlining,
//! cleanup insertion, mandatory inlining, dead-code analysis, parsing of a
//! textual IR listing), and each producer tags its output with the kind
//! that names its provenance. The kind-specific wrappers in
//! [`loc`] restrict construction to the payload shapes legal for each kind.

pub mod loc;

pub use loc::{
    ArtificialUnreachableLocation, BindingPattern, BraceStmt, CallExpr, CleanupLocation,
    ClosureExpr, FileLocation, FuncDecl, IdentExpr, IfStmt, ImplicitReturnLocation,
    InlinedLocation, KindView, Location, LocationFlags, LocationKind, MandatoryInlinedLocation,
    NodeSubtype, ParenExpr, PatternBindingDecl, Payload, RegularLocation, ReturnLocation,
    ReturnStmt, TuplePattern, ValueDecl, VarDecl, WhileStmt, WildcardPattern,
};

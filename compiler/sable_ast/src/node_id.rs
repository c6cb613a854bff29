//! Node IDs and ranges for the flat source tree.
//!
//! Every AST node lives in a [`SourceTree`](crate::SourceTree) arena and is
//! referenced by a 4-byte ID instead of a `Box`. Child lists are stored in
//! flattened per-category vectors and referenced by `(start, len)` ranges.
//!
//! All IDs reserve `u32::MAX` as the invalid sentinel, so `Option`-free
//! embedding in compact structs stays honest: `is_valid()` is the check.

use std::fmt;

macro_rules! define_node_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Invalid ID (sentinel value).
            pub const INVALID: $name = $name(u32::MAX);

            /// Create a new ID.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Check if this is a valid ID.
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::INVALID"))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

macro_rules! define_node_range {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            /// Create a new range.
            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            /// Check if the range is empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Number of IDs in the range.
            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Convert to a `std::ops::Range` over the flat list.
            #[inline]
            pub fn to_range(&self) -> std::ops::Range<usize> {
                self.start as usize..self.start as usize + self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    self.start + u32::from(self.len)
                )
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }
    };
}

define_node_id! {
    /// Index into the statement arena.
    StmtId
}

define_node_id! {
    /// Index into the expression arena.
    ExprId
}

define_node_id! {
    /// Index into the declaration arena.
    DeclId
}

define_node_id! {
    /// Index into the pattern arena.
    PatternId
}

define_node_range! {
    /// Range of statements in the flattened statement list.
    StmtRange
}

define_node_range! {
    /// Range of expressions in the flattened expression list.
    ExprRange
}

define_node_range! {
    /// Range of patterns in the flattened pattern list.
    PatternRange
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, ExprRange};
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(ExprRange, 8);
}

//! Interned identifier names.

use std::fmt;

/// An interned string: a 4-byte index into the [`StringInterner`].
///
/// Equality and hashing are O(1) integer operations; two `Name`s from the
/// same interner are equal iff their strings are equal.
///
/// [`StringInterner`]: crate::StringInterner
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Create a name from its interner index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Name(index)
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_equality() {
        assert_eq!(Name::new(3), Name::new(3));
        assert_ne!(Name::new(3), Name::new(4));
        assert_eq!(Name::default(), Name::EMPTY);
    }

    #[test]
    fn name_size() {
        assert_eq!(std::mem::size_of::<Name>(), 4);
    }
}

//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup with thread-safe access through a
//! single `RwLock`. Interned strings are leaked to obtain the `'static`
//! lifetime; an interner lives for the whole compilation anyway.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

struct Inner {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// `Name::EMPTY` (the empty string) is pre-interned at index 0.
pub struct StringInterner {
    inner: RwLock<Inner>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            inner: RwLock::new(Inner {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    pub fn intern(&self, text: &str) -> Name {
        // Fast path: already interned.
        {
            let guard = self.inner.read();
            if let Some(&index) = guard.map.get(text) {
                return Name::new(index);
            }
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring the write lock.
        if let Some(&index) = guard.map.get(text) {
            return Name::new(index);
        }

        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let index = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded capacity: {} strings", guard.strings.len()));
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Name::new(index)
    }

    /// Resolve a `Name` back to its string.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn resolve(&self, name: Name) -> &'static str {
        self.inner.read().strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Whether the interner holds only the pre-interned empty string.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_dedups() {
        let interner = StringInterner::new();
        let a = interner.intern("main");
        let b = interner.intern("main");
        let c = interner.intern("other");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn resolve_round_trip() {
        let interner = StringInterner::new();
        let name = interner.intern("foo");
        assert_eq!(interner.resolve(name), "foo");
    }

    #[test]
    fn empty_preinterned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.resolve(Name::EMPTY), "");
        assert!(interner.is_empty());
        interner.intern("x");
        assert!(!interner.is_empty());
        assert_eq!(interner.len(), 2);
    }
}

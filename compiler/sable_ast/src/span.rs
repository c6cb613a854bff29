//! Source spans and positions.
//!
//! [`Span`] is the compact 8-byte byte-offset range attached to every AST
//! node. [`SourceLoc`] is a single position with an explicit invalid
//! sentinel, used by consumers (debug info, diagnostics) that need "one
//! point in the file or nothing". [`SourceRange`] pairs two positions and
//! is what location resolution hands to the diagnostic emitter.

use std::fmt;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => {
                write!(f, "span start {v} exceeds u32::MAX (0x{:X})", u32::MAX)
            }
            SpanError::EndTooLarge(v) => {
                write!(f, "span end {v} exceeds u32::MAX (0x{:X})", u32::MAX)
            }
        }
    }
}

impl std::error::Error for SpanError {}

/// A single source position: a byte offset from the start of the file.
///
/// `SourceLoc::INVALID` is the explicit "no position" value. Every query
/// that can come up empty returns it rather than failing.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct SourceLoc(u32);

impl SourceLoc {
    /// The invalid position (sentinel).
    pub const INVALID: SourceLoc = SourceLoc(u32::MAX);

    /// Create a position at the given byte offset.
    #[inline]
    pub const fn new(offset: u32) -> Self {
        SourceLoc(offset)
    }

    /// Byte offset from the start of the file.
    #[inline]
    pub const fn offset(self) -> u32 {
        self.0
    }

    /// Whether this is an actual position.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "SourceLoc({})", self.0)
        } else {
            write!(f, "SourceLoc::INVALID")
        }
    }
}

impl Default for SourceLoc {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A resolved start/end position pair.
///
/// Either bound may be invalid; a range resolved from a null location has
/// both bounds invalid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceRange {
    pub start: SourceLoc,
    pub end: SourceLoc,
}

impl SourceRange {
    /// The fully invalid range.
    pub const INVALID: SourceRange = SourceRange {
        start: SourceLoc::INVALID,
        end: SourceLoc::INVALID,
    };

    /// Create a range from two positions.
    #[inline]
    pub const fn new(start: SourceLoc, end: SourceLoc) -> Self {
        SourceRange { start, end }
    }

    /// Whether both bounds are actual positions.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }
}

impl Default for SourceRange {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for generated code.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Try to create a span from a byte range.
    ///
    /// Returns an error if the range exceeds `u32::MAX` bytes.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Create from a byte range.
    ///
    /// # Panics
    /// Panics if the range exceeds `u32::MAX` bytes.
    /// Use `try_from_range` for fallible conversion when handling user input.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Self::try_from_range(range).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// The start of the span as a position.
    #[inline]
    pub const fn start_loc(&self) -> SourceLoc {
        SourceLoc::new(self.start)
    }

    /// The end of the span as a position.
    #[inline]
    pub const fn end_loc(&self) -> SourceLoc {
        SourceLoc::new(self.end)
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{SourceLoc, Span};
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(SourceLoc, 4);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basic() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(span.contains(15));
        assert!(!span.contains(20));
    }

    #[test]
    fn span_merge() {
        let a = Span::new(10, 20);
        let b = Span::new(15, 30);
        let merged = a.merge(b);
        assert_eq!(merged.start, 10);
        assert_eq!(merged.end, 30);
    }

    #[test]
    fn span_point_and_dummy() {
        let point = Span::point(42);
        assert!(point.is_empty());
        assert_eq!(point.start, 42);
        assert!(Span::DUMMY.is_empty());
        assert_eq!(Span::default(), Span::DUMMY);
    }

    #[test]
    fn span_try_from_range() {
        let Ok(span) = Span::try_from_range(50..100) else {
            panic!("expected Ok for valid range");
        };
        assert_eq!(span.start, 50);
        assert_eq!(span.end, 100);

        let too_big = u32::MAX as usize + 1;
        assert!(matches!(
            Span::try_from_range(too_big..too_big + 1),
            Err(SpanError::StartTooLarge(_))
        ));
        assert!(matches!(
            Span::try_from_range(0..too_big),
            Err(SpanError::EndTooLarge(_))
        ));
    }

    #[test]
    fn span_bounds_as_locs() {
        let span = Span::new(3, 9);
        assert_eq!(span.start_loc(), SourceLoc::new(3));
        assert_eq!(span.end_loc(), SourceLoc::new(9));
        assert!(span.start_loc().is_valid());
    }

    #[test]
    fn source_loc_invalid_sentinel() {
        assert!(!SourceLoc::INVALID.is_valid());
        assert!(!SourceLoc::default().is_valid());
        assert!(SourceLoc::new(0).is_valid());
        assert_eq!(SourceLoc::new(7).offset(), 7);
    }

    #[test]
    fn source_loc_debug() {
        assert_eq!(format!("{:?}", SourceLoc::new(5)), "SourceLoc(5)");
        assert_eq!(format!("{:?}", SourceLoc::INVALID), "SourceLoc::INVALID");
    }

    #[test]
    fn source_range_validity() {
        let valid = SourceRange::new(SourceLoc::new(1), SourceLoc::new(4));
        assert!(valid.is_valid());

        let half = SourceRange::new(SourceLoc::new(1), SourceLoc::INVALID);
        assert!(!half.is_valid());

        assert!(!SourceRange::INVALID.is_valid());
        assert_eq!(SourceRange::default(), SourceRange::INVALID);
    }
}

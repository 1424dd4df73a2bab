//! Half-open `[start, end)` spans over cursor offsets.
//!
//! A `Range` is a plain value: it never borrows the source it was measured
//! against, so it can be stored alongside tokens and resolved later through
//! [`Cursor::substring_of`].
use crate::{Cursor, Error, Result};
use derive_more::Display;

/// A half-open span of byte offsets.
///
/// Invariants:
/// - both bounds are non-negative (enforced by `usize` and [`Range::between`])
/// - every constructor in this crate yields `start <= end`; a hand-built
///   reversed range is representable but reads through it fail
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[display("[{start}, {end})")]
pub struct Range {
    start: usize,
    end: usize,
}

impl Range {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Checked constructor for offsets that may have gone negative in caller
    /// arithmetic.
    pub fn between(start: isize, end: isize) -> Result<Self> {
        Ok(Self::new(bound("start", start)?, bound("end", end)?))
    }

    /// The whole source of `cursor`.
    pub fn full(cursor: &Cursor<'_>) -> Self {
        Self::new(0, cursor.len())
    }

    /// Everything `cursor` has moved past.
    pub fn consumed(cursor: &Cursor<'_>) -> Self {
        Self::new(0, cursor.position())
    }

    /// The tail of the source, measured as `len() - position()..len()`.
    ///
    /// NOTE: the start is the *remaining count*, not the position, so over
    /// `"foo bar"` after three bytes this is `[4, 7)`. Unlike
    /// [`Cursor::remaining`] the count is not clamped: a cursor advanced past
    /// the end yields a negative start and fails.
    pub fn unconsumed(cursor: &Cursor<'_>) -> Result<Self> {
        let length = isize::try_from(cursor.len()).unwrap_or(isize::MAX);
        let position = isize::try_from(cursor.position()).unwrap_or(isize::MAX);
        Self::between(length.saturating_sub(position), length)
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Byte length, zero for reversed ranges.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if `offset` lies inside the span. End is exclusive.
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Smallest range covering both `self` and `other`.
    pub fn expand(&self, other: Range) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(range: Range) -> Self {
        range.start..range.end
    }
}

fn bound(name: &'static str, value: isize) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::Negative { bound: name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1, 0, "start")]
    #[case(0, -1, "end")]
    #[case(-3, -1, "start")]
    fn negative_bounds_are_rejected(
        #[case] start: isize,
        #[case] end: isize,
        #[case] expected: &str,
    ) {
        let err = Range::between(start, end).unwrap_err();
        assert!(matches!(err, Error::Negative { bound, .. } if bound == expected));
    }

    #[test]
    fn between_does_not_require_ordering() {
        let range = Range::between(5, 2).expect("non-negative bounds are accepted");
        assert_eq!((range.start(), range.end()), (5, 2));
        assert_eq!(range.len(), 0);
        assert!(!range.is_empty());
    }

    #[test]
    fn full_consumed_and_unconsumed() {
        let mut cursor = Cursor::new("foo bar");
        assert_eq!(Range::full(&cursor), Range::new(0, 7));

        cursor.advance_by(3);
        assert_eq!(Range::consumed(&cursor), Range::new(0, 3));
        assert_eq!(Range::unconsumed(&cursor), Ok(Range::new(4, 7)));
    }

    #[rstest]
    #[case(7, Ok(Range::new(0, 7)))]
    #[case(8, Err(Error::Negative { bound: "start", value: -1 }))]
    #[case(9, Err(Error::Negative { bound: "start", value: -2 }))]
    fn unconsumed_past_end_fails(#[case] skipped: usize, #[case] expected: Result<Range>) {
        let mut cursor = Cursor::new("foo bar");
        cursor.advance_by(skipped);
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(Range::unconsumed(&cursor), expected);
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(0, 1, false)]
    #[case(4, 4, true)]
    #[case(2, 9, false)]
    fn empty_iff_bounds_equal(#[case] start: isize, #[case] end: isize, #[case] empty: bool) {
        assert_eq!(Range::between(start, end).unwrap().is_empty(), empty);
    }

    #[rstest]
    #[case((0, 3), (1, 6), (0, 6))]
    #[case((2, 4), (7, 9), (2, 9))]
    #[case((1, 8), (3, 5), (1, 8))]
    #[case((0, 0), (0, 0), (0, 0))]
    fn expand_covers_both_and_commutes(
        #[case] a: (usize, usize),
        #[case] b: (usize, usize),
        #[case] expected: (usize, usize),
    ) {
        let a = Range::new(a.0, a.1);
        let b = Range::new(b.0, b.1);
        let merged = a.expand(b);
        assert_eq!(merged, Range::new(expected.0, expected.1));
        assert_eq!(merged, b.expand(a));
        assert!(merged.start() <= a.start() && merged.start() <= b.start());
        assert!(merged.end() >= a.end() && merged.end() >= b.end());
    }

    #[test]
    fn contains_is_end_exclusive() {
        let range = Range::new(2, 5);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert!(!range.contains(1));
    }

    #[test]
    fn display_and_std_conversion() {
        let range = Range::new(1, 7);
        assert_eq!(range.to_string(), "[1, 7)");
        assert_eq!(std::ops::Range::from(range), 1..7);
    }
}

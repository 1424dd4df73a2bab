use crate::*;
use std::fmt;

/// Byte-oriented reader over a borrowed, immutable source.
///
/// The cursor owns nothing but its position; the source is shared with every
/// [`Cursor::copy`] and with the `&str` slices handed back by the `substring`
/// family, which all live as long as the original borrow.
///
/// Bounds:
/// - reads (`peek`, `peek_at`, `next`, `substring`) are checked and fail with
///   [`Error`] without moving the position
/// - `advance`/`advance_by` are unchecked; stepping past `len()` is legal and
///   simply leaves nothing readable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    strict: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            strict: config().strict_positions,
        }
    }

    /// Override whether [`Cursor::set_position`] validates its target.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Bytes left to read, zero once the position has run past the end.
    ///
    /// See [`Range::unconsumed`] for the unclamped form.
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn readable(&self) -> bool {
        self.readable_n(1)
    }

    /// True if `n` more bytes can be read from the current position.
    pub fn readable_n(&self, n: usize) -> bool {
        self.position
            .checked_add(n)
            .is_some_and(|end| end <= self.len())
    }

    pub fn peek(&self) -> Result<u8> {
        self.peek_at(0)
    }

    /// Byte at `position() + offset`. Anything outside `[0, len())` fails.
    pub fn peek_at(&self, offset: isize) -> Result<u8> {
        self.position
            .checked_add_signed(offset)
            .and_then(|index| self.source.as_bytes().get(index).copied())
            .ok_or_else(|| {
                let target = isize::try_from(self.position)
                    .ok()
                    .and_then(|position| position.checked_add(offset))
                    .unwrap_or(isize::MAX);
                self.out_of_bounds(target)
            })
    }

    /// The source bytes in `[start, end)`.
    ///
    /// Fails rather than clamping when the span is reversed, runs past the
    /// end, or would split a multi-byte character.
    pub fn substring(&self, start: usize, end: usize) -> Result<&'a str> {
        let length = self.len();
        if start > end || end > length {
            debug!("Rejected span [{start}, {end}) over {length} bytes");
            return Err(Error::Span { start, end, length });
        }
        self.source.get(start..end).ok_or_else(|| {
            let offset = if self.source.is_char_boundary(start) {
                end
            } else {
                start
            };
            Error::CharBoundary { offset }
        })
    }

    pub fn substring_of(&self, range: Range) -> Result<&'a str> {
        self.substring(range.start(), range.end())
    }

    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// An independent cursor over the same source at the same position.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Step one byte forward. Unchecked against `len()`; saturates at
    /// `usize::MAX`.
    pub fn advance(&mut self) {
        self.position = self.position.saturating_add(1);
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance while the next byte exists and satisfies `predicate`.
    pub fn advance_while(&mut self, predicate: impl FnMut(u8) -> bool) {
        self.scan(predicate);
    }

    /// Read the byte under the cursor and step past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<u8> {
        let byte = self.peek()?;
        self.advance();
        Ok(byte)
    }

    /// Consume and return the longest prefix whose bytes satisfy `predicate`.
    ///
    /// The position moves even when the returned slice would split a
    /// character and the call fails with [`Error::CharBoundary`].
    pub fn next_while(&mut self, predicate: impl FnMut(u8) -> bool) -> Result<&'a str> {
        let range = self.scan(predicate);
        self.substring_of(range)
    }

    /// Like [`Cursor::next_while`], but leaves the position where it was.
    pub fn peek_while(&mut self, predicate: impl FnMut(u8) -> bool) -> Result<&'a str> {
        let mut mark = self.mark();
        mark.advance_while(predicate).release();
        mark.string()
    }

    /// Move to `position`, returning the previous position.
    ///
    /// Strict cursors refuse targets past `len()`.
    pub fn set_position(&mut self, position: usize) -> Result<usize> {
        if self.strict && position > self.len() {
            return Err(self.out_of_bounds(position as isize));
        }
        Ok(self.restore(position))
    }

    /// Snapshot the current position.
    #[must_use]
    pub fn mark(&mut self) -> Mark<'_, 'a> {
        Mark::new(self)
    }

    /// Unchecked position swap used when rewinding to a position this cursor
    /// has already held.
    pub(crate) fn restore(&mut self, position: usize) -> usize {
        std::mem::replace(&mut self.position, position)
    }

    fn scan(&mut self, mut predicate: impl FnMut(u8) -> bool) -> Range {
        let start = self.position;
        while let Some(&byte) = self.source.as_bytes().get(self.position) {
            if !predicate(byte) {
                break;
            }
            self.advance();
        }
        Range::new(start, self.position)
    }

    fn out_of_bounds(&self, offset: isize) -> Error {
        let length = self.len();
        debug!("Offset {offset} is outside of {length} bytes");
        Error::Index { offset, length }
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

impl AsRef<str> for Cursor<'_> {
    fn as_ref(&self) -> &str {
        self.source
    }
}

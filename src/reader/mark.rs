//! Saved cursor positions for backtracking and lexeme capture.
//!
//! A [`Mark`] mutably borrows the [`Cursor`] that created it, so the cursor
//! cannot be touched behind its back and can never outlive it. Keep reading
//! through the mark (it derefs to the cursor), then decide:
//!
//! - [`Mark::commit`] keeps the new position and freezes the span read so far
//! - [`Mark::release`] freezes the span and rewinds, for lookahead
//! - [`Mark::revert`] only rewinds
use crate::*;
use std::ops::{Deref, DerefMut};

#[derive(Debug)]
pub struct Mark<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    anchor: usize,
    end: Option<usize>,
}

impl<'c, 'a> Mark<'c, 'a> {
    pub(crate) fn new(cursor: &'c mut Cursor<'a>) -> Self {
        let anchor = cursor.position();
        Self {
            cursor,
            anchor,
            end: None,
        }
    }

    /// Cursor position when the mark was taken.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// True once `commit` or `release` has frozen the end of the span.
    pub fn is_resolved(&self) -> bool {
        self.end.is_some()
    }

    pub fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut *self.cursor
    }

    pub fn advance_while(&mut self, predicate: impl FnMut(u8) -> bool) -> &mut Self {
        self.cursor.advance_while(predicate);
        self
    }

    /// Run `f` against the owning cursor.
    pub fn with(&mut self, f: impl FnOnce(&mut Cursor<'a>)) -> &mut Self {
        f(&mut *self.cursor);
        self
    }

    /// Put the cursor back on the anchor and return the position undone.
    pub fn revert(&mut self) -> usize {
        let undone = self.cursor.restore(self.anchor);
        trace!("Reverted mark from {undone} to {}", self.anchor);
        undone
    }

    /// Freeze the span at the current position and keep it.
    ///
    /// Resolving twice is a no-op that returns the first span.
    pub fn commit(&mut self) -> Range {
        if self.end.is_none() {
            self.end = Some(self.cursor.position());
            trace!("Committed mark {}", self.range());
        }
        self.range()
    }

    /// Freeze the span at the current position, then rewind to the anchor.
    pub fn release(&mut self) -> Range {
        if self.end.is_none() {
            self.end = Some(self.revert());
            trace!("Released mark {}", self.range());
        }
        self.range()
    }

    /// Span from the anchor to the frozen end, or to the live position while
    /// unresolved.
    pub fn range(&self) -> Range {
        Range::new(
            self.anchor,
            self.end.unwrap_or_else(|| self.cursor.position()),
        )
    }

    pub fn string(&self) -> Result<&'a str> {
        self.cursor.substring_of(self.range())
    }
}

impl<'a> Deref for Mark<'_, 'a> {
    type Target = Cursor<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.cursor
    }
}

impl DerefMut for Mark<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cursor
    }
}

//! Position tracking over an in-memory string.
//!
//! The building blocks a hand-written parser needs before it has any notion
//! of tokens:
//!
//! Modules:
//! - `range`  : `Range`, a half-open `[start, end)` span of byte offsets.
//! - `cursor` : `Cursor`, bounds-checked reads and predicate scans over a `&str`.
//! - `mark`   : `Mark`, a saved cursor position that can be committed, released
//!   or reverted.
//!
//! Offsets count bytes of the UTF-8 source. Predicates see one byte at a time,
//! which is enough for ASCII grammars; slices that would split a multi-byte
//! character are refused rather than panicking.
//!
//! Example:
//! ```rust
//! use strcursor::prelude::*;
//!
//! let mut cursor = Cursor::new("width = 42");
//! let key = cursor.next_while(|b| b.is_ascii_alphanumeric()).unwrap();
//! assert_eq!(key, "width");
//!
//! cursor.advance_while(|b| b == b' ' || b == b'=');
//! let mut mark = cursor.mark();
//! let digits = mark.advance_while(|b| b.is_ascii_digit()).commit();
//! assert_eq!(digits, Range::new(8, 10));
//! assert_eq!(mark.string().unwrap(), "42");
//! assert!(!cursor.readable());
//! ```
//!
//! Single-owner only: a `Cursor` is not meant to be shared across threads, and
//! a `Mark` holds the cursor's only mutable borrow for as long as it lives.
//! Use [`Cursor::copy`] for an independently advancing view.

pub mod cursor;
pub mod mark;
pub mod range;


pub use cursor::Cursor;
pub use mark::Mark;
pub use range::Range;

/// Convenience prelude re-exporting the reader types and the error alias.
///
/// Import with:
/// `use strcursor::prelude::*;`
pub mod prelude {
    pub use super::{Cursor, Mark, Range};
    pub use crate::error::{Error, Result};
}

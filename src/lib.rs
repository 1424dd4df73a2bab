//! Cursor, mark and range primitives for hand-written parsers.
//!
//! A [`Cursor`] walks an immutable `&str` one byte at a time, a [`Mark`]
//! remembers where the cursor was so the caller can either keep or undo what
//! it consumed, and a [`Range`] names a half-open span of the source.
reexport!(testing, test);
reexport!(reader);
reexport!(error);
reexport!(config);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

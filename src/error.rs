#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Offset {offset} is out of bounds for length {length}")]
    Index { offset: isize, length: usize },

    #[error("Range {bound} cannot be less than zero: {value}")]
    Negative { bound: &'static str, value: isize },

    #[error("Span [{start}, {end}) is out of bounds for length {length}")]
    Span {
        start: usize,
        end: usize,
        length: usize,
    },

    #[error("Offset {offset} does not fall on a character boundary")]
    CharBoundary { offset: usize },
}

impl Error {
    /// The offset that triggered the failure.
    pub fn offset(&self) -> isize {
        match self {
            Error::Index { offset, .. } => *offset,
            Error::Negative { value, .. } => *value,
            Error::Span {
                start,
                end,
                length,
            } => {
                if start > length || start > end {
                    *start as isize
                } else {
                    *end as isize
                }
            }
            Error::CharBoundary { offset } => *offset as isize,
        }
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;

//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors from bounds-checked container operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index-based access was requested with `index >= len`.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The container length at the time of the request.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for array of length {len}")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_len() {
        let err = ArrayError::OutOfBounds { index: 10, len: 4 };
        assert_eq!(
            err.to_string(),
            "index 10 out of bounds for array of length 4"
        );
    }
}

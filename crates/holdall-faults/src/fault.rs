//! The [`Fault`] tagged variant and its message table.

use std::error::Error;
use std::fmt;

/// A categorized failure report with a human-readable message.
///
/// The message for each non-generic variant is fixed at the type level;
/// `Generic` carries the message it was constructed with. Messages are
/// immutable after construction — there are no mutators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    /// An uncategorized failure with a caller-supplied message.
    Generic(String),
    /// Allocation or capacity exhaustion.
    Memory,
    /// A general input/output failure.
    Io,
    /// A file could not be read.
    FileRead,
    /// A file could not be written.
    FileWrite,
}

impl Fault {
    /// The human-readable message for this fault.
    pub fn message(&self) -> &str {
        match self {
            Self::Generic(message) => message,
            Self::Memory => "out of memory",
            Self::Io => "input/output failure",
            Self::FileRead => "file read failed",
            Self::FileWrite => "file write failed",
        }
    }

    /// Construct a generic fault from any message-like value.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for Fault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_variants_have_fixed_messages() {
        assert_eq!(Fault::Memory.message(), "out of memory");
        assert_eq!(Fault::Io.message(), "input/output failure");
        assert_eq!(Fault::FileRead.message(), "file read failed");
        assert_eq!(Fault::FileWrite.message(), "file write failed");
    }

    #[test]
    fn generic_carries_caller_message() {
        let fault = Fault::generic("disk on fire");
        assert_eq!(fault.message(), "disk on fire");
        assert_eq!(fault, Fault::Generic("disk on fire".to_owned()));
    }

    #[test]
    fn display_renders_the_message() {
        assert_eq!(Fault::FileRead.to_string(), "file read failed");
        assert_eq!(Fault::generic("oops").to_string(), "oops");
    }

    #[test]
    fn clone_is_value_equal() {
        let fault = Fault::generic("original");
        let copy = fault.clone();
        assert_eq!(fault, copy);
    }
}

//! Error types shared by every module of the crate.
//!
//! All failures are reported synchronously through [`Error`]. There are
//! three kinds of failure:
//!
//! - **Configuration**: the caller set something up wrongly, e.g. passed
//!   contradictory bounds to [`ensure_argcount`](crate::functional::ensure_argcount).
//! - **Type**: an argument is of the wrong kind, e.g. a non-callable value
//!   where a callable is required or an invalid decoration target.
//! - **Value**: an argument is of the right kind but out of range, e.g. a
//!   zero batch size.

use std::borrow::Cow;
use std::fmt;

/// Represents an error when a value lacks a required capability.
///
/// # Examples
///
/// ```rust
/// use taipan::InvalidTypeError;
///
/// let error = InvalidTypeError::new("a callable", "int");
/// assert_eq!(format!("{error}"), "expected a callable, got int");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTypeError {
    /// The capability that was expected, e.g. `"a callable"`.
    pub expected: Cow<'static, str>,
    /// The type name of the value that was received.
    pub actual: String,
}

impl InvalidTypeError {
    /// Creates a new error from the expected capability and actual type name.
    pub fn new(expected: impl Into<Cow<'static, str>>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for InvalidTypeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "expected {}, got {}", self.expected, self.actual)
    }
}

impl std::error::Error for InvalidTypeError {}

/// The coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Programmer misuse detected at setup time.
    Configuration,
    /// Wrong kind of argument.
    Type,
    /// Right kind of argument, but out of range.
    Value,
}

/// Represents every error the crate can produce.
///
/// # Examples
///
/// ```rust
/// use taipan::{Error, ErrorKind};
///
/// let error = Error::Value("number of cycles cannot be negative".to_string());
/// assert_eq!(error.kind(), ErrorKind::Value);
/// assert_eq!(format!("{error}"), "number of cycles cannot be negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid setup, such as contradictory bounds.
    Configuration(String),
    /// A value lacks a required capability.
    InvalidType(InvalidTypeError),
    /// An argument is of the wrong kind.
    Type(String),
    /// An argument is out of range.
    Value(String),
}

impl Error {
    /// Returns the kind of this error.
    ///
    /// [`Error::InvalidType`] is a [`ErrorKind::Type`] error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::InvalidType(_) | Self::Type(_) => ErrorKind::Type,
            Self::Value(_) => ErrorKind::Value,
        }
    }

    /// Returns `true` if this is a type-kind error.
    #[inline]
    pub const fn is_type_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Type)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(message) | Self::Type(message) | Self::Value(message) => {
                formatter.write_str(message)
            }
            Self::InvalidType(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidType(error) => Some(error),
            _ => None,
        }
    }
}

impl From<InvalidTypeError> for Error {
    fn from(error: InvalidTypeError) -> Self {
        Self::InvalidType(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_type_error_display() {
        let error = InvalidTypeError::new("a callable", "NoneType");
        assert_eq!(format!("{error}"), "expected a callable, got NoneType");
    }

    #[rstest]
    #[case(Error::Configuration("bad bounds".to_string()), ErrorKind::Configuration)]
    #[case(Error::InvalidType(InvalidTypeError::new("a callable", "int")), ErrorKind::Type)]
    #[case(Error::Type("not a sequence".to_string()), ErrorKind::Type)]
    #[case(Error::Value("negative".to_string()), ErrorKind::Value)]
    fn test_error_kind(#[case] error: Error, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[rstest]
    fn test_invalid_type_error_is_source() {
        use std::error::Error as _;

        let error = Error::from(InvalidTypeError::new("a callable", "str"));
        assert!(error.source().is_some());
        assert_eq!(format!("{error}"), "expected a callable, got str");
        assert!(Error::Value("x".to_string()).source().is_none());
    }
}

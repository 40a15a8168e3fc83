//! Test assertions for string prefixes and suffixes.
//!
//! - [`assert_starts_with!`]: fails the test unless a string starts with a prefix
//! - [`assert_ends_with!`]: fails the test unless a string ends with a suffix
//! - [`check_starts_with`] and [`check_ends_with`]: the same checks, returning
//!   an [`AssertionFailure`] instead of panicking
//!
//! Both arguments must be string-like (see [`StringLike`]); `None` or a
//! non-string [`Object`](crate::object::Object) fails the assertion. An
//! empty prefix or suffix matches any string.
//!
//! # Examples
//!
//! ```rust
//! use taipan::{assert_ends_with, assert_starts_with};
//!
//! assert_starts_with!("foo", "foobar");
//! assert_starts_with!("", "anything");
//! assert_ends_with!("bar", String::from("foobar"));
//! ```
//!
//! ```rust,should_panic
//! use taipan::assert_starts_with;
//!
//! assert_starts_with!("foo", "");
//! ```

mod assertions;

pub use assertions::{AssertionFailure, StringLike, check_ends_with, check_starts_with};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::assert_ends_with;
pub use crate::assert_starts_with;

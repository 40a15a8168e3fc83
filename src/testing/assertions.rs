use std::borrow::Cow;
use std::fmt;

/// A value that may be a string.
pub trait StringLike {
    /// Returns the string, or `None` if this value is not a string.
    fn as_str_like(&self) -> Option<&str>;

    /// Describes this value in failure messages.
    fn describe(&self) -> String {
        self.as_str_like()
            .map_or_else(|| "<not a string>".to_string(), |text| format!("{text:?}"))
    }
}

impl StringLike for str {
    #[inline]
    fn as_str_like(&self) -> Option<&str> {
        Some(self)
    }
}

impl StringLike for String {
    #[inline]
    fn as_str_like(&self) -> Option<&str> {
        Some(self)
    }
}

impl StringLike for Cow<'_, str> {
    #[inline]
    fn as_str_like(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: StringLike + ?Sized> StringLike for &T {
    fn as_str_like(&self) -> Option<&str> {
        (**self).as_str_like()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: StringLike> StringLike for Option<T> {
    fn as_str_like(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.as_str_like())
    }

    fn describe(&self) -> String {
        self.as_ref()
            .map_or_else(|| "None".to_string(), |value| value.describe())
    }
}

/// A failed string assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    fn new(message: String) -> Self {
        Self { message }
    }

    /// Returns the failure message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for AssertionFailure {}

fn strings<'a, A, B>(
    (first_role, first): (&str, &'a A),
    (second_role, second): (&str, &'a B),
) -> Result<(&'a str, &'a str), AssertionFailure>
where
    A: StringLike + ?Sized,
    B: StringLike + ?Sized,
{
    let not_a_string = |role: &str, description: String| {
        AssertionFailure::new(format!("{role} {description} is not a string"))
    };
    let first_text = first
        .as_str_like()
        .ok_or_else(|| not_a_string(first_role, first.describe()))?;
    let second_text = second
        .as_str_like()
        .ok_or_else(|| not_a_string(second_role, second.describe()))?;
    Ok((first_text, second_text))
}

/// Checks that `string` starts with `prefix`.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] if either argument is not string-like or
/// `string` does not start with `prefix`.
///
/// # Examples
///
/// ```rust
/// use taipan::testing::check_starts_with;
///
/// assert!(check_starts_with("foo", "foobar").is_ok());
///
/// let failure = check_starts_with("foo", "barfoo").unwrap_err();
/// assert_eq!(failure.message(), r#""barfoo" does not start with "foo""#);
///
/// let failure = check_starts_with(&None::<&str>, "foobar").unwrap_err();
/// assert_eq!(failure.message(), "prefix None is not a string");
/// ```
pub fn check_starts_with<P, S>(prefix: &P, string: &S) -> Result<(), AssertionFailure>
where
    P: StringLike + ?Sized,
    S: StringLike + ?Sized,
{
    let (prefix_text, text) = strings(("prefix", prefix), ("string", string))?;
    if text.starts_with(prefix_text) {
        Ok(())
    } else {
        Err(AssertionFailure::new(format!(
            "{text:?} does not start with {prefix_text:?}"
        )))
    }
}

/// Checks that `string` ends with `suffix`.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] if either argument is not string-like or
/// `string` does not end with `suffix`.
pub fn check_ends_with<P, S>(suffix: &P, string: &S) -> Result<(), AssertionFailure>
where
    P: StringLike + ?Sized,
    S: StringLike + ?Sized,
{
    let (suffix_text, text) = strings(("suffix", suffix), ("string", string))?;
    if text.ends_with(suffix_text) {
        Ok(())
    } else {
        Err(AssertionFailure::new(format!(
            "{text:?} does not end with {suffix_text:?}"
        )))
    }
}

/// Asserts that a string starts with a prefix.
///
/// Panics when either argument is not string-like, or when the string does
/// not start with the prefix. An optional message may follow, formatted
/// like [`assert!`].
///
/// # Examples
///
/// ```rust
/// use taipan::assert_starts_with;
///
/// assert_starts_with!("foo", "foobar");
/// assert_starts_with!("foo", String::from("food"), "checking {}", "food");
/// ```
#[macro_export]
macro_rules! assert_starts_with {
    ($prefix:expr, $string:expr $(,)?) => {
        if let ::core::result::Result::Err(failure) =
            $crate::testing::check_starts_with(&$prefix, &$string)
        {
            ::core::panic!("assertion failed: {}", failure);
        }
    };
    ($prefix:expr, $string:expr, $($message:tt)+) => {
        if let ::core::result::Result::Err(failure) =
            $crate::testing::check_starts_with(&$prefix, &$string)
        {
            ::core::panic!("assertion failed: {}: {}", failure, ::core::format_args!($($message)+));
        }
    };
}

/// Asserts that a string ends with a suffix.
///
/// Panics when either argument is not string-like, or when the string does
/// not end with the suffix. An optional message may follow, formatted like
/// [`assert!`].
///
/// # Examples
///
/// ```rust
/// use taipan::assert_ends_with;
///
/// assert_ends_with!("bar", "foobar");
/// assert_ends_with!("", "foobar");
/// ```
#[macro_export]
macro_rules! assert_ends_with {
    ($suffix:expr, $string:expr $(,)?) => {
        if let ::core::result::Result::Err(failure) =
            $crate::testing::check_ends_with(&$suffix, &$string)
        {
            ::core::panic!("assertion failed: {}", failure);
        }
    };
    ($suffix:expr, $string:expr, $($message:tt)+) => {
        if let ::core::result::Result::Err(failure) =
            $crate::testing::check_ends_with(&$suffix, &$string)
        {
            ::core::panic!("assertion failed: {}: {}", failure, ::core::format_args!($($message)+));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PREFIX: &str = "foo";
    const SUFFIX: &str = "bar";
    const STRING: &str = "foobar";

    #[rstest]
    fn test_starts_with_prefix_none() {
        assert!(check_starts_with(&None::<&str>, STRING).is_err());
    }

    #[rstest]
    fn test_starts_with_empty_prefix() {
        assert!(check_starts_with("", STRING).is_ok());
    }

    #[rstest]
    fn test_starts_with_string_none() {
        let failure = check_starts_with(PREFIX, &None::<String>).unwrap_err();
        assert_eq!(failure.message(), "string None is not a string");
    }

    #[rstest]
    fn test_starts_with_empty_string() {
        assert!(check_starts_with(PREFIX, "").is_err());
    }

    #[rstest]
    fn test_starts_with_success() {
        assert!(check_starts_with(PREFIX, STRING).is_ok());
        assert!(check_starts_with(&Some(PREFIX), &String::from(STRING)).is_ok());
    }

    #[rstest]
    fn test_ends_with_suffix_none() {
        assert!(check_ends_with(&None::<&str>, STRING).is_err());
    }

    #[rstest]
    fn test_ends_with_empty_suffix() {
        assert!(check_ends_with("", STRING).is_ok());
    }

    #[rstest]
    fn test_ends_with_empty_string() {
        assert!(check_ends_with(SUFFIX, "").is_err());
    }

    #[rstest]
    fn test_ends_with_failure_message() {
        let failure = check_ends_with(SUFFIX, "barfoo").unwrap_err();
        assert_eq!(failure.to_string(), r#""barfoo" does not end with "bar""#);
    }

    #[rstest]
    fn test_ends_with_success() {
        assert!(check_ends_with(SUFFIX, STRING).is_ok());
        assert!(check_ends_with(&Cow::Borrowed(SUFFIX), STRING).is_ok());
    }

    #[rstest]
    fn test_macros_pass() {
        assert_starts_with!(PREFIX, STRING);
        assert_ends_with!(SUFFIX, STRING, "with a message");
    }

    #[rstest]
    #[should_panic(expected = "assertion failed: \"\" does not start with \"foo\"")]
    fn test_assert_starts_with_panics_on_empty_string() {
        assert_starts_with!(PREFIX, "");
    }

    #[rstest]
    #[should_panic(expected = "does not end with \"bar\": while checking foobaz")]
    fn test_assert_ends_with_panics_with_message() {
        assert_ends_with!(SUFFIX, "foobaz", "while checking {}", "foobaz");
    }

    #[rstest]
    #[should_panic(expected = "suffix None is not a string")]
    fn test_assert_ends_with_panics_on_none() {
        assert_ends_with!(None::<&str>, STRING);
    }
}

//! Argument validation helpers.

use std::borrow::Cow;

use super::{Arguments, Inspect};
use crate::{Error, InvalidTypeError};

/// Returns `value` unchanged if it can be invoked.
///
/// # Errors
///
/// Returns [`Error::InvalidType`] naming the expected capability and the
/// actual type of `value` when it is not callable.
///
/// # Examples
///
/// ```rust
/// use taipan::functional::ensure_callable;
/// use taipan::object::{Function, Object};
///
/// let function = Object::from(Function::new("noop", |_| Ok(Object::None)));
/// assert!(ensure_callable(function).is_ok());
///
/// let error = ensure_callable(Object::Int(42)).unwrap_err();
/// assert_eq!(error.to_string(), "expected a callable, got int");
/// ```
pub fn ensure_callable<V: Inspect>(value: V) -> Result<V, Error> {
    if value.is_callable() {
        Ok(value)
    } else {
        Err(InvalidTypeError::new("a callable", value.type_name().into_owned()).into())
    }
}

/// A value that may be a sized sequence.
pub trait Countable {
    /// Returns the number of elements, or `None` if this value is not a
    /// sized sequence.
    fn count(&self) -> Option<usize>;

    /// Returns the type name used in error messages.
    fn sequence_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

impl<T> Countable for [T] {
    #[inline]
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Countable for [T; N] {
    #[inline]
    fn count(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Countable for Vec<T> {
    #[inline]
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

/// Counts the positional values only.
impl<V> Countable for Arguments<V> {
    #[inline]
    fn count(&self) -> Option<usize> {
        Some(self.positional().len())
    }
}

impl<T: Countable + ?Sized> Countable for &T {
    fn count(&self) -> Option<usize> {
        (**self).count()
    }

    fn sequence_type_name(&self) -> Cow<'_, str> {
        (**self).sequence_type_name()
    }
}

impl<T: Countable> Countable for Option<T> {
    fn count(&self) -> Option<usize> {
        self.as_ref().and_then(Countable::count)
    }

    fn sequence_type_name(&self) -> Cow<'_, str> {
        self.as_ref()
            .map_or(Cow::Borrowed("None"), Countable::sequence_type_name)
    }
}

/// Validates that `args` holds between `min` and `max` elements, inclusive.
///
/// A missing `min` means zero and a missing `max` means unbounded, but at
/// least one of the bounds must be given.
///
/// # Errors
///
/// - [`Error::Configuration`] if both bounds are `None`, or if `min` is
///   greater than `max`.
/// - [`Error::Type`] if `args` is not a sized sequence.
/// - [`Error::Type`] if the length of `args` is outside the bounds; the
///   message reads "expected at least N" or "expected at most N".
///
/// # Examples
///
/// ```rust
/// use taipan::functional::ensure_argcount;
///
/// let args = ["foo", "bar"];
/// assert!(ensure_argcount(&args, Some(1), Some(2)).is_ok());
///
/// let error = ensure_argcount(&args, Some(3), None).unwrap_err();
/// assert!(error.to_string().contains("expected at least 3"));
///
/// let error = ensure_argcount(&args, Some(2), Some(1)).unwrap_err();
/// assert!(error.to_string().contains("greater"));
/// ```
pub fn ensure_argcount<C>(args: &C, min: Option<usize>, max: Option<usize>) -> Result<(), Error>
where
    C: Countable + ?Sized,
{
    if min.is_none() && max.is_none() {
        return Err(Error::Configuration(
            "either minimum or maximum argument count must be given".to_string(),
        ));
    }
    let min = min.unwrap_or(0);
    if let Some(max) = max
        && min > max
    {
        return Err(Error::Configuration(format!(
            "minimum argument count {min} is greater than maximum {max}"
        )));
    }

    let Some(count) = args.count() else {
        return Err(Error::Type(format!(
            "expected a sized sequence of arguments, got {}",
            args.sequence_type_name()
        )));
    };

    if count < min {
        return Err(Error::Type(format!(
            "expected at least {min} argument(s), got {count}"
        )));
    }
    if let Some(max) = max
        && count > max
    {
        return Err(Error::Type(format!(
            "expected at most {max} argument(s), got {count}"
        )));
    }
    Ok(())
}

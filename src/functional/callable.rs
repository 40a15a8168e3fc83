//! Capability traits for values of a dynamic object model.
//!
//! Rust has no runtime reflection, so a host value type describes its own
//! capabilities by implementing [`Inspect`] (what kind of value is this?)
//! and [`Invoke`] (call it with [`Arguments`]).

use std::borrow::Cow;
use std::fmt;

use super::Arguments;
use crate::Error;

/// The capability tag of a value.
///
/// # Examples
///
/// ```rust
/// use taipan::functional::TargetKind;
///
/// assert!(TargetKind::Function.is_callable());
/// assert!(TargetKind::Class.is_callable());
/// assert!(TargetKind::Callable.is_callable());
/// assert!(!TargetKind::Value.is_callable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    /// A user-defined function.
    Function,
    /// A class-like construct; invoking it creates an instance.
    Class,
    /// Invocable, but neither a function nor a class (a callable instance,
    /// a builtin).
    Callable,
    /// Not invocable.
    Value,
}

impl TargetKind {
    /// Returns `true` for every kind except [`TargetKind::Value`].
    #[inline]
    pub const fn is_callable(self) -> bool {
        !matches!(self, Self::Value)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Function => "function",
            Self::Class => "class",
            Self::Callable => "callable",
            Self::Value => "value",
        };
        formatter.write_str(name)
    }
}

/// Classifies a value and exposes its identity metadata.
pub trait Inspect {
    /// Returns the capability tag of this value.
    fn target_kind(&self) -> TargetKind;

    /// Returns the name of this value's type, used in error messages.
    fn type_name(&self) -> Cow<'_, str>;

    /// Returns the display name of this value, if it has one.
    ///
    /// Functions and classes usually have a name; plain values and callable
    /// instances usually do not.
    fn display_name(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Returns the documentation attached to this value, if any.
    fn doc(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Returns `true` if this value can be invoked.
    fn is_callable(&self) -> bool {
        self.target_kind().is_callable()
    }
}

/// Invokes a value with positional and keyword arguments.
///
/// Implementations must fail with a type-kind [`Error`] when the value is
/// not callable.
pub trait Invoke: Inspect + Sized {
    /// Calls this value.
    ///
    /// # Errors
    ///
    /// Returns whatever error the call produces, or a type error when this
    /// value is not callable.
    fn invoke(&self, arguments: Arguments<Self>) -> Result<Self, Error>;
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn target_kind(&self) -> TargetKind {
        (**self).target_kind()
    }

    fn type_name(&self) -> Cow<'_, str> {
        (**self).type_name()
    }

    fn display_name(&self) -> Option<Cow<'_, str>> {
        (**self).display_name()
    }

    fn doc(&self) -> Option<Cow<'_, str>> {
        (**self).doc()
    }

    fn is_callable(&self) -> bool {
        (**self).is_callable()
    }
}

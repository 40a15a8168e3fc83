//! Decoration target predicates and call shapes.

use std::fmt;

use crate::functional::{Arguments, Inspect, is_class, is_function, or_};

/// The set of values a decorator family may be applied to.
///
/// # Examples
///
/// ```rust
/// use taipan::decorator::Targets;
/// use taipan::object::{Class, Function, Object};
///
/// let function = Object::from(Function::new("f", |_| Ok(Object::None)));
/// let class = Object::from(Class::new("C"));
///
/// assert!(Targets::FunctionsOrClasses.accepts(&function));
/// assert!(Targets::FunctionsOrClasses.accepts(&class));
/// assert!(Targets::Functions.accepts(&function));
/// assert!(!Targets::Functions.accepts(&class));
/// assert!(!Targets::Classes.accepts(&Object::Int(1)));
/// assert_eq!(Targets::Classes.noun(), "classes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Targets {
    /// Functions and classes alike.
    FunctionsOrClasses,
    /// Functions only.
    Functions,
    /// Classes only.
    Classes,
}

impl Targets {
    /// Returns `true` if `target` is a valid decoration target.
    pub fn accepts<V: Inspect + ?Sized>(self, target: &V) -> bool {
        match self {
            Self::FunctionsOrClasses => or_(is_function::<V>, is_class::<V>)(target),
            Self::Functions => is_function(target),
            Self::Classes => is_class(target),
        }
    }

    /// Returns the plural noun phrase used in error messages.
    #[inline]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::FunctionsOrClasses => "functions or classes",
            Self::Functions => "functions",
            Self::Classes => "classes",
        }
    }
}

impl fmt::Display for Targets {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.noun())
    }
}

/// How an adapted decorator was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallShape {
    /// Used directly above a definition, without parentheses.
    Bare,
    /// Called with zero or more arguments before being applied.
    Parameterized,
}

impl CallShape {
    /// Classifies an invocation.
    ///
    /// Exactly one positional argument, no keyword arguments and a valid
    /// target means [`CallShape::Bare`]; anything else is
    /// [`CallShape::Parameterized`].
    ///
    /// A decorator factory whose only configuration argument is itself a
    /// valid target cannot be told apart from bare application and is
    /// classified as [`CallShape::Bare`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taipan::decorator::{CallShape, Targets};
    /// use taipan::functional::Arguments;
    /// use taipan::object::{Function, Object};
    ///
    /// let function = Object::from(Function::new("f", |_| Ok(Object::None)));
    ///
    /// let bare = Arguments::single(function.clone());
    /// assert_eq!(CallShape::of(&bare, Targets::Functions), CallShape::Bare);
    ///
    /// let empty = Arguments::<Object>::new();
    /// assert_eq!(CallShape::of(&empty, Targets::Functions), CallShape::Parameterized);
    ///
    /// let keyword = Arguments::single(function).kwarg("times", Object::Int(2));
    /// assert_eq!(CallShape::of(&keyword, Targets::Functions), CallShape::Parameterized);
    /// ```
    pub fn of<V: Inspect>(arguments: &Arguments<V>, targets: Targets) -> Self {
        match arguments.as_single() {
            Some(candidate) if targets.accepts(candidate) => Self::Bare,
            _ => Self::Parameterized,
        }
    }
}

#[cfg(all(test, feature = "object"))]
mod tests {
    use super::*;
    use crate::object::{Class, Function, Object};
    use rstest::rstest;

    fn function() -> Object {
        Object::from(Function::new("f", |_| Ok(Object::None)))
    }

    fn class() -> Object {
        Object::from(Class::new("C"))
    }

    fn callable_instance() -> Object {
        Object::from(
            Class::new("Callable")
                .with_call(|_| Ok(Object::None))
                .instantiate(Arguments::new()),
        )
    }

    #[rstest]
    #[case(Targets::FunctionsOrClasses, function(), true)]
    #[case(Targets::FunctionsOrClasses, class(), true)]
    #[case(Targets::FunctionsOrClasses, callable_instance(), false)]
    #[case(Targets::FunctionsOrClasses, Object::None, false)]
    #[case(Targets::Functions, function(), true)]
    #[case(Targets::Functions, class(), false)]
    #[case(Targets::Functions, callable_instance(), false)]
    #[case(Targets::Classes, class(), true)]
    #[case(Targets::Classes, function(), false)]
    #[case(Targets::Classes, Object::from("C"), false)]
    fn test_accepts(#[case] targets: Targets, #[case] target: Object, #[case] expected: bool) {
        assert_eq!(targets.accepts(&target), expected);
    }

    #[rstest]
    #[case(Arguments::single(class()), Targets::Classes, CallShape::Bare)]
    #[case(Arguments::single(class()), Targets::Functions, CallShape::Parameterized)]
    #[case(Arguments::single(Object::Int(3)), Targets::FunctionsOrClasses, CallShape::Parameterized)]
    #[case(Arguments::new().arg(function()).arg(function()), Targets::Functions, CallShape::Parameterized)]
    #[case(Arguments::new().kwarg("target", function()), Targets::Functions, CallShape::Parameterized)]
    fn test_call_shape(#[case] arguments: Arguments<Object>, #[case] targets: Targets, #[case] expected: CallShape) {
        assert_eq!(CallShape::of(&arguments, targets), expected);
    }

    #[rstest]
    fn test_display_is_noun() {
        assert_eq!(Targets::FunctionsOrClasses.to_string(), "functions or classes");
    }
}

//! The parameter-optional decorator adapter.

use std::borrow::Cow;

use super::{CallShape, Targets};
use crate::Error;
use crate::functional::{Arguments, Inspect, Invoke, ensure_callable};

/// Identity metadata of a wrapped factory or decorator.
///
/// Captured once at wrap time and used for introspection and error messages
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    name: String,
    doc: Option<String>,
}

impl Metadata {
    /// Creates metadata from a name and optional documentation.
    pub fn new(name: impl Into<String>, doc: Option<String>) -> Self {
        Self {
            name: name.into(),
            doc,
        }
    }

    /// Captures the metadata of `value`.
    ///
    /// Values without a display name are named after their type.
    pub fn of<V: Inspect + ?Sized>(value: &V) -> Self {
        let name = value
            .display_name()
            .unwrap_or_else(|| value.type_name())
            .into_owned();
        Self {
            name,
            doc: value.doc().map(Cow::into_owned),
        }
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the documentation, if any.
    #[inline]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// Makes `factory` applicable to both functions and classes, with or
/// without arguments.
///
/// # Errors
///
/// Returns [`Error::InvalidType`] if `factory` is not callable.
///
/// # Examples
///
/// ```rust
/// use taipan::decorator::decorator;
/// use taipan::functional::Arguments;
/// use taipan::object::{Class, Function, Object};
///
/// // A factory returning a decorator that tags its target.
/// let tag = Object::from(Function::new("tag", |_| {
///     Ok(Object::from(Function::new("tagger", |arguments| {
///         match arguments.positional() {
///             [Object::Class(class)] => Ok(Object::from(
///                 class.clone().with_attribute("tagged", Object::Bool(true)),
///             )),
///             [other] => Ok(other.clone()),
///             _ => Ok(Object::None),
///         }
///     })))
/// }));
///
/// let tag = decorator(tag).unwrap();
/// assert_eq!(tag.name(), "tag");
///
/// // Bare application: `@tag`.
/// let class = Object::from(Class::new("Model"));
/// let decorated = tag.call(Arguments::single(class)).unwrap().into_decorated().unwrap();
/// assert_eq!(decorated.attribute("tagged"), Some(&Object::Bool(true)));
///
/// // Parameterized application: `@tag()`.
/// let inner = tag.call(Arguments::new()).unwrap().into_decorator().unwrap();
/// let decorated = inner.apply(Object::from(Class::new("Other"))).unwrap();
/// assert_eq!(decorated.attribute("tagged"), Some(&Object::Bool(true)));
/// ```
pub fn decorator<V: Invoke>(factory: V) -> Result<Adapted<V>, Error> {
    Adapted::wrap(factory, Targets::FunctionsOrClasses)
}

/// Makes `factory` applicable to functions only, with or without arguments.
///
/// # Errors
///
/// Returns [`Error::InvalidType`] if `factory` is not callable.
pub fn function_decorator<V: Invoke>(factory: V) -> Result<Adapted<V>, Error> {
    Adapted::wrap(factory, Targets::Functions)
}

/// Makes `factory` applicable to classes only, with or without arguments.
///
/// # Errors
///
/// Returns [`Error::InvalidType`] if `factory` is not callable.
pub fn class_decorator<V: Invoke>(factory: V) -> Result<Adapted<V>, Error> {
    Adapted::wrap(factory, Targets::Classes)
}

/// A decorator factory that can be applied bare or with arguments.
///
/// Created by [`decorator`], [`function_decorator`] or [`class_decorator`].
#[derive(Debug, Clone)]
pub struct Adapted<V> {
    factory: V,
    targets: Targets,
    metadata: Metadata,
}

impl<V: Invoke> Adapted<V> {
    fn wrap(factory: V, targets: Targets) -> Result<Self, Error> {
        let factory = ensure_callable(factory)?;
        let metadata = Metadata::of(&factory);
        tracing::debug!(decorator = metadata.name(), targets = %targets, "wrapped decorator factory");
        Ok(Self {
            factory,
            targets,
            metadata,
        })
    }

    /// Invokes the adapted decorator.
    ///
    /// A single positional argument that is a valid target, with no keyword
    /// arguments, is bare application: the factory is invoked without
    /// arguments and the resulting decorator is applied to the target right
    /// away. Any other invocation passes `arguments` to the factory and
    /// returns the resulting decorator, which checks its target before
    /// applying.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the factory or, for bare application, by
    /// the decorator.
    pub fn call(&self, arguments: Arguments<V>) -> Result<Applied<V>, Error> {
        let shape = CallShape::of(&arguments, self.targets);
        tracing::trace!(decorator = self.name(), ?shape, "resolved call shape");

        match shape {
            CallShape::Bare => match arguments.into_single() {
                Ok(target) => {
                    let actual = self.factory.invoke(Arguments::new())?;
                    actual.invoke(Arguments::single(target)).map(Applied::Decorated)
                }
                Err(arguments) => self.parameterized(arguments),
            },
            CallShape::Parameterized => self.parameterized(arguments),
        }
    }

    fn parameterized(&self, arguments: Arguments<V>) -> Result<Applied<V>, Error> {
        let actual = self.factory.invoke(arguments)?;
        Ok(Applied::Decorator(InnerDecorator::new(actual, self.targets)))
    }
}

impl<V> Adapted<V> {
    /// Returns the wrapped factory.
    #[inline]
    pub const fn factory(&self) -> &V {
        &self.factory
    }

    /// Returns the valid decoration targets.
    #[inline]
    pub const fn targets(&self) -> Targets {
        self.targets
    }

    /// Returns the factory's metadata.
    #[inline]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the factory's display name.
    #[inline]
    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    /// Returns the factory's documentation.
    #[inline]
    pub fn doc(&self) -> Option<&str> {
        self.metadata.doc()
    }
}

/// A decorator produced by parameterized application, which verifies its
/// target before applying.
#[derive(Debug, Clone)]
pub struct InnerDecorator<V> {
    decorator: V,
    targets: Targets,
    metadata: Metadata,
}

impl<V: Invoke> InnerDecorator<V> {
    fn new(decorator: V, targets: Targets) -> Self {
        let metadata = Metadata::of(&decorator);
        Self {
            decorator,
            targets,
            metadata,
        }
    }

    /// Applies the decorator to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`] if `target` is not a valid target, or any
    /// error raised by the decorator.
    pub fn apply(&self, target: V) -> Result<V, Error> {
        if !self.targets.accepts(&target) {
            return Err(Error::Type(format!(
                "@{} can only be applied to {}: got {} instead",
                self.metadata.name(),
                self.targets.noun(),
                target.type_name()
            )));
        }
        self.decorator.invoke(Arguments::single(target))
    }
}

impl<V> InnerDecorator<V> {
    /// Returns the decorator produced by the factory.
    #[inline]
    pub const fn decorator(&self) -> &V {
        &self.decorator
    }

    /// Returns the valid decoration targets.
    #[inline]
    pub const fn targets(&self) -> Targets {
        self.targets
    }

    /// Returns the decorator's display name.
    #[inline]
    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    /// Returns the decorator's documentation.
    #[inline]
    pub fn doc(&self) -> Option<&str> {
        self.metadata.doc()
    }
}

/// The result of invoking an [`Adapted`] decorator.
#[derive(Debug, Clone)]
pub enum Applied<V> {
    /// Bare application: the decorated target.
    Decorated(V),
    /// Parameterized application: the decorator to apply to a target.
    Decorator(InnerDecorator<V>),
}

impl<V> Applied<V> {
    /// Returns the call shape that produced this result.
    #[inline]
    pub const fn shape(&self) -> CallShape {
        match self {
            Self::Decorated(_) => CallShape::Bare,
            Self::Decorator(_) => CallShape::Parameterized,
        }
    }

    /// Returns the decorated target for bare application.
    pub fn into_decorated(self) -> Option<V> {
        match self {
            Self::Decorated(target) => Some(target),
            Self::Decorator(_) => None,
        }
    }

    /// Returns the inner decorator for parameterized application.
    pub fn into_decorator(self) -> Option<InnerDecorator<V>> {
        match self {
            Self::Decorated(_) => None,
            Self::Decorator(decorator) => Some(decorator),
        }
    }
}

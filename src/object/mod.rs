//! A minimal dynamic object model.
//!
//! [`Object`] is a ready-made value type implementing [`Inspect`] and
//! [`Invoke`], so that the decorator adapter in [`crate::decorator`] can be
//! used without writing a host value type first. It knows about functions,
//! classes and instances, which is all the adapter needs to tell decoration
//! targets apart.
//!
//! # Examples
//!
//! ```rust
//! use taipan::functional::{Arguments, Inspect, Invoke};
//! use taipan::object::{Class, Function, Object};
//!
//! let double = Function::new("double", |arguments| {
//!     match arguments.positional() {
//!         [Object::Int(value)] => Ok(Object::Int(value * 2)),
//!         _ => Ok(Object::None),
//!     }
//! });
//! let result = Object::from(double).invoke(Arguments::single(Object::Int(21)));
//! assert_eq!(result, Ok(Object::Int(42)));
//!
//! // Invoking a class creates an instance holding the construction arguments.
//! let point = Object::from(Class::new("Point"));
//! let instance = point.invoke(Arguments::new().kwarg("x", Object::Int(1))).unwrap();
//! assert_eq!(instance.type_name(), "Point");
//! ```

mod class;
mod function;

pub use class::{Class, Instance};
pub use function::Function;

use std::borrow::Cow;

use crate::Error;
use crate::functional::{Arguments, Countable, Inspect, Invoke, TargetKind};

/// A value of the dynamic object model.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// The absent value.
    None,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A string.
    Str(String),
    /// A list of values.
    List(Vec<Object>),
    /// A function.
    Function(Function),
    /// A class.
    Class(Class),
    /// An instance of a class.
    Instance(Instance),
}

impl Object {
    /// Returns the integer if this is an [`Object::Int`].
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string if this is an [`Object::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the function if this is an [`Object::Function`].
    #[inline]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the class if this is an [`Object::Class`].
    #[inline]
    pub const fn as_class(&self) -> Option<&Class> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Returns the instance if this is an [`Object::Instance`].
    #[inline]
    pub const fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Looks up an attribute on a function, a class, or an instance's class.
    pub fn attribute(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Function(function) => function.attribute(name),
            Self::Class(class) => class.attribute(name),
            Self::Instance(instance) => instance.class().attribute(name),
            _ => None,
        }
    }
}

impl Inspect for Object {
    fn target_kind(&self) -> TargetKind {
        match self {
            Self::Function(_) => TargetKind::Function,
            Self::Class(_) => TargetKind::Class,
            Self::Instance(instance) if instance.is_callable() => TargetKind::Callable,
            _ => TargetKind::Value,
        }
    }

    fn type_name(&self) -> Cow<'_, str> {
        match self {
            Self::None => Cow::Borrowed("NoneType"),
            Self::Bool(_) => Cow::Borrowed("bool"),
            Self::Int(_) => Cow::Borrowed("int"),
            Self::Str(_) => Cow::Borrowed("str"),
            Self::List(_) => Cow::Borrowed("list"),
            Self::Function(_) => Cow::Borrowed("function"),
            Self::Class(_) => Cow::Borrowed("type"),
            Self::Instance(instance) => Cow::Borrowed(instance.class().name()),
        }
    }

    fn display_name(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Function(function) => Some(Cow::Borrowed(function.name())),
            Self::Class(class) => Some(Cow::Borrowed(class.name())),
            _ => None,
        }
    }

    fn doc(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Function(function) => function.doc().map(Cow::Borrowed),
            Self::Class(class) => class.doc().map(Cow::Borrowed),
            _ => None,
        }
    }
}

impl Invoke for Object {
    fn invoke(&self, arguments: Arguments<Self>) -> Result<Self, Error> {
        match self {
            Self::Function(function) => function.call(arguments),
            Self::Class(class) => Ok(Self::Instance(class.instantiate(arguments))),
            Self::Instance(instance) => instance.call(arguments),
            _ => Err(Error::Type(format!(
                "'{}' object is not callable",
                self.type_name()
            ))),
        }
    }
}

impl Countable for Object {
    fn count(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(items.len()),
            Self::Str(text) => Some(text.chars().count()),
            _ => None,
        }
    }

    fn sequence_type_name(&self) -> Cow<'_, str> {
        self.type_name()
    }
}

#[cfg(feature = "testing")]
impl crate::testing::StringLike for Object {
    fn as_str_like(&self) -> Option<&str> {
        self.as_str()
    }

    fn describe(&self) -> String {
        match self {
            Self::Str(text) => format!("{text:?}"),
            other => format!("<{}>", other.type_name()),
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Self>> for Object {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Function> for Object {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Class> for Object {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<Instance> for Object {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

static_assertions::assert_impl_all!(Object: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use rstest::rstest;

    fn callable_class() -> Class {
        Class::new("Counter").with_call(|arguments| Ok(Object::Int(arguments.len() as i64)))
    }

    #[rstest]
    #[case(Object::None, TargetKind::Value, "NoneType")]
    #[case(Object::Bool(true), TargetKind::Value, "bool")]
    #[case(Object::Int(1), TargetKind::Value, "int")]
    #[case(Object::from("foo"), TargetKind::Value, "str")]
    #[case(Object::List(vec![]), TargetKind::Value, "list")]
    #[case(Object::from(Function::new("f", |_| Ok(Object::None))), TargetKind::Function, "function")]
    #[case(Object::from(Class::new("Foo")), TargetKind::Class, "type")]
    #[case(Object::from(Class::new("Foo").instantiate(Arguments::new())), TargetKind::Value, "Foo")]
    #[case(Object::from(callable_class().instantiate(Arguments::new())), TargetKind::Callable, "Counter")]
    fn test_inspect(#[case] object: Object, #[case] kind: TargetKind, #[case] type_name: &str) {
        assert_eq!(object.target_kind(), kind);
        assert_eq!(object.type_name(), type_name);
    }

    #[rstest]
    fn test_display_name_and_doc() {
        let function = Object::from(Function::new("greet", |_| Ok(Object::None)).with_doc("Says hello."));
        assert_eq!(function.display_name().as_deref(), Some("greet"));
        assert_eq!(function.doc().as_deref(), Some("Says hello."));

        let instance = Object::from(callable_class().instantiate(Arguments::new()));
        assert_eq!(instance.display_name(), None);
        assert_eq!(instance.doc(), None);
    }

    #[rstest]
    fn test_invoke_non_callable_is_type_error() {
        let error = Object::Int(42).invoke(Arguments::new()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Type);
        assert_eq!(error.to_string(), "'int' object is not callable");
    }

    #[rstest]
    fn test_invoke_callable_instance_receives_self_first() {
        let class = Class::new("Echo").with_call(|arguments| {
            Ok(Object::Bool(matches!(
                arguments.positional(),
                [Object::Instance(_), Object::Int(7)]
            )))
        });
        let instance = Object::from(class).invoke(Arguments::new()).unwrap();
        assert_eq!(instance.invoke(Arguments::single(Object::Int(7))), Ok(Object::Bool(true)));
    }

    #[rstest]
    fn test_count() {
        assert_eq!(Object::List(vec![Object::None, Object::None]).count(), Some(2));
        assert_eq!(Object::from("héllo").count(), Some(5));
        assert_eq!(Object::None.count(), None);
        assert_eq!(Object::None.sequence_type_name(), "NoneType");
    }

    #[rstest]
    fn test_attribute_lookup_through_instance() {
        let class = Class::new("Tagged").with_attribute("tag", Object::from("x"));
        let instance = Object::from(class.instantiate(Arguments::new()));
        assert_eq!(instance.attribute("tag"), Some(&Object::from("x")));
        assert_eq!(Object::Int(1).attribute("tag"), None);
    }
}

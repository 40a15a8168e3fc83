use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Function, Object};
use crate::Error;
use crate::functional::Arguments;

#[derive(Debug, Clone, PartialEq)]
struct ClassData {
    name: String,
    doc: Option<String>,
    attributes: BTreeMap<String, Object>,
    call: Option<Function>,
}

/// A class of the object model.
///
/// Invoking a class creates an [`Instance`] that keeps the construction
/// arguments. If the class has a call method, its instances are callable and
/// the method receives the instance as its first positional argument.
///
/// # Examples
///
/// ```rust
/// use taipan::functional::{Arguments, Invoke};
/// use taipan::object::{Class, Object};
///
/// // A class whose instances add their construction argument to the input.
/// let adder = Class::new("Adder").with_call(|arguments| {
///     match arguments.positional() {
///         [Object::Instance(this), Object::Int(value)] => {
///             let offset = this.arguments().positional()[0].as_int().unwrap_or(0);
///             Ok(Object::Int(value + offset))
///         }
///         _ => Ok(Object::None),
///     }
/// });
///
/// let add_two = Object::from(adder).invoke(Arguments::single(Object::Int(2))).unwrap();
/// assert_eq!(add_two.invoke(Arguments::single(Object::Int(40))), Ok(Object::Int(42)));
/// ```
#[derive(Debug, Clone)]
pub struct Class(Arc<ClassData>);

impl Class {
    /// Creates a class with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ClassData {
            name: name.into(),
            doc: None,
            attributes: BTreeMap::new(),
            call: None,
        }))
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(self, doc: impl Into<String>) -> Self {
        self.modify(|data| data.doc = Some(doc.into()))
    }

    /// Sets an attribute, replacing any previous value under `name`.
    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: Object) -> Self {
        self.modify(|data| {
            data.attributes.insert(name.into(), value);
        })
    }

    /// Sets the call method, making instances of this class callable.
    #[must_use]
    pub fn with_call<F>(self, body: F) -> Self
    where
        F: Fn(Arguments<Object>) -> Result<Object, Error> + Send + Sync + 'static,
    {
        self.modify(|data| data.call = Some(Function::new("__call__", body)))
    }

    /// Returns the name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the documentation, if any.
    #[inline]
    pub fn doc(&self) -> Option<&str> {
        self.0.doc.as_deref()
    }

    /// Returns the attribute stored under `name`.
    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&Object> {
        self.0.attributes.get(name)
    }

    /// Returns the call method, if any.
    #[inline]
    pub fn call_method(&self) -> Option<&Function> {
        self.0.call.as_ref()
    }

    /// Creates an instance from construction arguments.
    pub fn instantiate(&self, arguments: Arguments<Object>) -> Instance {
        Instance {
            class: self.clone(),
            arguments,
        }
    }

    fn modify(self, change: impl FnOnce(&mut ClassData)) -> Self {
        let mut data = Arc::unwrap_or_clone(self.0);
        change(&mut data);
        Self(Arc::new(data))
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

/// An instance of a [`Class`].
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: Class,
    arguments: Arguments<Object>,
}

impl Instance {
    /// Returns the class this instance was created from.
    #[inline]
    pub const fn class(&self) -> &Class {
        &self.class
    }

    /// Returns the arguments this instance was constructed with.
    #[inline]
    pub const fn arguments(&self) -> &Arguments<Object> {
        &self.arguments
    }

    /// Returns `true` if the class has a call method.
    #[inline]
    pub fn is_callable(&self) -> bool {
        self.class.call_method().is_some()
    }

    /// Calls the class's call method with this instance prepended to the
    /// positional arguments.
    ///
    /// # Errors
    ///
    /// Returns a type error if the class has no call method, or whatever
    /// error the call method returns.
    pub fn call(&self, arguments: Arguments<Object>) -> Result<Object, Error> {
        let Some(method) = self.class.call_method() else {
            return Err(Error::Type(format!(
                "'{}' object is not callable",
                self.class.name()
            )));
        };
        method.call(arguments.prepend(Object::Instance(self.clone())))
    }
}

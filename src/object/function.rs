use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::Object;
use crate::Error;
use crate::functional::Arguments;

type Body = dyn Fn(Arguments<Object>) -> Result<Object, Error> + Send + Sync;

/// A named function of the object model.
///
/// Cloning a function is cheap: the body is shared. Two functions are equal
/// when they share the same body and carry the same metadata.
///
/// # Examples
///
/// ```rust
/// use taipan::functional::Arguments;
/// use taipan::object::{Function, Object};
///
/// let answer = Function::new("answer", |_| Ok(Object::Int(42)))
///     .with_doc("Returns the answer.")
///     .with_attribute("cached", Object::Bool(true));
///
/// assert_eq!(answer.name(), "answer");
/// assert_eq!(answer.doc(), Some("Returns the answer."));
/// assert_eq!(answer.attribute("cached"), Some(&Object::Bool(true)));
/// assert_eq!(answer.call(Arguments::new()), Ok(Object::Int(42)));
/// ```
#[derive(Clone)]
pub struct Function {
    name: String,
    doc: Option<String>,
    attributes: BTreeMap<String, Object>,
    body: Arc<Body>,
}

impl Function {
    /// Creates a function from a name and a body.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Arguments<Object>) -> Result<Object, Error> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            doc: None,
            attributes: BTreeMap::new(),
            body: Arc::new(body),
        }
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Sets an attribute, replacing any previous value under `name`.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: Object) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Returns the name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the documentation, if any.
    #[inline]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Returns the attribute stored under `name`.
    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&Object> {
        self.attributes.get(name)
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Returns whatever error the body returns.
    #[inline]
    pub fn call(&self, arguments: Arguments<Object>) -> Result<Object, Error> {
        (self.body)(arguments)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
            && self.name == other.name
            && self.doc == other.doc
            && self.attributes == other.attributes
    }
}

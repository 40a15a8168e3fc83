//! Positional and keyword call arguments.

use std::collections::BTreeMap;

/// The arguments of a single invocation: ordered positional values followed
/// by named keyword values.
///
/// # Examples
///
/// ```rust
/// use taipan::functional::Arguments;
///
/// let arguments = Arguments::new().arg(1).arg(2).kwarg("verbose", 0);
/// assert_eq!(arguments.positional(), &[1, 2]);
/// assert_eq!(arguments.keyword("verbose"), Some(&0));
/// assert_eq!(arguments.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments<V> {
    positional: Vec<V>,
    keyword: BTreeMap<String, V>,
}

impl<V> Default for Arguments<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Arguments<V> {
    /// Creates an empty argument list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keyword: BTreeMap::new(),
        }
    }

    /// Creates an argument list with exactly one positional value.
    #[inline]
    pub fn single(value: V) -> Self {
        Self {
            positional: vec![value],
            keyword: BTreeMap::new(),
        }
    }

    /// Appends a positional value.
    #[must_use]
    pub fn arg(mut self, value: V) -> Self {
        self.positional.push(value);
        self
    }

    /// Sets a keyword value, replacing any previous value under `name`.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: V) -> Self {
        self.keyword.insert(name.into(), value);
        self
    }

    /// Inserts `value` as the first positional argument.
    #[must_use]
    pub fn prepend(mut self, value: V) -> Self {
        self.positional.insert(0, value);
        self
    }

    /// Returns the positional values.
    #[inline]
    pub fn positional(&self) -> &[V] {
        &self.positional
    }

    /// Returns the keyword value stored under `name`.
    #[inline]
    pub fn keyword(&self, name: &str) -> Option<&V> {
        self.keyword.get(name)
    }

    /// Iterates over the keyword values in name order.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &V)> {
        self.keyword.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the total number of positional and keyword values.
    #[inline]
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    /// Returns `true` if there are no arguments at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Returns the only argument if this is exactly one positional value
    /// and no keyword values.
    pub fn as_single(&self) -> Option<&V> {
        match (self.positional.as_slice(), self.keyword.is_empty()) {
            ([value], true) => Some(value),
            _ => None,
        }
    }

    /// Consumes the list, returning the only argument if [`as_single`]
    /// would return one; otherwise returns the list unchanged.
    ///
    /// [`as_single`]: Self::as_single
    ///
    /// # Errors
    ///
    /// Returns `self` when the list is not a single positional value.
    pub fn into_single(mut self) -> Result<V, Self> {
        if self.as_single().is_some() {
            self.positional.pop().ok_or(self)
        } else {
            Err(self)
        }
    }

    /// Splits the list into its positional and keyword parts.
    pub fn into_parts(self) -> (Vec<V>, BTreeMap<String, V>) {
        (self.positional, self.keyword)
    }
}

impl<V> From<Vec<V>> for Arguments<V> {
    fn from(positional: Vec<V>) -> Self {
        Self {
            positional,
            keyword: BTreeMap::new(),
        }
    }
}

impl<V> FromIterator<V> for Arguments<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

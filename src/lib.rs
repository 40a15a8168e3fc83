//! # taipan
//!
//! General-purpose utilities augmenting the standard library.
//!
//! ## Overview
//!
//! - **Decorators**: wrap a decorator factory so it can be applied either
//!   bare or with arguments, and restrict it to functions, classes or both
//! - **Functional helpers**: callable validation, argument-count checks,
//!   composition and logical combinators
//! - **Object model**: a minimal dynamic value type the decorators work on
//! - **Iterator recipes**: batching, cycling, interleaving, padding,
//!   deduplication and bulk advance
//! - **Testing**: prefix and suffix assertions
//!
//! ## Feature Flags
//!
//! - `functional`: Callable validation and combinators
//! - `object`: The [`object::Object`] value model
//! - `decorator`: The decorator adapter
//! - `generators`: Iterator recipes
//! - `testing`: String assertions
//! - `serde`: `Serialize`/`Deserialize` for plain data types
//! - `fxhash` / `ahash`: Faster hashers for the seen-set of `unique`
//! - `full`: Enable all features except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! use taipan::prelude::*;
//!
//! let batches: Vec<_> = (1..=5).batch(2).unwrap().collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! assert_starts_with!("tai", "taipan");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use taipan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Error, ErrorKind};

    #[cfg(feature = "functional")]
    pub use crate::functional::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;

    #[cfg(feature = "generators")]
    pub use crate::generators::Recipes;

    #[cfg(feature = "testing")]
    pub use crate::testing::*;
}

mod error;

pub use error::{Error, ErrorKind, InvalidTypeError};

#[cfg(feature = "functional")]
pub mod functional;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "generators")]
pub mod generators;

#[cfg(feature = "testing")]
pub mod testing;

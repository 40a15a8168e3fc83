//! Functional helpers and callable validation.
//!
//! # Overview
//!
//! - [`Inspect`] and [`Invoke`]: capability traits a dynamic value type
//!   implements so that it can be validated, classified and called
//! - [`TargetKind`]: the capability tag returned by [`Inspect::target_kind`]
//! - [`Arguments`]: positional and keyword call arguments
//! - [`ensure_callable`] and [`ensure_argcount`]: validation helpers
//! - [`identity`], [`constant`], [`compose`], [`flip`]: constant functions
//!   and composition
//! - [`or_`], [`and_`], [`not_`]: logical combinators over predicates
//! - [`is_function`], [`is_class`]: target predicates
//!
//! # Examples
//!
//! ```rust
//! use taipan::functional::{ensure_argcount, or_};
//!
//! let positive_or_zero = or_(|x: &i32| *x > 0, |x: &i32| *x == 0);
//! assert!(positive_or_zero(&0));
//!
//! assert!(ensure_argcount(&vec![1, 2, 3], None, Some(3)).is_ok());
//! ```

mod arguments;
mod callable;
mod combinators;
mod ensure;

pub use arguments::Arguments;
pub use callable::{Inspect, Invoke, TargetKind};
pub use combinators::{and_, compose, constant, flip, identity, is_class, is_function, not_, or_};
pub use ensure::{Countable, ensure_argcount, ensure_callable};

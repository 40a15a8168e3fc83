//! Decorators for decorators.
//!
//! A decorator factory is an invocable value that, given zero or more
//! arguments, returns a decorator: an invocable value taking one target and
//! returning its transformed version. Wrapping a factory with one of
//!
//! - [`decorator`]: targets may be functions or classes
//! - [`function_decorator`]: targets must be functions
//! - [`class_decorator`]: targets must be classes
//!
//! produces an [`Adapted`] decorator that can be used either bare (`@deco`)
//! or with arguments (`@deco(...)`). The call shape is decided by
//! [`CallShape::of`]: a single positional argument that is a valid target is
//! bare application, and everything else is parameterized application whose
//! result, an [`InnerDecorator`], verifies its target before applying.
//!
//! # Known Limitation
//!
//! A factory whose only configuration argument is itself a valid target
//! cannot be told apart from bare application. For example, a
//! [`function_decorator`] factory configured with a single callback function
//! will receive no arguments, and its decorator will be applied to the
//! callback.
//!
//! ```rust
//! use taipan::decorator::{CallShape, function_decorator};
//! use taipan::functional::Arguments;
//! use taipan::object::{Function, Object};
//!
//! let on_call = Object::from(Function::new("on_call", |arguments| {
//!     // Expects a callback argument, but receives none when used bare.
//!     let received = arguments.positional().len() as i64;
//!     Ok(Object::from(Function::new("hook", move |_| Ok(Object::Int(received)))))
//! }));
//! let on_call = function_decorator(on_call).unwrap();
//!
//! let callback = Object::from(Function::new("callback", |_| Ok(Object::None)));
//! let applied = on_call.call(Arguments::single(callback)).unwrap();
//! assert_eq!(applied.shape(), CallShape::Bare);
//! assert_eq!(applied.into_decorated(), Some(Object::Int(0)));
//! ```
//!
//! # Host Value Types
//!
//! The adapter works with any value type implementing
//! [`Invoke`](crate::functional::Invoke); [`Object`](crate::object::Object)
//! is the one shipped with this crate.

mod adapter;
mod targets;

pub use adapter::{
    Adapted, Applied, InnerDecorator, Metadata, class_decorator, decorator, function_decorator,
};
pub use targets::{CallShape, Targets};

static_assertions::assert_impl_all!(Targets: Send, Sync, Copy);
#[cfg(feature = "object")]
static_assertions::assert_impl_all!(
    Adapted<crate::object::Object>: Send,
    Sync,
    Clone
);
#[cfg(feature = "object")]
static_assertions::assert_impl_all!(
    InnerDecorator<crate::object::Object>: Send,
    Sync,
    Clone
);

//! Constant functions, composition and logical combinators.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: always returns the same value (K combinator)
//! - [`compose`]: right-to-left composition of two functions
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`or_`], [`and_`], [`not_`]: combine predicates
//! - [`is_function`], [`is_class`]: target predicates for [`Inspect`] values

use super::{Inspect, TargetKind};

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use taipan::functional::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use taipan::functional::constant;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two functions right-to-left: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use taipan::functional::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(compose(add_one, double)(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |argument| outer(inner(argument))
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use taipan::functional::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// assert_eq!(flip(subtract)(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Creates a predicate that holds when either given predicate holds.
///
/// The second predicate is not evaluated when the first one holds.
///
/// # Examples
///
/// ```
/// use taipan::functional::or_;
///
/// let is_small_or_even = or_(|x: &i32| *x < 3, |x: &i32| x % 2 == 0);
/// assert!(is_small_or_even(&1));
/// assert!(is_small_or_even(&4));
/// assert!(!is_small_or_even(&5));
/// ```
#[inline]
pub fn or_<T: ?Sized, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| first(value) || second(value)
}

/// Creates a predicate that holds when both given predicates hold.
///
/// The second predicate is not evaluated when the first one fails.
#[inline]
pub fn and_<T: ?Sized, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| first(value) && second(value)
}

/// Negates a predicate.
#[inline]
pub fn not_<T: ?Sized, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Returns `true` if `value` is a function.
#[inline]
pub fn is_function<V: Inspect + ?Sized>(value: &V) -> bool {
    value.target_kind() == TargetKind::Function
}

/// Returns `true` if `value` is a class-like construct.
#[inline]
pub fn is_class<V: Inspect + ?Sized>(value: &V) -> bool {
    value.target_kind() == TargetKind::Class
}

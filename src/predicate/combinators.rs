//! Core predicate trait and logical combinators
//!
//! Every table entry, custom guard and compiled guard filter is a
//! [`Predicate`], so they can be chained with `and`, `or` and `not`.

/// A composable predicate over values of type T.
///
/// # Example
///
/// ```rust
/// use type_guards::predicate::{kinds, PredicateExt};
/// use type_guards::{Predicate, Value};
///
/// let text_or_nothing = kinds::is_string.or(kinds::is_nullish);
/// assert!(text_or_nothing.check(&Value::from("a")));
/// assert!(text_or_nothing.check(&Value::Undefined));
/// assert!(!text_or_nothing.check(&Value::from(3)));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures and fn items
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types; nothing is boxed until a predicate is
/// stored in a table or a [`Callable`](crate::Callable).
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// ```rust
    /// use type_guards::predicate::{kinds, PredicateExt};
    /// use type_guards::{Predicate, Value};
    ///
    /// let present = kinds::is_nullish.not();
    /// assert!(present.check(&Value::from(0)));
    /// assert!(!present.check(&Value::Null));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

//! Numeric constraints checked once at construction.
//!
//! A [`Constrained<T, C>`] value is known to satisfy the constraint `C` for
//! as long as it exists, so code receiving one never re-validates it.
//!
//! Only [`NonNegative`] is provided, since it is the only invariant this crate
//! enforces on caller-supplied numbers (validation tolerances). Physical model
//! inputs are deliberately left unconstrained; see
//! [`heat_sink`](crate::models::thermal::heat_sink) for the failure policy.
//!
//! Additional invariants can be expressed by implementing [`Constraint<T>`]
//! for a zero-sized marker type.

mod non_negative;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;

/// A numeric invariant checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that satisfied the constraint `C` when it was constructed.
///
/// # Example
///
/// ```
/// use twine_heatsink::support::constraint::{Constrained, NonNegative};
///
/// let tol = Constrained::<_, NonNegative>::new(0.02).unwrap();
/// assert_eq!(tol.into_inner(), 0.02);
///
/// assert!(Constrained::<_, NonNegative>::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

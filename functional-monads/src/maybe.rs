use std::fmt;
use std::ops::Shr;

use crate::{Error, Nullable, Result};

/// An optional value: either `Just` a `T` or `Nothing`.
///
/// Every combinator consumes `self` and returns a fresh value, so a `Maybe`
/// is never modified in place.
///
/// `Display` renders `Just(v)` / `Nothing`. The derived `Debug` quotes string
/// and char payloads, so `{:?}` of `just("hi")` is `Just("hi")`.
///
/// ```rust
/// use functional_monads::{just, nothing};
///
/// let halve = |x: i32| if x % 2 == 0 { just(x / 2) } else { nothing() };
///
/// assert_eq!(just(8).bind(halve).bind(halve), just(2));
/// assert_eq!(just(6).bind(halve).bind(halve), nothing());
/// assert_eq!(nothing().map(|x: i32| x + 1).get_or_else(0), 0);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    Nothing,
    Just(T),
}

/// Wrap a value, unchecked.
///
/// This never inspects `value`, so `just(None::<i32>)` is a `Just(None)`. Use
/// [`try_just`] when the payload type has an absence marker that must be refused.
pub fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

pub fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

/// Wrap a value of a [`Nullable`] type, refusing its absence marker.
///
/// ```rust
/// use functional_monads::{try_just, Error};
///
/// assert!(try_just(Some(3)).is_ok());
/// assert!(matches!(try_just(None::<i32>), Err(Error::InvalidValue { .. })));
/// ```
pub fn try_just<T: Nullable>(value: T) -> Result<Maybe<T>> {
    if value.is_null() {
        #[cfg(feature = "trace")]
        tracing::debug!(
            type_name = std::any::type_name::<T>(),
            "rejected absent value in Just"
        );
        return Err(Error::invalid_value::<T>());
    }
    Ok(Maybe::Just(value))
}

impl<T> Maybe<T> {
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Apply `f` to the payload, if any. `f` is not guarded: if it panics, the panic
    /// reaches the caller. The result of `f` is wrapped as-is, without the absence
    /// check that [`try_just`] performs.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(x) => Maybe::Just(f(x)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Sequence a computation that may itself produce nothing. The result of `f`
    /// is returned as-is, without another layer of wrapping.
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(x) => f(x),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    pub fn get_or_else(self, default: T) -> T {
        match self {
            Maybe::Just(x) => x,
            Maybe::Nothing => default,
        }
    }

    /// Borrow the payload of a `Just`.
    pub fn just_value(&self) -> Option<&T> {
        match self {
            Maybe::Just(x) => Some(x),
            Maybe::Nothing => None,
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(x) => Maybe::Just(x),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

/// `m >> f` is shorthand for `m.bind(f)`.
impl<T, U, F> Shr<F> for Maybe<T>
where
    F: FnOnce(T) -> Maybe<U>,
{
    type Output = Maybe<U>;

    fn shr(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(x) => write!(f, "Just({})", x),
            Maybe::Nothing => write!(f, "Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Maybe::Just(x),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Just(x) => Some(x),
            Maybe::Nothing => None,
        }
    }
}

use std::fmt;

/// Exactly one of two values.
///
/// `Right` is conventionally the primary (success) channel and `Left` the
/// alternate (failure) one, but nothing beyond naming enforces that. Both
/// channels get the same set of combinators.
///
/// `Display` renders `Left(v)` / `Right(v)`. The derived `Debug` quotes string
/// and char payloads, so `{:?}` of `left("error")` is `Left("error")`.
///
/// ```rust
/// use functional_monads::{left, right, Either};
///
/// fn parse(s: &str) -> Either<String, i64> {
///     match s.parse() {
///         Ok(n) => right(n),
///         Err(_) => left(format!("not a number: {s}")),
///     }
/// }
///
/// assert_eq!(parse("41").map_right(|n| n + 1), right(42));
/// assert_eq!(parse("x").bind_right(|n| right(n * 2)).get_or_else_right(0), 0);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn map_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chain a computation over the `Right` channel. A `Left` short-circuits:
    /// it is returned with its payload untouched and `f` is never called.
    pub fn bind_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Mirror of [`Either::bind_right`] over the `Left` channel.
    pub fn bind_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn get_or_else_right(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(r) => r,
        }
    }

    pub fn get_or_else_left(self, default: L) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => default,
        }
    }

    /// Collapse both channels into a single `T`. Exactly one of `left_f` and
    /// `right_f` runs.
    pub fn fold<T, FL, FR>(self, left_f: FL, right_f: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_f(l),
            Either::Right(r) => right_f(r),
        }
    }

    pub fn left_value(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn right_value(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Swap the two channels.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}

// Ok is the primary channel, same as Right
impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(value: Either<L, R>) -> Self {
        match value {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

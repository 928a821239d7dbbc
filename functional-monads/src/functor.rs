use std::marker::PhantomData;

use crate::{Either, Maybe};

/// A container whose contents can be mapped over via `fmap`, without changing its shape.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type: we can write an
/// impl for `Maybe<usize>` but not for bare `Maybe`. So the convention is to implement it
/// for the container applied to the uninhabited [`PartiallyApplied`] marker, and to name the
/// fully applied form via the `Layer` associated type.
///
/// ```rust
/// use functional_monads::{just, Functor, Maybe, PartiallyApplied};
///
/// let mapped = Maybe::<PartiallyApplied>::fmap(just(1), |n| n + 10);
///
/// assert_eq!(mapped, just(11));
/// ```
///
/// Implementations must obey the functor laws: mapping the identity function is a no-op, and
/// mapping `f` then `g` is the same as mapping `|x| g(f(x))`.
pub trait Functor {
    /// the container type that is mapped over by `fmap`
    type Layer<X>;

    /// Apply some function `f` to each element inside a layer
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B>;
}

/// A [`Functor`] that also supports injecting a plain value and sequencing
/// container-producing computations.
///
/// Implementations must obey the monad laws, for all `a`, `m`, `f` and `g`:
/// - left identity: `bind(pure(a), f) == f(a)`
/// - right identity: `bind(m, pure) == m`
/// - associativity: `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`
pub trait Monad: Functor {
    fn pure<A>(a: A) -> Self::Layer<A>;

    fn bind<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B>;
}

/// An uninhabited type used to define [`Functor`] and [`Monad`] instances for
/// partially-applied types.
///
/// For example: the instance for `Maybe<A>` cannot be written over the
/// partially-applied type `Maybe`, so instead we write it over `Maybe<PartiallyApplied>`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartiallyApplied {}

impl Functor for Maybe<PartiallyApplied> {
    type Layer<X> = Maybe<X>;

    #[inline(always)]
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B> {
        input.map(f)
    }
}

impl Monad for Maybe<PartiallyApplied> {
    fn pure<A>(a: A) -> Self::Layer<A> {
        Maybe::Just(a)
    }

    #[inline(always)]
    fn bind<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B> {
        input.bind(f)
    }
}

// right-biased: Left is carried through untouched
impl<L> Functor for Either<L, PartiallyApplied> {
    type Layer<X> = Either<L, X>;

    #[inline(always)]
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B> {
        input.map_right(f)
    }
}

impl<L> Monad for Either<L, PartiallyApplied> {
    fn pure<A>(a: A) -> Self::Layer<A> {
        Either::Right(a)
    }

    #[inline(always)]
    fn bind<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B> {
        input.bind_right(f)
    }
}

/// The composition of two functors, mapping through both layers at once.
///
/// ```rust
/// use functional_monads::{just, right, Compose, Either, Functor, Maybe, PartiallyApplied};
///
/// type MaybeEither = Compose<Maybe<PartiallyApplied>, Either<String, PartiallyApplied>>;
///
/// let nested: Maybe<Either<String, u32>> = just(right(2));
/// assert_eq!(MaybeEither::fmap(nested, |n| n * 3), just(right(6)));
/// ```
pub struct Compose<F1, F2>(PhantomData<F1>, PhantomData<F2>);

impl<F1: Functor, F2: Functor> Functor for Compose<F1, F2> {
    type Layer<X> = F1::Layer<F2::Layer<X>>;

    #[allow(clippy::redundant_closure)] // this lint is wrong here
    fn fmap<A, B>(input: Self::Layer<A>, mut f: impl FnMut(A) -> B) -> Self::Layer<B> {
        F1::fmap(input, move |x| F2::fmap(x, |x| f(x)))
    }
}

//! Functor and monad laws, written once against the [`Functor`]/[`Monad`] traits so that
//! every instance can be checked by the same code.
use functional_monads::{Functor, Monad};

pub fn functor_identity<F, A>(fa: F::Layer<A>) -> bool
where
    F: Functor,
    F::Layer<A>: Clone + PartialEq,
{
    F::fmap::<A, A>(fa.clone(), |x| x) == fa
}

pub fn functor_composition<F, A, B, C>(
    fa: F::Layer<A>,
    mut f: impl FnMut(A) -> B,
    mut g: impl FnMut(B) -> C,
) -> bool
where
    F: Functor,
    F::Layer<A>: Clone,
    F::Layer<C>: PartialEq,
{
    let stepwise = F::fmap::<B, C>(F::fmap::<A, B>(fa.clone(), &mut f), &mut g);
    let fused = F::fmap::<A, C>(fa, |x| g(f(x)));
    stepwise == fused
}

pub fn left_identity<M, A, B>(a: A, mut f: impl FnMut(A) -> M::Layer<B>) -> bool
where
    M: Monad,
    A: Clone,
    M::Layer<B>: PartialEq,
{
    M::bind::<A, B>(M::pure::<A>(a.clone()), &mut f) == f(a)
}

pub fn right_identity<M, A>(m: M::Layer<A>) -> bool
where
    M: Monad,
    M::Layer<A>: Clone + PartialEq,
{
    M::bind::<A, A>(m.clone(), |x| M::pure::<A>(x)) == m
}

pub fn associativity<M, A, B, C>(
    m: M::Layer<A>,
    mut f: impl FnMut(A) -> M::Layer<B>,
    mut g: impl FnMut(B) -> M::Layer<C>,
) -> bool
where
    M: Monad,
    M::Layer<A>: Clone,
    M::Layer<C>: PartialEq,
{
    let nested_left = M::bind::<B, C>(M::bind::<A, B>(m.clone(), &mut f), &mut g);
    let nested_right = M::bind::<A, C>(m, |x| M::bind::<B, C>(f(x), &mut g));
    nested_left == nested_right
}

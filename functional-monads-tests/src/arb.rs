use functional_monads::{Either, Maybe};
use proptest::prelude::*;

/// Arbitrary `Maybe`, weighted towards `Just` so that chains of binds survive a few steps.
pub fn arb_maybe<S>(inner: S) -> impl Strategy<Value = Maybe<S::Value>>
where
    S: Strategy,
    S::Value: Clone,
{
    prop_oneof![
        1 => Just(Maybe::Nothing),
        3 => inner.prop_map(Maybe::Just),
    ]
}

pub fn arb_either<SL, SR>(l: SL, r: SR) -> impl Strategy<Value = Either<SL::Value, SR::Value>>
where
    SL: Strategy,
    SR: Strategy,
    SL::Value: Clone,
    SR::Value: Clone,
{
    prop_oneof![l.prop_map(Either::Left), r.prop_map(Either::Right),]
}

use crate::arb::arb_either;
use functional_monads::{left, right, Either};
use proptest::prelude::*;
use std::cell::Cell;

proptest! {
    #[test]
    fn variants_are_exclusive(e in arb_either(any::<u8>(), any::<u8>())) {
        prop_assert_ne!(e.is_left(), e.is_right());
    }

    #[test]
    fn left_short_circuits_bind_right(l in ".*") {
        let called = Cell::new(false);
        let out = left::<String, i32>(l.clone()).bind_right(|x| {
            called.set(true);
            right(x)
        });
        prop_assert_eq!(out, left(l));
        prop_assert!(!called.get());
    }

    #[test]
    fn right_short_circuits_bind_left(r in any::<i64>()) {
        let called = Cell::new(false);
        let out = right::<String, i64>(r).bind_left(|e| {
            called.set(true);
            left::<usize, i64>(e.len())
        });
        prop_assert_eq!(out, right(r));
        prop_assert!(!called.get());
    }

    #[test]
    fn fold_invokes_exactly_one_branch(e in arb_either(".*", any::<i32>())) {
        let lefts = Cell::new(0u32);
        let rights = Cell::new(0u32);
        let was_left = e.is_left();

        e.fold(|_| lefts.set(lefts.get() + 1), |_| rights.set(rights.get() + 1));

        prop_assert_eq!(lefts.get() + rights.get(), 1);
        prop_assert_eq!(lefts.get() == 1, was_left);
    }

    #[test]
    fn maps_leave_the_other_channel_alone(e in arb_either(any::<i32>(), any::<i32>())) {
        let by_right = e.map_right(|x| x.wrapping_add(1));
        let by_left = e.map_left(|x| x.wrapping_add(1));

        prop_assert_eq!(by_right.left_value(), e.left_value());
        prop_assert_eq!(by_left.right_value(), e.right_value());
    }

    #[test]
    fn get_or_else_defaults(e in arb_either(any::<i8>(), any::<u8>()), dl in any::<i8>(), dr in any::<u8>()) {
        match e {
            Either::Left(l) => {
                prop_assert_eq!(e.get_or_else_left(dl), l);
                prop_assert_eq!(e.get_or_else_right(dr), dr);
            }
            Either::Right(r) => {
                prop_assert_eq!(e.get_or_else_left(dl), dl);
                prop_assert_eq!(e.get_or_else_right(dr), r);
            }
        }
    }

    #[test]
    fn flip_is_an_involution(e in arb_either(".*", any::<u16>())) {
        prop_assert_eq!(e.clone().flip().flip(), e);
    }

    #[test]
    fn result_round_trip(e in arb_either(".*", any::<u16>())) {
        let res: Result<u16, String> = e.clone().into();
        prop_assert_eq!(res.is_ok(), e.is_right());
        prop_assert_eq!(Either::from(res), e);
    }
}

#[test]
fn scenarios() {
    assert_eq!(right::<&str, i32>(42).map_right(|x| x + 1), right(43));
    assert_eq!(left::<&str, i32>("err").map_right(|x| x + 1), left("err"));
    assert_eq!(
        right::<&str, i32>(42)
            .bind_right(|x| right(x + 1))
            .get_or_else_right(0),
        43
    );
    assert_eq!(
        left::<&str, i32>("err").fold(|e| format!("Error: {e}"), |v| format!("Success: {v}")),
        "Error: err"
    );
    assert_eq!(left::<&str, i32>("error").to_string(), "Left(error)");
    assert_eq!(right::<&str, i32>(42).to_string(), "Right(42)");
}

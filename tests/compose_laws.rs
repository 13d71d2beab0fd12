#![cfg(feature = "compose")]
//! Property-based tests for the combinator laws.
//!
//! - **Compose/pipe duality**: `pipe!(f, g, h)(x) == compose!(h, g, f)(x)`,
//!   and the same for the runtime `pipe_all`/`compose_all`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Curry arity**: every grouping of the same arguments gives the same result
//! - **Flip**: `flip(flip(f)) == f`

use funkit::compose::{Curry, compose_all, curry, flip, identity, pipe_all};
use funkit::{compose, curry2, curry3, flow, partial, pipe};
use proptest::prelude::*;

type Step = Box<dyn Fn(i64) -> i64>;

#[derive(Clone, Copy, Debug)]
enum Operation {
    Add(i64),
    Multiply(i64),
    Negate,
}

impl Operation {
    fn into_step(self) -> Step {
        match self {
            Self::Add(amount) => Box::new(move |x: i64| x.wrapping_add(amount)),
            Self::Multiply(factor) => Box::new(move |x: i64| x.wrapping_mul(factor)),
            Self::Negate => Box::new(|x: i64| x.wrapping_neg()),
        }
    }
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (-50_i64..50).prop_map(Operation::Add),
        (-5_i64..5).prop_map(Operation::Multiply),
        Just(Operation::Negate),
    ]
}

fn weigh(arguments: Vec<i64>) -> i64 {
    arguments
        .iter()
        .enumerate()
        .fold(0_i64, |total, (position, value)| {
            total.wrapping_mul(31).wrapping_add(value.wrapping_mul(position as i64 + 1))
        })
}

proptest! {
    #[test]
    fn pipe_all_is_reversed_compose_all(
        operations in prop::collection::vec(operation(), 0..8),
        input in -1000_i64..1000,
    ) {
        let piped = pipe_all(operations.iter().map(|operation| operation.into_step()));
        let composed = compose_all(operations.iter().rev().map(|operation| operation.into_step()));
        prop_assert_eq!(piped(input), composed(input));
    }

    #[test]
    fn pipe_macro_is_reversed_compose_macro(a in operation(), b in operation(), c in operation(), input in any::<i64>()) {
        let piped = pipe!(a.into_step(), b.into_step(), c.into_step());
        let composed = compose!(c.into_step(), b.into_step(), a.into_step());
        prop_assert_eq!(piped(input), composed(input));
        prop_assert_eq!(flow!(input, a.into_step(), b.into_step(), c.into_step()), piped(input));
    }

    #[test]
    fn compose_identity(f in operation(), input in any::<i64>()) {
        let left = compose!(identity, f.into_step());
        let right = compose!(f.into_step(), identity);
        let expected = f.into_step()(input);
        prop_assert_eq!(left(input), expected);
        prop_assert_eq!(right(input), expected);
    }

    #[test]
    fn compose_associativity(f in operation(), g in operation(), h in operation(), input in any::<i64>()) {
        let left = compose!(f.into_step(), compose!(g.into_step(), h.into_step()));
        let right = compose!(compose!(f.into_step(), g.into_step()), h.into_step());
        prop_assert_eq!(left(input), right(input));
    }

    #[test]
    fn curry_groupings_agree(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let expected = weigh(vec![a, b, c]);
        let weighted = curry(3, weigh);

        let one_at_a_time = weighted
            .apply([a]).unwrap()
            .apply([b]).unwrap()
            .apply([c]).unwrap();
        let two_then_one = weighted.apply([a, b]).unwrap().apply([c]).unwrap();
        let all_at_once = weighted.apply([a, b, c]).unwrap();
        let one_then_two = weighted.apply([a]).unwrap().apply([b, c]).unwrap();

        for result in [one_at_a_time, two_then_one, all_at_once, one_then_two] {
            prop_assert!(matches!(result, Curry::Complete(value) if value == expected));
        }
    }

    #[test]
    fn curry_macros_agree_with_direct_calls(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let add = |x: i64, y: i64| x.wrapping_add(y);
        let weigh3 = |x: i64, y: i64, z: i64| weigh(vec![x, y, z]);
        prop_assert_eq!(curry2!(add)(a)(b), add(a, b));
        prop_assert_eq!(curry3!(weigh3)(a)(b)(c), weigh3(a, b, c));
    }

    #[test]
    fn partial_fixes_any_position(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let weigh3 = |x: i64, y: i64, z: i64| weigh(vec![x, y, z]);
        prop_assert_eq!(partial!(weigh3, a, __, c)(b), weigh3(a, b, c));
        prop_assert_eq!(partial!(weigh3, __, b, __)(a, c), weigh3(a, b, c));
        prop_assert_eq!(funkit::compose::partial(weigh, vec![a])(vec![b, c]), weigh(vec![a, b, c]));
    }

    #[test]
    fn flip_twice_is_identity(a in any::<i64>(), b in any::<i64>()) {
        let subtract = |x: i64, y: i64| x.wrapping_sub(y);
        prop_assert_eq!(flip(subtract)(a, b), subtract(b, a));
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }
}

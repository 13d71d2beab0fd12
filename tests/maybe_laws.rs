#![cfg(feature = "control")]
//! Property-based tests for `Maybe`.
//!
//! - **Functor identity**: `m.map(|x| x) == m`
//! - **Functor composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
//! - **Monad laws**: left identity, right identity, associativity
//! - `Maybe` and `Option` agree on every combinator

use funkit::control::{Maybe, safe_divide};
use funkit::typeclass::{Functor, Monad};
use proptest::prelude::*;

fn maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn halve(value: i32) -> Maybe<i32> {
    if value % 2 == 0 { Maybe::of(value / 2) } else { Maybe::nothing() }
}

fn shrink(value: i32) -> Maybe<i32> {
    safe_divide(value, 3)
}

proptest! {
    #[test]
    fn functor_identity(m in maybe()) {
        prop_assert_eq!(m.map(|x| x), m);
        prop_assert_eq!(m.fmap(|x| x), m);
    }

    #[test]
    fn functor_composition(m in maybe()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(m.map(f).map(g), m.map(|x| g(f(x))));
    }

    #[test]
    fn monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::of(value).flat_map(halve), halve(value));
    }

    #[test]
    fn monad_right_identity(m in maybe()) {
        prop_assert_eq!(m.flat_map(Maybe::of), m);
    }

    #[test]
    fn monad_associativity(m in maybe()) {
        let left = m.flat_map(halve).flat_map(shrink);
        let right = m.flat_map(|x| halve(x).flat_map(shrink));
        prop_assert_eq!(left, right);
        prop_assert_eq!(Monad::flat_map(m, halve), m.flat_map(halve));
    }

    #[test]
    fn agrees_with_option(m in maybe(), fallback in any::<i32>()) {
        let option: Option<i32> = m.into();
        prop_assert_eq!(m.get_or_else(fallback), option.unwrap_or(fallback));
        prop_assert_eq!(m.filter(|x| x % 3 == 0).into_option(), option.filter(|x| x % 3 == 0));
        prop_assert_eq!(m.is_just(), option.is_some());
    }
}

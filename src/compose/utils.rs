//! Small combinators used as building blocks.

/// Returns its argument unchanged.
///
/// `compose!()` and `pipe!()` with no functions evaluate to `identity`, and
/// it is the unit of composition on both sides.
///
/// ```
/// use funkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields `value`.
///
/// ```
/// use funkit::compose::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T, U>(value: T) -> impl Fn(U) -> T
where
    T: Clone,
{
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// ```
/// use funkit::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, R, F>(function: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    fn identity_returns_input(#[case] input: i64) {
        assert_eq!(identity(input), input);
    }

    #[rstest]
    fn constant_ignores_input() {
        let answer = constant(String::from("answer"));
        assert_eq!(answer(1), "answer");
        assert_eq!(answer(2), "answer");
    }

    #[rstest]
    fn flip_twice_is_original() {
        let divide = |a: i32, b: i32| a / b;
        let twice = flip(flip(divide));
        assert_eq!(twice(10, 2), divide(10, 2));
    }
}

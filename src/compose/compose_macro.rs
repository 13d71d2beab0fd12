//! Composition macros and their runtime counterparts.
//!
//! The macros accept functions of different types (`A -> B`, `B -> C`, ...).
//! [`compose_all`] and [`pipe_all`] take a list whose length is only known
//! at runtime, so every function must be `T -> T`.

/// Composes functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// With no arguments it is [`identity`](crate::compose::identity).
///
/// ```
/// use funkit::compose;
///
/// let square = |x: i32| x * x;
/// let double = |x: i32| x * 2;
/// let add_one = |x: i32| x + 1;
///
/// assert_eq!(compose!(add_one, double, square)(3), 19);
/// assert_eq!(compose!()(3), 3);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}

/// Composes functions left to right: `pipe!(f, g, h)(x) == h(g(f(x)))`.
///
/// `pipe!(f, g, h)` behaves exactly like `compose!(h, g, f)`.
///
/// ```
/// use funkit::pipe;
///
/// let trim = |text: &str| text.trim().to_string();
/// let shout = |text: String| text.to_uppercase();
///
/// assert_eq!(pipe!(trim, shout)("  hi "), "HI");
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };
    ($function:expr $(,)?) => {
        $function
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::pipe!($($rest),+);
        move |input| rest(first(input))
    }};
}

/// Pushes a value through functions immediately, left to right.
///
/// `flow!(x, f, g)` is `pipe!(f, g)(x)` without building the pipeline.
///
/// ```
/// use funkit::flow;
///
/// assert_eq!(flow!(5, |x: i32| x * 2, |x: i32| x + 1), 11);
/// ```
#[macro_export]
macro_rules! flow {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $function:expr $(, $rest:expr)* $(,)?) => {
        $crate::flow!($function($value) $(, $rest)*)
    };
}

/// Composes a runtime list of `T -> T` functions right to left.
///
/// An empty list yields the identity function.
///
/// ```
/// use funkit::compose::compose_all;
///
/// let steps: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 2)];
/// assert_eq!(compose_all(steps)(5), 11);
/// ```
pub fn compose_all<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
    I: IntoIterator<Item = F>,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |value, function| function(value))
    }
}

/// Composes a runtime list of `T -> T` functions left to right.
///
/// An empty list yields the identity function.
pub fn pipe_all<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
    I: IntoIterator<Item = F>,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| functions.iter().fold(input, |value, function| function(value))
}

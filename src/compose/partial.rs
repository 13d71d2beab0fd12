//! Partial application.
//!
//! [`partial!`] fixes some arguments of a statically typed function. Every
//! `__` placeholder becomes a parameter of the returned closure, in order;
//! every other argument is evaluated once and cloned into each call.
//!
//! [`partial`] is the runtime form for functions over an argument list: the
//! fixed arguments are prepended to whatever the caller supplies. It never
//! tracks arity and never returns another partial.

/// Fixes arguments of a function, leaving `__` placeholders open.
///
/// `__` is matched as a literal token; do not import anything for it.
///
/// ```
/// use funkit::partial;
///
/// fn greet(greeting: &str, name: &str, punctuation: char) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello = partial!(greet, "Hello", __, '!');
/// assert_eq!(hello("Ada"), "Hello, Ada!");
///
/// let formal = partial!(greet, __, "Dr. Lovelace", __);
/// assert_eq!(formal("Good evening", '.'), "Good evening, Dr. Lovelace.");
/// ```
#[macro_export]
macro_rules! partial {
    // Each recursion step is a separate expansion, so the `argument` and
    // `fixed` identifiers it introduces are distinct bindings.
    (@collect ($function:expr) [$($bindings:tt)*] [$($parameters:ident)*] [$($calls:tt)*] __ , $($rest:tt)+) => {
        $crate::partial!(@collect ($function)
            [$($bindings)*]
            [$($parameters)* argument]
            [$($calls)* (argument)]
            $($rest)+)
    };
    (@collect ($function:expr) [$($bindings:tt)*] [$($parameters:ident)*] [$($calls:tt)*] __ $(,)?) => {
        $crate::partial!(@finish ($function)
            [$($bindings)*]
            [$($parameters)* argument]
            [$($calls)* (argument)])
    };
    (@collect ($function:expr) [$($bindings:tt)*] [$($parameters:ident)*] [$($calls:tt)*] $value:expr , $($rest:tt)+) => {
        $crate::partial!(@collect ($function)
            [$($bindings)* (fixed = $value)]
            [$($parameters)*]
            [$($calls)* (::std::clone::Clone::clone(&fixed))]
            $($rest)+)
    };
    (@collect ($function:expr) [$($bindings:tt)*] [$($parameters:ident)*] [$($calls:tt)*] $value:expr $(,)?) => {
        $crate::partial!(@finish ($function)
            [$($bindings)* (fixed = $value)]
            [$($parameters)*]
            [$($calls)* (::std::clone::Clone::clone(&fixed))])
    };
    (@finish ($function:expr) [$(($binding:ident = $value:expr))*] [$($parameter:ident)*] [$(($call:expr))*]) => {{
        let function = $function;
        $(let $binding = $value;)*
        move |$($parameter),*| function($($call),*)
    }};
    ($function:expr $(,)?) => {{
        let function = $function;
        move || function()
    }};
    ($function:expr, $($arguments:tt)+) => {
        $crate::partial!(@collect ($function) [] [] [] $($arguments)+)
    };
}

/// Prepends `fixed` to the arguments of every call.
///
/// ```
/// use funkit::compose::partial;
///
/// let join = |words: Vec<&str>| words.join(" ");
/// let greet = partial(join, vec!["hello"]);
/// assert_eq!(greet(vec!["big", "world"]), "hello big world");
/// assert_eq!(greet(vec![]), "hello");
/// ```
pub fn partial<A, R, F>(function: F, fixed: Vec<A>) -> impl Fn(Vec<A>) -> R
where
    A: Clone,
    F: Fn(Vec<A>) -> R,
{
    move |remaining| {
        let mut arguments = Vec::with_capacity(fixed.len() + remaining.len());
        arguments.extend(fixed.iter().cloned());
        arguments.extend(remaining);
        function(arguments)
    }
}

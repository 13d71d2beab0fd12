//! Currying.
//!
//! [`curry`] wraps a function over a homogeneous argument list together with
//! an explicit arity. Arguments may arrive in any grouping, so
//! `f(1)(2)(3)`, `f(1, 2)(3)` and `f(1, 2, 3)` all reach the wrapped
//! function as `[1, 2, 3]`. Supplying more arguments than the arity is
//! rejected with [`CombinatorError::TooManyArguments`] and the wrapped
//! function is not called.
//!
//! The `curry2!` .. `curry4!` macros cover the statically typed case: they
//! turn an N-ary function into N nested single-argument closures. Arguments
//! captured by an outer closure are cloned on every call of the inner one,
//! so partial applications can be reused.

use std::fmt;
use std::rc::Rc;

use super::error::CombinatorError;

/// A function waiting for the rest of its arguments.
pub struct Curried<A, R> {
    function: Rc<dyn Fn(Vec<A>) -> R>,
    arity: usize,
    collected: Vec<A>,
}

/// The outcome of applying arguments to a [`Curried`] function.
#[derive(Debug)]
pub enum Curry<A, R> {
    /// More arguments are needed.
    Pending(Curried<A, R>),
    /// The arity was reached and the function ran.
    Complete(R),
}

/// Curries `function` with the given arity.
///
/// ```
/// use funkit::compose::{curry, Curry};
///
/// let volume = curry(3, |sides: Vec<u32>| sides.iter().product::<u32>());
/// let base = volume.apply([2, 3]).unwrap();
/// assert!(matches!(base.apply([4]).unwrap(), Curry::Complete(24)));
/// ```
pub fn curry<A, R, F>(arity: usize, function: F) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + 'static,
{
    Curried {
        function: Rc::new(function),
        arity,
        collected: Vec::new(),
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Supplies the next group of arguments.
    ///
    /// Returns a new pending function while the collected count is below the
    /// arity, and the function's result once it is reached. `self` is left
    /// untouched, so a partial application can be applied again.
    ///
    /// # Errors
    ///
    /// [`CombinatorError::TooManyArguments`] when the arguments would take
    /// the collected count past the arity.
    pub fn apply<I>(&self, arguments: I) -> Result<Curry<A, R>, CombinatorError>
    where
        I: IntoIterator<Item = A>,
    {
        let mut collected = self.collected.clone();
        collected.extend(arguments);

        if collected.len() > self.arity {
            return Err(CombinatorError::TooManyArguments {
                arity: self.arity,
                supplied: collected.len(),
            });
        }

        if collected.len() == self.arity {
            tracing::trace!(arity = self.arity, "curried function saturated");
            return Ok(Curry::Complete((self.function)(collected)));
        }

        Ok(Curry::Pending(Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            collected,
        }))
    }
}

impl<A, R> Curried<A, R> {
    /// The declared arity.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many arguments are still missing.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.arity - self.collected.len()
    }

    /// The arguments collected so far.
    #[must_use]
    pub fn collected(&self) -> &[A] {
        &self.collected
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            collected: self.collected.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("collected", &self.collected)
            .finish_non_exhaustive()
    }
}

impl<A: Clone, R> Curry<A, R> {
    /// Applies more arguments to a pending function.
    ///
    /// Applying an empty group to a completed call returns it unchanged.
    ///
    /// # Errors
    ///
    /// [`CombinatorError::TooManyArguments`] when the arity would be exceeded,
    /// and [`CombinatorError::AlreadyComplete`] for any non-empty group given
    /// to a completed call.
    pub fn apply<I>(self, arguments: I) -> Result<Self, CombinatorError>
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Pending(curried) => curried.apply(arguments),
            Self::Complete(result) => {
                let extra = arguments.into_iter().count();
                if extra == 0 {
                    Ok(Self::Complete(result))
                } else {
                    Err(CombinatorError::AlreadyComplete { supplied: extra })
                }
            }
        }
    }
}

impl<A, R> Curry<A, R> {
    /// The result, if the function ran.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Pending(_) => None,
        }
    }

    /// The pending function, if more arguments are needed.
    pub fn pending(self) -> Option<Curried<A, R>> {
        match self {
            Self::Pending(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Returns `true` once the function has run.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Curries a two-argument function: `curry2!(f)(a)(b) == f(a, b)`.
///
/// ```
/// use funkit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = curry2!(add)(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function: `curry3!(f)(a)(b)(c) == f(a, b, c)`.
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a four-argument function: `curry4!(f)(a)(b)(c)(d) == f(a, b, c, d)`.
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn sum(arguments: Vec<i32>) -> i32 {
        arguments.iter().sum()
    }

    #[rstest]
    fn pending_until_arity_reached() {
        let curried = curry(3, sum);
        let pending = curried.apply([1]).unwrap().pending().unwrap();
        assert_eq!(pending.remaining(), 2);
        assert_eq!(pending.collected(), &[1]);
    }

    #[rstest]
    fn extra_arguments_are_rejected() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let curried = curry(2, move |arguments: Vec<i32>| {
            counter.set(counter.get() + 1);
            sum(arguments)
        });

        let error = curried.apply([1, 2, 3]).unwrap_err();
        assert_eq!(
            error,
            CombinatorError::TooManyArguments {
                arity: 2,
                supplied: 3
            }
        );
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn zero_arity_completes_on_empty_application() {
        let curried = curry(0, |_: Vec<()>| "done");
        assert_eq!(curried.apply([]).unwrap().complete(), Some("done"));
    }

    #[rstest]
    fn partial_applications_are_reusable() {
        let curried = curry(2, sum);
        let add_ten = curried.apply([10]).unwrap().pending().unwrap();
        assert_eq!(add_ten.apply([1]).unwrap().complete(), Some(11));
        assert_eq!(add_ten.apply([2]).unwrap().complete(), Some(12));
    }

    #[rstest]
    fn completed_call_rejects_more_arguments() {
        let done = curry(1, sum).apply([1]).unwrap();
        assert!(done.is_complete());
        let error = done.apply([2, 3]).unwrap_err();
        assert_eq!(error, CombinatorError::AlreadyComplete { supplied: 2 });
        assert_eq!(
            error.to_string(),
            "curried function already ran and received 2 more arguments"
        );
    }

    #[rstest]
    fn curry3_macro_matches_direct_call() {
        let join = |a: String, b: String, c: String| format!("{a}-{b}-{c}");
        let curried = curry3!(join);
        let with_prefix = curried("x".to_string());
        let with_middle = with_prefix("y".to_string());
        assert_eq!(with_middle("z".to_string()), "x-y-z");
        assert_eq!(with_middle("w".to_string()), "x-y-w");
    }

    #[rstest]
    fn curry4_macro_matches_direct_call() {
        let weighted = |a: i32, b: i32, c: i32, d: i32| a * 1000 + b * 100 + c * 10 + d;
        assert_eq!(curry4!(weighted)(1)(2)(3)(4), weighted(1, 2, 3, 4));
    }
}

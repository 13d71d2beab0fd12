//! Function combinators.
//!
//! - [`compose!`] / [`compose_all`]: right-to-left composition
//! - [`pipe!`] / [`pipe_all`]: left-to-right composition
//! - [`flow!`]: push a value through functions immediately
//! - [`curry`] / [`Curried`]: runtime-arity currying over a homogeneous
//!   argument list, accepting any number of arguments per step
//! - [`curry2!`], [`curry3!`], [`curry4!`]: compile-time currying of
//!   fixed-arity functions into nested closures
//! - [`partial!`] / [`partial`]: partial application
//! - [`memoize`] / [`memoize_by`] / [`Memoized`]: result caching
//! - [`identity`], [`constant`], [`flip`]
//!
//! Combinators never swallow panics raised by the functions they wrap.
//! Misuse that can be detected at runtime is reported as a
//! [`CombinatorError`].
//!
//! # Examples
//!
//! ```
//! use funkit::{compose, pipe};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(add_one, double)(5), 12);
//! ```
//!
//! ```
//! use funkit::compose::{curry, Curry};
//!
//! let sum3 = curry(3, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
//! let result = sum3.apply([1, 2]).unwrap().apply([3]).unwrap();
//! assert!(matches!(result, Curry::Complete(6)));
//! ```

mod compose_macro;
mod curry;
mod error;
mod memoize;
mod partial;
mod utils;

pub use compose_macro::{compose_all, pipe_all};
pub use curry::{Curried, Curry, curry};
pub use error::CombinatorError;
#[cfg(feature = "async")]
pub use memoize::{AsyncMemoized, memoize_async, memoize_async_by};
pub use memoize::{MemoizeConfig, Memoized, memoize, memoize_by};
pub use partial::partial;
pub use utils::{constant, flip, identity};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::flow;
pub use crate::partial;
pub use crate::pipe;

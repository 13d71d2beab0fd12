//! Type classes shared by the containers in this crate.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: mapping over a contained value
//! - [`Applicative`]: combining independent contained values
//! - [`Monad`]: sequencing dependent computations
//! - [`Semigroup`]: associative combination, used by
//!   [`Validation`](crate::validation::Validation) to accumulate errors
//!
//! [`Maybe`](crate::control::Maybe) is a `Monad`. `Validation` is only an
//! `Applicative`: its `map2` keeps the errors of both sides, which a lawful
//! `flat_map` could not do.
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Applicative, Semigroup};
//!
//! assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
//! assert_eq!(vec![1].combine(vec![2, 3]), vec![1, 2, 3]);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::Semigroup;

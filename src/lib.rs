//! # funkit
//!
//! A small functional data toolkit: function combinators, an optional-value
//! container, error-accumulating validation and lenses for immutable updates
//! of nested data.
//!
//! ## Overview
//!
//! - **Combinators**: `compose!`, `pipe!`, `flow!`, `partial!`, `curry`,
//!   `curry2!`..`curry4!`, `memoize`
//! - **Maybe**: `Maybe<T>` plus `safe_*` operations that return it instead of
//!   failing
//! - **Validation**: `Validation<E, T>`, which keeps every error, and `Rule`
//!   combinators (`all`, `any`, `object`, `array_of`, `optional`)
//! - **Optics**: the `Lens` trait, struct field lenses and `prop`/`index`/`path`
//!   lenses over [`Value`](value::Value)
//! - **Type classes**: `Functor`, `Applicative`, `Monad`, `Semigroup`
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits
//! - `compose`: function combinators and memoization
//! - `control`: `Maybe` and the safe operations
//! - `validation`: `Validation` and rules
//! - `optics`: lenses
//! - `async`: `AsyncMemoized`
//! - `serde`: `Serialize`/`Deserialize` for the containers and `Value`
//! - `fxhash`: use `rustc-hash` in memo caches
//! - `full`: everything except `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let form = Value::object([("name", ""), ("email", "bad")]);
//! let checked = object([
//!     ("name", all([rules::required()])),
//!     ("email", all([rules::required(), rules::email()])),
//! ])
//! .check(&form);
//!
//! assert_eq!(checked.errors().map(ValidationErrors::len), Some(2));
//!
//! let fixed = path(["email"]).set(form, Value::from("ada@example.com"));
//! assert_eq!(safe_get(&fixed, "email"), Maybe::of(Value::from("ada@example.com")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Commonly used types, traits, functions and macros.
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::value::{Value, ValueError};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::{
        CombinatorError, Curried, Curry, MemoizeConfig, Memoized, compose_all, constant, curry,
        flip, identity, memoize, memoize_by, partial, pipe_all,
    };

    #[cfg(feature = "compose")]
    pub use crate::{compose, curry2, curry3, curry4, flow, pipe};

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "validation")]
    pub use crate::validation::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::{FunctionLens, Lens, PathKey, index, path, path_str, prop};

    #[cfg(feature = "optics")]
    pub use crate::lens;
}

pub mod value;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "validation")]
pub mod validation;

#[cfg(feature = "optics")]
pub mod optics;

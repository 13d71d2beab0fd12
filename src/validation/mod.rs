//! Error-accumulating validation.
//!
//! [`Validation`] holds either a value or a non-empty list of errors.
//! Independent checks combine with [`Validation::zip`], [`Validation::map2`]
//! or the [`Rule`] combinators ([`all`], [`any`], [`object`], [`array_of`],
//! [`optional`]); none of them stop at the first failure.
//!
//! # Examples
//!
//! ```rust
//! use funkit::validation::{all, array_of, object, rules};
//! use funkit::value::Value;
//!
//! let students = array_of(
//!     object([
//!         ("name", all([rules::required(), rules::is_string()])),
//!         ("grade", rules::range(0.0, 100.0)),
//!     ]),
//!     "students",
//! );
//!
//! let input = Value::array([
//!     Value::object([("name", Value::from("Ada")), ("grade", Value::from(91))]),
//!     Value::object([("name", Value::from("")), ("grade", Value::from(120))]),
//! ]);
//!
//! let errors = students.check(&input).get().unwrap_err();
//! assert_eq!(
//!     errors.into_vec(),
//!     vec![
//!         "students[1]: name is required",
//!         "students[1]: grade must be between 0 and 100",
//!     ]
//! );
//! ```

mod errors;
mod rule;
pub mod rules;
mod validated;

pub use errors::ValidationErrors;
pub use rule::{Absent, Rule, all, any, array_of, field, object, optional};
pub use validated::Validation;

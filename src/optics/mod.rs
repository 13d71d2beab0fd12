//! Lenses for reading and updating nested data without mutation.
//!
//! - [`Lens`]: the trait, with `get`, `set`, `over` and `compose`
//! - [`FunctionLens`] and the [`lens!`](crate::lens) macro for struct fields
//! - [`prop`], [`index`] and [`path`] for [`Value`](crate::value::Value)
//!   objects and arrays
//!
//! # Example
//!
//! ```
//! use funkit::optics::{self, Lens, path_str, prop};
//! use funkit::value::Value;
//!
//! let state = Value::parse(r#"{"preferences": {"theme": "light"}, "user": {"name": "Ada"}}"#)
//!     .unwrap();
//!
//! let theme = path_str("preferences.theme");
//! let dark = optics::set(&theme, Value::from("dark"), state.clone());
//!
//! assert_eq!(optics::get(&theme, &dark), &Value::from("dark"));
//! assert_eq!(optics::get(&theme, &state), &Value::from("light"));
//! assert!(prop("user").get(&dark).same_ref(prop("user").get(&state)));
//! ```

mod lens;
mod value_lens;

pub use lens::{ComposedLens, FunctionLens, Lens, compose, get, over, set};
pub use value_lens::{IndexLens, PathKey, PathLens, PropLens, index, path, path_str, prop};

//! Optional values.
//!
//! - [`Maybe`]: a present-or-absent value
//! - Safe operations returning `Maybe` instead of failing:
//!   [`safe_get`], [`safe_divide`], [`safe_head`], [`safe_last`],
//!   [`safe_nth`], [`safe_parse_int`], [`safe_parse_float`],
//!   [`safe_parse_json`]
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{safe_divide, safe_parse_int, Maybe};
//!
//! let average = safe_parse_int("90")
//!     .flat_map(|total| safe_divide(total, 3))
//!     .get_or_else(0);
//! assert_eq!(average, 30);
//! ```

mod maybe;
mod safe;

pub use maybe::Maybe;
pub use safe::{
    CheckedDivide, safe_divide, safe_get, safe_head, safe_last, safe_nth, safe_parse_float,
    safe_parse_int, safe_parse_json,
};

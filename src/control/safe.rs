//! Operations that return [`Maybe`] instead of failing.

use crate::value::Value;

use super::maybe::Maybe;

/// Reads a dot-separated path such as `"user.address.city"`.
///
/// Object segments are property names; on arrays, a segment must be a
/// decimal index. The lookup yields `Nothing` at the first segment that does
/// not exist, and also when the value found is `undefined` or `null`. An
/// empty path returns the value itself.
///
/// ```rust
/// use funkit::control::safe_get;
/// use funkit::value::Value;
///
/// let data = Value::from_json(serde_json::json!({"a": {"b": {"c": 1}}}));
/// assert_eq!(safe_get(&data, "a.b.c").get_or_else(Value::from(-1)), Value::from(1));
/// assert_eq!(safe_get(&data, "a.x.c").get_or_else(Value::from(-1)), Value::from(-1));
/// ```
pub fn safe_get(value: &Value, path: &str) -> Maybe<Value> {
    let found = if path.is_empty() {
        Some(value)
    } else {
        path.split('.').try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(elements) => segment
                .parse::<usize>()
                .ok()
                .and_then(|position| elements.get(position)),
            _ => None,
        })
    };

    match found {
        Some(Value::Undefined | Value::Null) | None => Maybe::Nothing,
        Some(found) => Maybe::Just(found.clone()),
    }
}

/// Division that reports an impossible quotient as `None`.
pub trait CheckedDivide: Sized {
    /// Divides `self` by `divisor`.
    fn checked_divide(self, divisor: Self) -> Option<Self>;
}

macro_rules! impl_checked_divide_integer {
    ($($integer:ty),*) => {
        $(
            impl CheckedDivide for $integer {
                #[inline]
                fn checked_divide(self, divisor: Self) -> Option<Self> {
                    self.checked_div(divisor)
                }
            }
        )*
    };
}

macro_rules! impl_checked_divide_float {
    ($($float:ty),*) => {
        $(
            impl CheckedDivide for $float {
                #[inline]
                fn checked_divide(self, divisor: Self) -> Option<Self> {
                    (divisor != 0.0).then(|| self / divisor)
                }
            }
        )*
    };
}

impl_checked_divide_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_checked_divide_float!(f32, f64);

/// Divides, yielding `Nothing` for a zero divisor.
///
/// Integer division that would overflow (`i32::MIN / -1`) is also `Nothing`.
///
/// ```rust
/// use funkit::control::safe_divide;
///
/// assert_eq!(safe_divide(10, 2).get_or_else(0), 5);
/// assert_eq!(safe_divide(10, 0).get_or_else(0), 0);
/// ```
#[inline]
pub fn safe_divide<T: CheckedDivide>(dividend: T, divisor: T) -> Maybe<T> {
    dividend.checked_divide(divisor).into()
}

/// The first element of a slice.
#[inline]
pub fn safe_head<T>(items: &[T]) -> Maybe<&T> {
    items.first().into()
}

/// The last element of a slice.
#[inline]
pub fn safe_last<T>(items: &[T]) -> Maybe<&T> {
    items.last().into()
}

/// The element at `position`, or `Nothing` when out of range.
#[inline]
pub fn safe_nth<T>(items: &[T], position: usize) -> Maybe<&T> {
    items.get(position).into()
}

/// Parses a base-10 integer, ignoring surrounding whitespace.
///
/// The rest of the text must be a complete integer: `"42abc"` is `Nothing`.
///
/// ```rust
/// use funkit::control::{safe_parse_int, Maybe};
///
/// assert_eq!(safe_parse_int(" 42 "), Maybe::of(42));
/// assert_eq!(safe_parse_int("forty-two"), Maybe::nothing());
/// ```
pub fn safe_parse_int(text: &str) -> Maybe<i64> {
    text.trim().parse::<i64>().ok().into()
}

/// Parses a finite floating-point number, ignoring surrounding whitespace.
pub fn safe_parse_float(text: &str) -> Maybe<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .into()
}

/// Parses JSON text into a [`Value`].
///
/// ```rust
/// use funkit::control::safe_parse_json;
///
/// assert!(safe_parse_json(r#"{"ok": true}"#).is_just());
/// assert!(safe_parse_json("{oops").is_nothing());
/// ```
pub fn safe_parse_json(text: &str) -> Maybe<Value> {
    Value::parse(text).ok().into()
}

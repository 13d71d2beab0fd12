//! Dynamic, JSON-like values with structurally shared containers.
//!
//! [`Value`] is the data model for the dynamic parts of the toolkit: dotted
//! path lookups ([`safe_get`](crate::control::safe_get)), the [`prop`] /
//! [`index`] / [`path`] lenses and the object/array validators.
//!
//! Arrays and objects live behind an [`Arc`]. Cloning a `Value` is therefore
//! cheap, and a shallow copy of a container keeps every child it does not
//! replace pointer-equal to the original. [`Value::same_ref`] exposes that
//! identity so consumers can do cheap change detection.
//!
//! [`prop`]: crate::optics::prop
//! [`index`]: crate::optics::index
//! [`path`]: crate::optics::path
//!
//! # Examples
//!
//! ```rust
//! use funkit::value::Value;
//!
//! let value = Value::from_json(serde_json::json!({"user": {"name": "Ada"}}));
//! assert_eq!(value.get("user").and_then(|user| user.get("name")), Some(&Value::from("Ada")));
//! assert!(value.get("missing").is_none());
//! ```

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;
use static_assertions::assert_impl_all;
use thiserror::Error;

/// The map type backing [`Value::Object`]. Keys keep insertion order.
pub type Map = IndexMap<String, Value>;

/// The shared `Undefined` returned by lookups that find nothing.
pub static UNDEFINED: Value = Value::Undefined;

/// A dynamic value.
///
/// `Undefined` marks a missing slot (a property that does not exist), while
/// `Null` is an explicit empty value. Only `Undefined` is produced by failed
/// lookups.
///
/// An object entry holding `Undefined` is the same as no entry: equality and
/// hashing skip such entries, and [`Value::to_json`] drops them. Object
/// equality ignores key order.
#[derive(Clone, Default)]
pub enum Value {
    /// No value at all.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. All numbers are `f64`, as in JSON.
    Number(f64),
    /// An immutable string.
    String(Arc<str>),
    /// An array with a shared backing vector.
    Array(Arc<Vec<Value>>),
    /// An object with a shared backing map.
    Object(Arc<Map>),
}

assert_impl_all!(Value: Send, Sync, Clone);

/// Errors raised when a [`Value`] cannot be represented as JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// A top-level `Undefined` has no JSON form.
    #[error("undefined has no JSON representation")]
    Undefined,
    /// JSON numbers must be finite.
    #[error("number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

impl Value {
    /// Builds an object from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(Arc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Builds an array from values.
    pub fn array<V, I>(elements: I) -> Self
    where
        V: Into<Self>,
        I: IntoIterator<Item = V>,
    {
        Self::Array(Arc::new(elements.into_iter().map(Into::into).collect()))
    }

    /// An empty object.
    #[must_use]
    pub fn empty_object() -> Self {
        Self::Object(Arc::new(Map::new()))
    }

    /// Converts a `serde_json::Value`.
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        Self::from(json)
    }

    /// Parses JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `text` is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<serde_json::Value>(text).map(Self::from)
    }

    /// Converts into a `serde_json::Value`.
    ///
    /// `Undefined` object entries are dropped and `Undefined` array elements
    /// become `null`.
    ///
    /// # Errors
    ///
    /// [`ValueError::Undefined`] for a top-level `Undefined`, and
    /// [`ValueError::NonFiniteNumber`] for NaN or infinite numbers.
    pub fn to_json(&self) -> Result<serde_json::Value, ValueError> {
        match self {
            Self::Undefined => Err(ValueError::Undefined),
            Self::Null => Ok(serde_json::Value::Null),
            Self::Bool(flag) => Ok(serde_json::Value::Bool(*flag)),
            Self::Number(number) => number_to_json(*number),
            Self::String(text) => Ok(serde_json::Value::String(text.to_string())),
            Self::Array(elements) => elements
                .iter()
                .map(|element| match element {
                    Self::Undefined => Ok(serde_json::Value::Null),
                    other => other.to_json(),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(serde_json::Value::Array),
            Self::Object(map) => map
                .iter()
                .filter(|(_, value)| !value.is_undefined())
                .map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
                .collect::<Result<serde_json::Map<_, _>, _>>()
                .map(serde_json::Value::Object),
        }
    }

    /// Returns `true` for `Undefined`.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    /// Returns the map, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map.as_ref()),
            _ => None,
        }
    }

    /// Looks up an object property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Looks up an array element.
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<&Self> {
        self.as_array().and_then(|elements| elements.get(position))
    }

    /// The JavaScript-style type tag, used in validation messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` when both values share the same allocation.
    ///
    /// Scalars have no allocation and compare by value; strings, arrays and
    /// objects compare by pointer.
    #[must_use]
    pub fn same_ref(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(left), Self::String(right)) => Arc::ptr_eq(left, right),
            (Self::Array(left), Self::Array(right)) => Arc::ptr_eq(left, right),
            (Self::Object(left), Self::Object(right)) => Arc::ptr_eq(left, right),
            (Self::String(_) | Self::Array(_) | Self::Object(_), _)
            | (_, Self::String(_) | Self::Array(_) | Self::Object(_)) => false,
            (left, right) => left == right,
        }
    }
}

// Integral values keep an integer representation so they print without ".0".
#[allow(clippy::cast_possible_truncation)]
fn number_to_json(number: f64) -> Result<serde_json::Value, ValueError> {
    if number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 {
        return Ok(serde_json::Value::from(number as i64));
    }
    serde_json::Number::from_f64(number)
        .map(serde_json::Value::Number)
        .ok_or(ValueError::NonFiniteNumber(number))
}

// =============================================================================
// Equality and hashing
// =============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            // NaN equals NaN so that Value can be a lawful Eq/Hash key.
            (Self::Number(left), Self::Number(right)) => {
                left == right || (left.is_nan() && right.is_nan())
            }
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => Arc::ptr_eq(left, right) || left == right,
            (Self::Object(left), Self::Object(right)) => {
                Arc::ptr_eq(left, right) || objects_equal(left, right)
            }
            _ => false,
        }
    }
}

fn defined_entries(map: &Map) -> impl Iterator<Item = (&String, &Value)> {
    map.iter().filter(|(_, value)| !value.is_undefined())
}

fn objects_equal(left: &Map, right: &Map) -> bool {
    defined_entries(left).count() == defined_entries(right).count()
        && defined_entries(left).all(|(key, value)| right.get(key) == Some(value))
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Bool(flag) => flag.hash(state),
            Self::Number(number) => {
                let canonical = if number.is_nan() {
                    f64::NAN
                } else if *number == 0.0 {
                    0.0
                } else {
                    *number
                };
                canonical.to_bits().hash(state);
            }
            Self::String(text) => text.hash(state),
            Self::Array(elements) => elements.hash(state),
            // Entry hashes are summed so the result does not depend on key order.
            Self::Object(map) => {
                let mut count = 0_usize;
                let mut combined = 0_u64;
                for (key, value) in defined_entries(map) {
                    let mut entry = DefaultHasher::new();
                    key.hash(&mut entry);
                    value.hash(&mut entry);
                    combined = combined.wrapping_add(entry.finish());
                    count += 1;
                }
                count.hash(state);
                combined.hash(state);
            }
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("Undefined"),
            Self::Null => formatter.write_str("Null"),
            Self::Bool(flag) => formatter.debug_tuple("Bool").field(flag).finish(),
            Self::Number(number) => formatter.debug_tuple("Number").field(number).finish(),
            Self::String(text) => formatter.debug_tuple("String").field(text).finish(),
            Self::Array(elements) => formatter.debug_list().entries(elements.iter()).finish(),
            Self::Object(map) => formatter.debug_map().entries(map.iter()).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Number(number) if !number.is_finite() => write!(formatter, "{number}"),
            other => match other.to_json() {
                Ok(json) => write!(formatter, "{json}"),
                Err(_) => formatter.write_str("<unrepresentable>"),
            },
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(text) => Self::String(text.into()),
            serde_json::Value::Array(elements) => Self::array(elements),
            serde_json::Value::Object(map) => Self::object(map),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Value {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(number: $integer) -> Self {
                    Self::Number(number as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32);

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Arc::new(elements))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Object(Arc::new(map))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error;
        let json = self.to_json().map_err(S::Error::custom)?;
        serde::Serialize::serialize(&json, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <serde_json::Value as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

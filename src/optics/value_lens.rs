//! Lenses over [`Value`] objects and arrays.
//!
//! Setters copy only the containers along the focused path
//! (`Arc::make_mut`); every other child keeps pointing at the same
//! allocation as before. Reading a missing slot yields `Undefined`, and
//! writing through one creates it: a new object under [`prop`], a new array
//! under [`index`], padded with `Undefined` up to the position.
//!
//! Writing `Undefined` removes a property. Past the end of an array, or
//! through a missing container, writing `Undefined` changes nothing, so
//! `set(s, get(s)) == s` holds everywhere.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::trace;

use super::lens::Lens;
use crate::value::{UNDEFINED, Value};

fn read_prop<'a>(source: &'a Value, name: &str) -> &'a Value {
    source.get(name).unwrap_or(&UNDEFINED)
}

fn write_prop(mut source: Value, name: &str, value: Value) -> Value {
    if value.is_undefined() {
        if let Value::Object(entries) = &mut source
            && entries.contains_key(name)
        {
            Arc::make_mut(entries).shift_remove(name);
        }
        return source;
    }

    if !matches!(source, Value::Object(_)) {
        trace!(property = name, replaced = source.type_name(), "materializing object");
        source = Value::empty_object();
    }
    if let Value::Object(entries) = &mut source {
        Arc::make_mut(entries).insert(name.to_owned(), value);
    }
    source
}

fn read_index(source: &Value, position: usize) -> &Value {
    source.get_index(position).unwrap_or(&UNDEFINED)
}

fn write_index(mut source: Value, position: usize, value: Value) -> Value {
    if value.is_undefined() && source.get_index(position).is_none() {
        return source;
    }

    if !matches!(source, Value::Array(_)) {
        trace!(position, replaced = source.type_name(), "materializing array");
        source = Value::Array(Arc::default());
    }
    if let Value::Array(elements) = &mut source {
        let elements = Arc::make_mut(elements);
        if position >= elements.len() {
            trace!(position, length = elements.len(), "padding array");
            elements.resize(position + 1, Value::Undefined);
        }
        elements[position] = value;
    }
    source
}

// =============================================================================
// prop / index
// =============================================================================

/// Focuses on one property of an object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropLens {
    name: String,
}

/// A lens on the property `name`.
///
/// ```
/// use funkit::optics::{Lens, prop};
/// use funkit::value::Value;
///
/// let user = Value::object([("name", "Ada")]);
/// assert_eq!(prop("name").get(&user), &Value::from("Ada"));
/// assert!(prop("age").get(&user).is_undefined());
/// ```
pub fn prop(name: impl Into<String>) -> PropLens {
    PropLens { name: name.into() }
}

impl PropLens {
    /// The focused property name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Lens<Value, Value> for PropLens {
    #[inline]
    fn get<'a>(&self, source: &'a Value) -> &'a Value {
        read_prop(source, &self.name)
    }

    fn set(&self, source: Value, value: Value) -> Value {
        write_prop(source, &self.name, value)
    }
}

/// Focuses on one element of an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexLens {
    position: usize,
}

/// A lens on the element at `position`.
pub const fn index(position: usize) -> IndexLens {
    IndexLens { position }
}

impl IndexLens {
    /// The focused array position.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl Lens<Value, Value> for IndexLens {
    #[inline]
    fn get<'a>(&self, source: &'a Value) -> &'a Value {
        read_index(source, self.position)
    }

    fn set(&self, source: Value, value: Value) -> Value {
        write_index(source, self.position, value)
    }
}

// =============================================================================
// path
// =============================================================================

/// One step of a [`PathLens`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathKey {
    /// An object property.
    Prop(String),
    /// An array position.
    Index(usize),
}

impl From<&str> for PathKey {
    fn from(name: &str) -> Self {
        Self::Prop(name.to_owned())
    }
}

impl From<String> for PathKey {
    fn from(name: String) -> Self {
        Self::Prop(name)
    }
}

impl From<usize> for PathKey {
    fn from(position: usize) -> Self {
        Self::Index(position)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prop(name) => formatter.write_str(name),
            Self::Index(position) => write!(formatter, "{position}"),
        }
    }
}

impl Lens<Value, Value> for PathKey {
    fn get<'a>(&self, source: &'a Value) -> &'a Value {
        match self {
            Self::Prop(name) => read_prop(source, name),
            Self::Index(position) => read_index(source, *position),
        }
    }

    fn set(&self, source: Value, value: Value) -> Value {
        match self {
            Self::Prop(name) => write_prop(source, name, value),
            Self::Index(position) => write_index(source, *position, value),
        }
    }
}

/// A chain of [`PathKey`]s read left to right.
///
/// Behaves exactly like the keys composed with [`Lens::compose`]; an empty
/// path focuses on the whole value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathLens {
    keys: Vec<PathKey>,
}

/// A lens through `keys`, outermost first.
///
/// ```
/// use funkit::optics::{Lens, PathKey, path};
/// use funkit::value::Value;
///
/// let state = Value::parse(r#"{"users": [{"name": "Ada"}]}"#).unwrap();
/// let first_name = path([PathKey::from("users"), PathKey::Index(0), PathKey::from("name")]);
///
/// let renamed = first_name.set(state.clone(), Value::from("Grace"));
/// assert_eq!(first_name.get(&renamed), &Value::from("Grace"));
/// assert_eq!(first_name.get(&state), &Value::from("Ada"));
/// ```
pub fn path<I, K>(keys: I) -> PathLens
where
    I: IntoIterator<Item = K>,
    K: Into<PathKey>,
{
    PathLens {
        keys: keys.into_iter().map(Into::into).collect(),
    }
}

/// A lens through a dotted path such as `"users.0.name"`.
///
/// Segments that parse as `usize` become indices; empty segments are
/// skipped.
pub fn path_str(dotted: &str) -> PathLens {
    path(
        dotted
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_or_else(|_| PathKey::from(segment), PathKey::Index)
            }),
    )
}

impl FromStr for PathLens {
    type Err = std::convert::Infallible;

    fn from_str(dotted: &str) -> Result<Self, Self::Err> {
        Ok(path_str(dotted))
    }
}

impl PathLens {
    /// The keys, outermost first.
    pub fn keys(&self) -> &[PathKey] {
        &self.keys
    }

    /// Extends the path by one key.
    #[must_use]
    pub fn then(mut self, key: impl Into<PathKey>) -> Self {
        self.keys.push(key.into());
        self
    }

    fn write(keys: &[PathKey], source: Value, value: Value) -> Value {
        match keys.split_first() {
            None => value,
            Some((key, rest)) => {
                let child = key.get(&source).clone();
                key.set(source, Self::write(rest, child, value))
            }
        }
    }
}

impl fmt::Display for PathLens {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, key) in self.keys.iter().enumerate() {
            if position > 0 {
                formatter.write_str(".")?;
            }
            write!(formatter, "{key}")?;
        }
        Ok(())
    }
}

impl Lens<Value, Value> for PathLens {
    fn get<'a>(&self, source: &'a Value) -> &'a Value {
        self.keys.iter().fold(source, |focus, key| key.get(focus))
    }

    fn set(&self, source: Value, value: Value) -> Value {
        Self::write(&self.keys, source, value)
    }
}

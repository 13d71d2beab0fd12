//! The non-empty error list carried by an invalid [`Validation`].
//!
//! [`Validation`]: super::Validation

use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::typeclass::Semigroup;

/// One or more errors, in the order they were found.
///
/// There is no way to build an empty `ValidationErrors`, so an invalid
/// result always explains itself. Combining two lists concatenates them,
/// left first, without deduplication.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ValidationErrors<E> {
    errors: SmallVec<[E; 1]>,
}

impl<E> ValidationErrors<E> {
    /// A list holding a single error.
    pub fn new(error: E) -> Self {
        Self {
            errors: smallvec![error],
        }
    }

    /// Builds a list from a vector; `None` when the vector is empty.
    pub fn from_vec(errors: Vec<E>) -> Option<Self> {
        (!errors.is_empty()).then(|| Self {
            errors: SmallVec::from_vec(errors),
        })
    }

    /// Appends one more error.
    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Number of errors; never zero.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The first error found.
    pub fn first(&self) -> &E {
        &self.errors[0]
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Borrows the errors as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.errors
    }

    /// Transforms every error.
    pub fn map<E2, F>(self, function: F) -> ValidationErrors<E2>
    where
        F: FnMut(E) -> E2,
    {
        ValidationErrors {
            errors: self.errors.into_iter().map(function).collect(),
        }
    }

    /// Converts into a vector.
    pub fn into_vec(self) -> Vec<E> {
        self.errors.into_vec()
    }
}

impl<E> Semigroup for ValidationErrors<E> {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl<E: fmt::Debug> fmt::Debug for ValidationErrors<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.errors.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for ValidationErrors<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, error) in self.errors.iter().enumerate() {
            if position > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ValidationErrors<E> {}

impl<E> IntoIterator for ValidationErrors<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ValidationErrors<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for ValidationErrors<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.errors.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for ValidationErrors<E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        let errors = <Vec<E> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_vec(errors).ok_or_else(|| D::Error::custom("validation errors must not be empty"))
    }
}

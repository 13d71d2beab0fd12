//! Semigroup: an associative `combine`.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines `self` with `other`, `self` first.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Folds a sequence with `combine`; `None` when it is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

//! An optional value with a functional surface.
//!
//! [`Maybe`] carries a value (`Just`) or nothing at all (`Nothing`). Absence
//! carries no reason; reach for
//! [`Validation`](crate::validation::Validation) when callers need to know
//! what went wrong.
//!
//! Closures passed to [`Maybe::map`] are ordinary Rust code: if they panic,
//! the panic propagates. Fallible transformations belong in
//! [`Maybe::try_map`], which turns an `Err` into `Nothing`.

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that may be absent.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
///
/// let port = Maybe::of("8080")
///     .try_map(|text| text.parse::<u16>())
///     .filter(|port| *port >= 1024)
///     .get_or_else(80);
/// assert_eq!(port, 8080);
///
/// let fallback = Maybe::of("http")
///     .try_map(|text| text.parse::<u16>())
///     .get_or_else(80);
/// assert_eq!(fallback, 80);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    #[default]
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Just(value)
    }

    /// Alias of [`Maybe::of`].
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Alias of [`Maybe::of`].
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Iterates over the value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(2).map(|x| x * 10), Maybe::of(20));
    /// assert_eq!(Maybe::<i32>::nothing().map(|x| x * 10), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a fallible `function`; an `Err` becomes `Nothing`.
    #[inline]
    pub fn try_map<U, E, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Just(value) => function(value).ok().into(),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// ```rust
    /// use funkit::control::{Maybe, safe_divide};
    ///
    /// let quarter = Maybe::of(100).flat_map(|x| safe_divide(x, 4));
    /// assert_eq!(quarter, Maybe::of(25));
    /// assert_eq!(quarter.flat_map(|x| safe_divide(x, 0)), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the value only if `predicate` holds.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Just(left), Maybe::Just(right)) => Maybe::Just((left, right)),
            _ => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns the value, or `default` when absent.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the value, or computes a default when absent.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Returns `self` when present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative,
        }
    }

    /// Returns `self` when present, otherwise the computed alternative.
    #[inline]
    #[must_use]
    pub fn or_else_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into a [`Result`], using `error` for `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when the value is absent.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.into_option().ok_or(error)
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones a borrowed value.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(Clone::clone)
    }
}

impl<T: Copy> Maybe<&T> {
    /// Copies a borrowed value.
    #[inline]
    pub fn copied(self) -> Maybe<T> {
        self.map(|value| *value)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T> FromIterator<Maybe<T>> for Maybe<Vec<T>> {
    /// Collects every value, or `Nothing` if any element is absent.
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<Vec<T>>>()
            .into()
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.zip(other).map(|(left, right)| function(left, right))
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::of(4), Maybe::of(4))]
    #[case(Maybe::of(3), Maybe::nothing())]
    #[case(Maybe::nothing(), Maybe::nothing())]
    fn filter_keeps_even(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.filter(|x| x % 2 == 0), expected);
    }

    #[rstest]
    fn or_else_prefers_present_value() {
        assert_eq!(Maybe::of(1).or_else(Maybe::of(2)), Maybe::of(1));
        assert_eq!(Maybe::nothing().or_else(Maybe::of(2)), Maybe::of(2));
        assert_eq!(Maybe::<i32>::nothing().or_else(Maybe::nothing()), Maybe::nothing());
    }

    #[rstest]
    fn get_or_else_with_is_lazy() {
        let mut called = false;
        let value = Maybe::of(1).get_or_else_with(|| {
            called = true;
            0
        });
        assert_eq!(value, 1);
        assert!(!called);
    }

    #[rstest]
    fn try_map_degrades_errors_to_nothing() {
        let parsed = Maybe::of("12x").try_map(str::parse::<i32>);
        assert_eq!(parsed, Maybe::nothing());
    }

    #[rstest]
    #[should_panic(expected = "boom")]
    fn map_propagates_panics() {
        let _ = Maybe::of(1).map(|_: i32| -> i32 { panic!("boom") });
    }

    #[rstest]
    fn collect_requires_every_value() {
        let all: Maybe<Vec<i32>> = vec![Maybe::of(1), Maybe::of(2)].into_iter().collect();
        assert_eq!(all, Maybe::of(vec![1, 2]));
        let missing: Maybe<Vec<i32>> = vec![Maybe::of(1), Maybe::nothing()].into_iter().collect();
        assert_eq!(missing, Maybe::nothing());
    }

    #[rstest]
    fn option_round_trip() {
        assert_eq!(Maybe::from(Some(3)).into_option(), Some(3));
        assert_eq!(Option::<i32>::from(Maybe::nothing()), None);
    }

    #[rstest]
    fn applicative_map2_needs_both() {
        assert_eq!(Maybe::of(2).map2(Maybe::of(5), |a, b| a * b), Maybe::of(10));
        assert_eq!(Maybe::of(2).map2(Maybe::<i32>::nothing(), |a, b| a * b), Maybe::nothing());
    }

    #[rstest]
    fn display_shows_variant() {
        assert_eq!(Maybe::of(5).to_string(), "Just(5)");
        assert_eq!(Maybe::<i32>::nothing().to_string(), "Nothing");
    }
}

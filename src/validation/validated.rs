//! The accumulating validation container.

use std::fmt;

use crate::control::Maybe;
use crate::typeclass::{Applicative, Functor, Semigroup, TypeConstructor};

use super::errors::ValidationErrors;

/// A value that passed validation, or every reason it did not.
///
/// Unlike [`Result`], combining two invalid results with [`zip`],
/// [`map2`] or [`and`] keeps the errors of both, left first. Only
/// [`and_then`], where the second step needs the first value, stops early.
///
/// [`zip`]: Validation::zip
/// [`map2`]: Validation::map2
/// [`and`]: Validation::and
/// [`and_then`]: Validation::and_then
///
/// # Examples
///
/// ```rust
/// use funkit::validation::Validation;
///
/// let name: Validation<&str, &str> = Validation::failure("name is required");
/// let age: Validation<&str, u32> = Validation::failure("age must be a number");
///
/// let person = name.zip(age);
/// assert_eq!(
///     person.errors().map(|errors| errors.as_slice().to_vec()),
///     Some(vec!["name is required", "age must be a number"])
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, T> {
    /// The value passed.
    Valid(T),
    /// One or more errors.
    Invalid(ValidationErrors<E>),
}

impl<E, T> Validation<E, T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// A passing result.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Valid(value)
    }

    /// A failing result with one error.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Invalid(ValidationErrors::new(error))
    }

    /// A failing result with an existing error list.
    #[inline]
    pub const fn failures(errors: ValidationErrors<E>) -> Self {
        Self::Invalid(errors)
    }

    /// Lifts a [`Result`].
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::failure(error),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The passing value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// The errors, if any.
    #[inline]
    pub const fn errors(&self) -> Option<&ValidationErrors<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms a passing value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transforms every error.
    #[inline]
    pub fn map_errors<E2, F>(self, function: F) -> Validation<E2, T>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.map(function)),
        }
    }

    /// Runs a dependent check on a passing value.
    ///
    /// This is the one combinator that cannot accumulate: without a value
    /// there is nothing to feed the next step.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Fails with `error` unless `predicate` holds for the passing value.
    #[inline]
    #[must_use]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Valid(value) => {
                if predicate(&value) {
                    Self::Valid(value)
                } else {
                    Self::failure(error)
                }
            }
            Self::Invalid(errors) => Self::Invalid(errors),
        }
    }

    // =========================================================================
    // Accumulation
    // =========================================================================

    /// Pairs two results, keeping the errors of both.
    #[inline]
    pub fn zip<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => Validation::Valid((left, right)),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.combine(right))
            }
            (Self::Invalid(errors), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
        }
    }

    /// Combines two results with `function`, keeping every error.
    #[inline]
    pub fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.zip(other).map(|(left, right)| function(left, right))
    }

    /// Keeps this value, but also the errors of `other`.
    #[inline]
    #[must_use]
    pub fn and<U>(self, other: Validation<E, U>) -> Self {
        self.zip(other).map(|(left, _)| left)
    }

    /// Combines three results, keeping every error.
    pub fn map3<B, C, R, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        function: F,
    ) -> Validation<E, R>
    where
        F: FnOnce(T, B, C) -> R,
    {
        self.zip(second)
            .zip(third)
            .map(|((first, second), third)| function(first, second, third))
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Returns the value, or the errors as `Err`.
    ///
    /// # Errors
    ///
    /// The accumulated [`ValidationErrors`] when invalid.
    #[inline]
    pub fn get(self) -> Result<T, ValidationErrors<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Alias of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// The accumulated [`ValidationErrors`] when invalid.
    #[inline]
    pub fn into_result(self) -> Result<T, ValidationErrors<E>> {
        self.get()
    }

    /// Returns the value, or `default` when invalid.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => default,
        }
    }

    /// Returns the value, or computes a fallback from the errors.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce(ValidationErrors<E>) -> T,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => fallback(errors),
        }
    }

    /// Drops the errors, keeping only whether a value exists.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Valid(value) => Maybe::Just(value),
            Self::Invalid(_) => Maybe::Nothing,
        }
    }
}

impl<E, F> Validation<E, F> {
    /// Applies a validated function to a validated argument.
    ///
    /// Errors from the function come before errors from the argument.
    #[inline]
    pub fn apply<A, B>(self, argument: Validation<E, A>) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map2(argument, |function, value| function(value))
    }
}

impl<E: fmt::Debug, T: fmt::Debug> fmt::Debug for Validation<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => formatter.debug_tuple("Valid").field(value).finish(),
            Self::Invalid(errors) => formatter.debug_tuple("Invalid").field(errors).finish(),
        }
    }
}

impl<E, T> From<Result<T, E>> for Validation<E, T> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<E, T> From<Validation<E, T>> for Result<T, ValidationErrors<E>> {
    fn from(validation: Validation<E, T>) -> Self {
        validation.get()
    }
}

impl<E, T> FromIterator<Validation<E, T>> for Validation<E, Vec<T>> {
    /// Collects every value, or every error from every invalid element.
    fn from_iter<I: IntoIterator<Item = Validation<E, T>>>(iterator: I) -> Self {
        let mut values = Vec::new();
        let mut failures: Option<ValidationErrors<E>> = None;

        for validation in iterator {
            match validation {
                Validation::Valid(value) if failures.is_none() => values.push(value),
                Validation::Valid(_) => {}
                Validation::Invalid(errors) => {
                    failures = Some(match failures {
                        Some(existing) => existing.combine(errors),
                        None => errors,
                    });
                }
            }
        }

        failures.map_or(Validation::Valid(values), Validation::Invalid)
    }
}

impl<E, T: Semigroup> Semigroup for Validation<E, T> {
    /// Combines both values when valid, otherwise accumulates errors.
    fn combine(self, other: Self) -> Self {
        self.zip(other).map(|(left, right)| left.combine(right))
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<E, T> TypeConstructor for Validation<E, T> {
    type Inner = T;
    type WithType<B> = Validation<E, B>;
}

impl<E: Clone, T> Functor for Validation<E, T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validation<E, B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors.clone()),
        }
    }
}

impl<E: Clone, T> Applicative for Validation<E, T> {
    #[inline]
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Valid(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(T, B) -> C,
    {
        Self::map2(self, other, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Checked<T> = Validation<String, T>;

    fn invalid<T>(message: &str) -> Checked<T> {
        Validation::failure(message.to_string())
    }

    fn messages<T>(validation: &Checked<T>) -> Vec<String> {
        validation
            .errors()
            .map(|errors| errors.as_slice().to_vec())
            .unwrap_or_default()
    }

    #[rstest]
    fn map2_accumulates_both_sides() {
        let result = invalid::<i32>("first").map2(invalid::<i32>("second"), |a, b| a + b);
        assert_eq!(messages(&result), vec!["first", "second"]);
    }

    #[rstest]
    fn map2_combines_values() {
        let result = Checked::success(2).map2(Checked::success(3), |a, b| a * b);
        assert_eq!(result, Checked::success(6));
    }

    #[rstest]
    fn map3_keeps_every_error_in_order() {
        let result = invalid::<i32>("a").map3(Checked::success(1), invalid::<i32>("c"), |x, y, z| x + y + z);
        assert_eq!(messages(&result), vec!["a", "c"]);
    }

    #[rstest]
    fn and_then_short_circuits() {
        let mut ran = false;
        let result = invalid::<i32>("stop").and_then(|value| {
            ran = true;
            Checked::success(value)
        });
        assert!(result.is_invalid());
        assert!(!ran);
    }

    #[rstest]
    fn ensure_checks_passing_values() {
        let adult = Checked::success(20).ensure(|age| *age >= 18, "too young".to_string());
        let minor = Checked::success(12).ensure(|age| *age >= 18, "too young".to_string());
        assert!(adult.is_valid());
        assert_eq!(messages(&minor), vec!["too young"]);
    }

    #[rstest]
    fn collect_gathers_all_errors() {
        let collected: Checked<Vec<i32>> =
            vec![Checked::success(1), invalid("x"), Checked::success(3), invalid("y")]
                .into_iter()
                .collect();
        assert_eq!(messages(&collected), vec!["x", "y"]);

        let all_valid: Checked<Vec<i32>> = vec![Checked::success(1), Checked::success(2)].into_iter().collect();
        assert_eq!(all_valid, Checked::success(vec![1, 2]));
    }

    #[rstest]
    fn get_signals_failure() {
        assert_eq!(Checked::success(1).get().ok(), Some(1));
        let error = invalid::<i32>("bad").get().unwrap_err();
        assert_eq!(error.to_string(), "bad");
    }

    #[rstest]
    fn combine_merges_values_or_errors() {
        let merged = Checked::success(vec![1]).combine(Checked::success(vec![2]));
        assert_eq!(merged, Checked::success(vec![1, 2]));

        let failed = invalid::<Vec<i32>>("left").combine(invalid("right"));
        assert_eq!(messages(&failed), vec!["left", "right"]);
    }

    #[rstest]
    fn apply_accumulates_like_map2() {
        let function: Checked<fn(i32) -> i32> = invalid("no function");
        let result = function.apply(invalid::<i32>("no argument"));
        assert_eq!(messages(&result), vec!["no function", "no argument"]);
    }

    #[rstest]
    fn get_or_else_falls_back() {
        assert_eq!(invalid::<i32>("bad").get_or_else(0), 0);
        assert_eq!(Checked::success(5).get_or_else(0), 5);
    }

    #[rstest]
    fn to_maybe_forgets_errors() {
        assert_eq!(invalid::<i32>("bad").to_maybe(), Maybe::nothing());
        assert_eq!(Checked::success(5).to_maybe(), Maybe::of(5));
    }
}

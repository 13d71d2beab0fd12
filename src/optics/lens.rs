//! The [`Lens`] trait and its generic implementations.
//!
//! A lens focuses on one part `A` of a whole `S`. Reading borrows; writing
//! consumes the whole and returns a new one, so anyone holding a clone of
//! the original never sees the change.
//!
//! # Laws
//!
//! ```text
//! lens.get(&lens.set(source, value)) == &value                      (PutGet)
//! lens.set(source.clone(), lens.get(&source).clone()) == source     (GetPut)
//! lens.set(lens.set(source, first), second) == lens.set(source, second) (PutPut)
//! ```
//!
//! # Examples
//!
//! ```
//! use funkit::lens;
//! use funkit::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Settings { theme: String, font_size: u8 }
//!
//! let theme = lens!(Settings, theme);
//! let settings = Settings { theme: "light".to_string(), font_size: 12 };
//!
//! let dark = theme.set(settings.clone(), "dark".to_string());
//! assert_eq!(dark.theme, "dark");
//! assert_eq!(settings.theme, "light");
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Immutable get/set access to a part `A` of a whole `S`.
pub trait Lens<S, A> {
    /// Borrows the focus.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Replaces the focus, returning the new whole.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focus with `function` of its current value.
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Like [`over`](Lens::over), without cloning the focus first.
    fn over_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let updated = function(self.get(&source));
        self.set(source, updated)
    }

    /// Focuses further, through `inner`.
    fn compose<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, inner)
    }
}

// =============================================================================
// FunctionLens
// =============================================================================

/// A lens built from a getter and a setter closure.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a lens from `getter` and `setter`.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    #[inline]
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    #[inline]
    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

// =============================================================================
// ComposedLens
// =============================================================================

/// `outer` followed by `inner`.
///
/// Setting reads the outer focus, sets inside a clone of it, and writes the
/// result back through `outer`. For [`Value`](crate::value::Value) that clone
/// only bumps a reference count, so untouched siblings stay shared.
pub struct ComposedLens<Outer, Inner, A> {
    outer: Outer,
    inner: Inner,
    _marker: PhantomData<fn() -> A>,
}

impl<Outer, Inner, A> ComposedLens<Outer, Inner, A> {
    /// Chains `outer` and `inner`; `inner` focuses inside `outer`'s target.
    #[must_use]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, Outer, Inner> Lens<S, B> for ComposedLens<Outer, Inner, A>
where
    Outer: Lens<S, A>,
    Inner: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let focus = self.outer.get(&source).clone();
        let updated = self.inner.set(focus, value);
        self.outer.set(source, updated)
    }
}

impl<Outer: Clone, Inner: Clone, A> Clone for ComposedLens<Outer, Inner, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<Outer: fmt::Debug, Inner: fmt::Debug, A> fmt::Debug for ComposedLens<Outer, Inner, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Composes two lenses; the same as `outer.compose(inner)`.
pub fn compose<S, A, B, Outer, Inner>(outer: Outer, inner: Inner) -> ComposedLens<Outer, Inner, A>
where
    Outer: Lens<S, A>,
    Inner: Lens<A, B>,
{
    ComposedLens::new(outer, inner)
}

/// Reads through `lens`.
#[inline]
pub fn get<'a, S, A, L>(lens: &L, source: &'a S) -> &'a A
where
    L: Lens<S, A>,
{
    lens.get(source)
}

/// Writes `value` through `lens`.
#[inline]
pub fn set<S, A, L>(lens: &L, value: A, source: S) -> S
where
    L: Lens<S, A>,
{
    lens.set(source, value)
}

/// Updates the focus of `lens` with `function`.
#[inline]
pub fn over<S, A, L, F>(lens: &L, function: F, source: S) -> S
where
    L: Lens<S, A>,
    A: Clone,
    F: FnOnce(A) -> A,
{
    lens.over(source, function)
}

/// Builds a [`FunctionLens`] for a named struct field.
///
/// ```
/// use funkit::lens;
/// use funkit::optics::Lens;
///
/// #[derive(Clone)]
/// struct Counter { count: u32 }
///
/// let count = lens!(Counter, count);
/// let counter = count.over(Counter { count: 1 }, |n| n + 1);
/// assert_eq!(counter.count, 2);
/// ```
#[macro_export]
macro_rules! lens {
    ($source:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$source<$($generic),+>| &source.$field,
            |mut source: $source<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($source:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$source| &source.$field,
            |mut source: $source, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Grade {
        score: u32,
        weight: u32,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Assignment {
        title: String,
        grade: Grade,
    }

    fn assignment() -> Assignment {
        Assignment {
            title: "Essay".to_string(),
            grade: Grade { score: 80, weight: 2 },
        }
    }

    #[rstest]
    fn function_lens_reads_and_writes() {
        let score = FunctionLens::new(
            |grade: &Grade| &grade.score,
            |grade: Grade, score: u32| Grade { score, ..grade },
        );
        let grade = Grade { score: 10, weight: 1 };

        assert_eq!(*score.get(&grade), 10);
        assert_eq!(score.set(grade, 90), Grade { score: 90, weight: 1 });
    }

    #[rstest]
    fn over_applies_function() {
        let score = lens!(Grade, score);
        let curved = score.over(Grade { score: 70, weight: 1 }, |value| value + 5);
        assert_eq!(curved.score, 75);

        let doubled = score.over_ref(curved, |value| value * 2);
        assert_eq!(doubled.score, 150);
    }

    #[rstest]
    fn composed_lens_reaches_nested_fields() {
        let grade_score = lens!(Assignment, grade).compose(lens!(Grade, score));
        let original = assignment();

        assert_eq!(*grade_score.get(&original), 80);

        let updated = grade_score.set(original.clone(), 95);
        assert_eq!(updated.grade.score, 95);
        assert_eq!(updated.grade.weight, 2);
        assert_eq!(updated.title, "Essay");
        assert_eq!(original.grade.score, 80);
    }

    #[rstest]
    fn free_functions_match_methods() {
        let weight = compose(lens!(Assignment, grade), lens!(Grade, weight));

        assert_eq!(*get(&weight, &assignment()), 2);
        assert_eq!(set(&weight, 5, assignment()).grade.weight, 5);
        assert_eq!(over(&weight, |w: u32| w * 3, assignment()).grade.weight, 6);
    }

    #[rstest]
    fn struct_lens_laws() {
        let title = lens!(Assignment, title);
        let source = assignment();

        let put_get = title.set(source.clone(), "Quiz".to_string());
        assert_eq!(title.get(&put_get), "Quiz");

        let get_put = title.set(source.clone(), title.get(&source).clone());
        assert_eq!(get_put, source);

        let twice = title.set(title.set(source.clone(), "A".to_string()), "B".to_string());
        assert_eq!(twice, title.set(source, "B".to_string()));
    }
}

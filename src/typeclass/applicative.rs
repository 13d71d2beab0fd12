//! Applicative: combining independent contexts.
//!
//! `map2` is the heart of the class. For short-circuiting containers it
//! keeps the first failure; for [`Validation`](crate::validation::Validation)
//! it keeps every failure, in left-to-right order.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```

use super::functor::Functor;

/// A [`Functor`] that can lift values and combine two contexts.
pub trait Applicative: Functor {
    /// Lifts a plain value.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the two contained values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a contained function to a contained argument.
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, argument| function(argument))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

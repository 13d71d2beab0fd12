//! Monad: sequencing computations that depend on earlier results.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! m.flat_map(pure) == m
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;

/// An [`Applicative`] whose next step may depend on the current value.
pub trait Monad: Applicative {
    /// Feeds the contained value into `function`, flattening the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, keeping the second result.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

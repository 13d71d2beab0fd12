//! Higher-kinded type emulation.
//!
//! A `TypeConstructor` names the type it wraps (`Inner`) and how to rebuild
//! itself around another type (`WithType<B>`). `Maybe<A>::WithType<B>` is
//! `Maybe<B>`; `Validation<E, A>::WithType<B>` is `Validation<E, B>`.

/// A type of the shape `F<A>` that can be re-targeted to `F<B>`.
pub trait TypeConstructor {
    /// The wrapped type `A`.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_retargets_to_option() {
        fn assert_with_type<T: TypeConstructor<WithType<String> = Option<String>>>() {}
        assert_with_type::<Option<i32>>();
    }

    #[test]
    fn result_keeps_its_error_type() {
        fn assert_with_type<T: TypeConstructor<WithType<u8> = Result<u8, String>>>() {}
        assert_with_type::<Result<i32, String>>();
    }
}

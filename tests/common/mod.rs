//! Helpers shared by the integration tests.

/// Evaluate at compile time whether a concrete type satisfies a bound.
///
/// `implements!(Foo: Clone)` is `true` when `Foo: Clone` holds and `false`
/// otherwise. The inherent constant only exists when the bound holds; when it
/// does not, name resolution falls back to the blanket trait constant.
macro_rules! implements {
    ($ty:ty: $($bound:tt)+) => {{
        #[allow(dead_code)]
        trait DoesNotImpl {
            const IMPLS: bool = false;
        }
        impl<T: ?Sized> DoesNotImpl for T {}

        struct Bounded<T: ?Sized>(::std::marker::PhantomData<T>);

        #[allow(dead_code)]
        impl<T: ?Sized + $($bound)+> Bounded<T> {
            const IMPLS: bool = true;
        }

        <Bounded<$ty>>::IMPLS
    }};
}

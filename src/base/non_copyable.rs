//! Marker that suppresses duplication of the type that holds it.

/// Zero-sized marker that keeps its owner from being cloned or copied.
///
/// A struct holding a `NonCopyable` field cannot derive (or hand-write a
/// field-wise) `Clone`/`Copy`, so every value of that struct is unique. Moves
/// stay enabled: the owner can still be returned from functions, stored in
/// collections and handed to other threads.
///
/// ```
/// use commonlib::base::NonCopyable;
///
/// struct Connection {
///     _guard: NonCopyable,
///     port: u16,
/// }
///
/// let a = Connection { _guard: NonCopyable::new(), port: 8080 };
/// let b = a; // moving is fine
/// assert_eq!(b.port, 8080);
/// ```
///
/// Duplicating it does not compile:
///
/// ```compile_fail
/// use commonlib::base::NonCopyable;
///
/// #[derive(Clone)]
/// struct Connection {
///     _guard: NonCopyable,
/// }
/// ```
///
/// ```compile_fail
/// use commonlib::base::NonCopyable;
///
/// let a = NonCopyable::new();
/// let b = a;
/// let c = a; // use after move, `NonCopyable` is not `Copy`
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct NonCopyable {
    _private: (),
}

impl NonCopyable {
    /// Create the marker. It has no state and costs nothing at runtime.
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

//! Marker that suppresses both duplication and relocation.

use std::marker::PhantomPinned;

/// Zero-sized marker that makes its owner neither clonable nor relocatable.
///
/// Holding a `NonMoveable` removes the `Unpin` auto trait from the owner.
/// Once such a value is pinned (behind `Pin<&T>`, `Pin<Box<T>>` or a
/// `'static` reference handed out by [`crate::patterns::Singleton`]) safe code
/// can no longer move it out of its place. Like [`super::NonCopyable`] it is
/// not `Clone` or `Copy`.
///
/// ```compile_fail
/// use commonlib::base::NonMoveable;
///
/// fn requires_unpin<T: Unpin>() {}
///
/// struct Registry {
///     _pin: NonMoveable,
/// }
///
/// requires_unpin::<Registry>();
/// ```
///
/// ```compile_fail
/// use std::pin::Pin;
/// use commonlib::base::NonMoveable;
///
/// struct Registry {
///     _pin: NonMoveable,
///     size: usize,
/// }
///
/// let mut pinned = Box::pin(Registry { _pin: NonMoveable::new(), size: 1 });
/// let taken = std::mem::replace(
///     Pin::get_mut(pinned.as_mut()),
///     Registry { _pin: NonMoveable::new(), size: 2 },
/// );
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct NonMoveable {
    _pinned: PhantomPinned,
}

impl NonMoveable {
    /// Create the marker.
    pub const fn new() -> Self {
        Self { _pinned: PhantomPinned }
    }
}

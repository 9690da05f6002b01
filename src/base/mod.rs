//! Capability markers.
//!
//! Zero-sized field types that attach a restriction to whatever struct holds
//! them:
//!
//! - [`NonCopyable`] - the owner cannot be cloned or copied, but can be moved
//! - [`NonMoveable`] - the owner cannot be cloned, copied, or moved once pinned

pub mod non_copyable;
pub mod non_moveable;

pub use non_copyable::NonCopyable;
pub use non_moveable::NonMoveable;

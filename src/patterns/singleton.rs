//! Lazily constructed, process-wide single instances keyed by type.
//!
//! Rust statics cannot be generic, so a `static` declared inside a generic
//! function is shared by every instantiation. Instead the instances live in a
//! registry that maps each [`TypeId`] to a leaked [`OnceCell`] for that type.
//! The registry lock only guards the cell lookup; the constructor runs under
//! the cell's own run-once guard, so constructors may request other
//! singletons.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};

use log::debug;
use once_cell::sync::{Lazy, OnceCell};

use crate::base::{NonCopyable, NonMoveable};

type Slot = &'static (dyn Any + Send + Sync);

static REGISTRY: Lazy<Mutex<HashMap<TypeId, Slot>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Lifecycle of a singleton. There is no way back from `Initialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// No caller has successfully requested the instance yet.
    Uninitialized,
    /// The instance exists and lives until the process exits.
    Initialized,
}

/// A type with exactly one instance per process.
///
/// Implementors provide [`Singleton::create`]; callers use
/// [`Singleton::get_instance`], which constructs the instance on first use
/// and hands out a `'static` shared reference afterwards. Concurrent first
/// calls race to a single construction: one thread runs `create`, the others
/// block until it finishes and then observe the same object.
///
/// Only shared references are handed out, so the instance can never be moved
/// out or replaced. Implementors must hold a [`NonCopyable`] and a
/// [`NonMoveable`] and expose them through [`Singleton::markers`], which keeps
/// `#[derive(Clone)]` (and so a duplicate built from the shared reference)
/// from compiling. Mutable state inside the instance needs interior
/// mutability (atomics, `Mutex`, ...).
///
/// If `create` panics the panic reaches the caller that triggered the
/// construction, the singleton stays [`InstanceState::Uninitialized`] and the
/// next call tries again.
///
/// ```
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use commonlib::base::{NonCopyable, NonMoveable};
/// use commonlib::patterns::Singleton;
///
/// struct Counter {
///     nc: NonCopyable,
///     nm: NonMoveable,
///     hits: AtomicU32,
/// }
///
/// impl Singleton for Counter {
///     fn create() -> Self {
///         Self { nc: NonCopyable::new(), nm: NonMoveable::new(), hits: AtomicU32::new(0) }
///     }
///
///     fn markers(&self) -> (&NonCopyable, &NonMoveable) {
///         (&self.nc, &self.nm)
///     }
/// }
///
/// Counter::get_instance().hits.fetch_add(1, Ordering::SeqCst);
/// assert_eq!(Counter::get_instance().hits.load(Ordering::SeqCst), 1);
/// assert!(std::ptr::eq(Counter::get_instance(), Counter::get_instance()));
/// ```
///
/// A type without the markers cannot be a singleton:
///
/// ```compile_fail
/// use commonlib::patterns::Singleton;
///
/// #[derive(Clone)]
/// struct Settings {
///     verbose: bool,
/// }
///
/// impl Singleton for Settings {
///     fn create() -> Self {
///         Self { verbose: false }
///     }
/// }
/// ```
pub trait Singleton: Send + Sync + Sized + 'static {
    /// Build the instance. Called at most once per successful initialization.
    fn create() -> Self;

    /// The markers this type holds.
    fn markers(&self) -> (&NonCopyable, &NonMoveable);

    /// Return the process-wide instance, creating it on first use.
    fn get_instance() -> &'static Self {
        slot::<Self>().get_or_init(|| {
            debug!("Creating singleton instance of {}", type_name::<Self>());
            Self::create()
        })
    }

    /// Same as [`Singleton::get_instance`], as a pinned reference.
    fn pinned_instance() -> Pin<&'static Self> {
        Pin::static_ref(Self::get_instance())
    }

    /// Whether the instance has been constructed yet. Never constructs it.
    fn state() -> InstanceState {
        if slot::<Self>().get().is_some() {
            InstanceState::Initialized
        } else {
            InstanceState::Uninitialized
        }
    }
}

/// Look up (or register) the cell that holds the instance of `T`.
fn slot<T: Send + Sync + 'static>() -> &'static OnceCell<T> {
    let entry = {
        let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        *registry.entry(TypeId::of::<T>()).or_insert_with(|| {
            let cell: &'static OnceCell<T> = Box::leak(Box::new(OnceCell::new()));
            cell as Slot
        })
    };

    match entry.downcast_ref::<OnceCell<T>>() {
        Some(cell) => cell,
        None => unreachable!("registry slot for {} holds another type", type_name::<T>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_is_stable_per_type() {
        let first = slot::<u64>();
        let second = slot::<u64>();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_slots_are_distinct_across_types() {
        let a = slot::<u8>() as *const OnceCell<u8> as *const ();
        let b = slot::<i8>() as *const OnceCell<i8> as *const ();
        assert_ne!(a, b);
    }
}

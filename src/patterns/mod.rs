//! Reusable object patterns.

pub mod singleton;

pub use singleton::{InstanceState, Singleton};

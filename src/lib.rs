//! commonlib - small, independent building blocks
//!
//! # Modules
//!
//! * [`base`] - Capability markers that suppress copying and moving
//! * [`patterns`] - A type-keyed, lazily initialized singleton
//! * [`utils`] - Calendar time rendering/parsing and elapsed-time measurement
//! * [`config`] - Configuration file handling
//! * [`logger`] - `log`/`fern` wiring
//! * [`constants`] - Shared names and messages

/// Copy- and move-suppressing marker types
pub mod base;

/// Configuration module for default patterns and logging
pub mod config;

/// Crate constants and default values
pub mod constants;

/// Logging setup
pub mod logger;

/// Object patterns (singleton)
pub mod patterns;

/// Utility functions for date/time handling and timing
pub mod utils;

pub use base::{NonCopyable, NonMoveable};
pub use patterns::{InstanceState, Singleton};
pub use utils::datetime::{ParseError, Timestamp};
pub use utils::timer::MonotonicMark;

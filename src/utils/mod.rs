//! Utility modules.
//!
//! - [`datetime`] - Calendar time: current time as text, rendering and parsing
//! - [`timer`] - Monotonic marks and elapsed-time measurement
//!
//! Everything here is a free function or a plain value type; nothing holds
//! shared state.

pub mod datetime;
pub mod timer;

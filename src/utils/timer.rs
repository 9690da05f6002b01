//! Elapsed-time measurement on the monotonic clock.
//!
//! A [`MonotonicMark`] cannot be converted to calendar time and is only
//! meaningful within the process that captured it. Differences are signed:
//! measuring from a later mark to an earlier one gives a negative value.

use std::time::Instant;

/// A reading of the steady clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonotonicMark(Instant);

impl MonotonicMark {
    /// Read the steady clock
    pub fn now() -> Self {
        Self(Instant::now())
    }

    /// Seconds from this mark until now
    pub fn elapsed_seconds(&self) -> f64 {
        elapsed_seconds(*self, Self::now())
    }
}

impl From<Instant> for MonotonicMark {
    fn from(value: Instant) -> Self {
        Self(value)
    }
}

impl From<MonotonicMark> for Instant {
    fn from(value: MonotonicMark) -> Self {
        value.0
    }
}

/// Capture the current steady-clock reading
pub fn monotonic_mark() -> MonotonicMark {
    MonotonicMark::now()
}

/// `end - start` in seconds
pub fn elapsed_seconds(start: MonotonicMark, end: MonotonicMark) -> f64 {
    signed_seconds(start, end)
}

/// `end - start` in milliseconds
pub fn elapsed_milliseconds(start: MonotonicMark, end: MonotonicMark) -> f64 {
    signed_seconds(start, end) * 1_000.0
}

/// `end - start` in microseconds
pub fn elapsed_microseconds(start: MonotonicMark, end: MonotonicMark) -> f64 {
    signed_seconds(start, end) * 1_000_000.0
}

// `Instant - Instant` saturates at zero, so the sign is handled here.
fn signed_seconds(start: MonotonicMark, end: MonotonicMark) -> f64 {
    match end.0.checked_duration_since(start.0) {
        Some(forward) => forward.as_secs_f64(),
        None => -start.0.duration_since(end.0).as_secs_f64(),
    }
}

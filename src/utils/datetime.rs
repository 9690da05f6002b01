//! Date and time utility functions
//!
//! This module renders calendar time as text and parses it back, using the
//! strftime-style pattern language of [`chrono::format::strftime`]. Rendering
//! is lenient: unknown pattern tokens are dropped instead of failing. Parsing
//! is strict and reports a [`ParseError`].
//!
//! Parsed text is always interpreted as local time, and has whole-second
//! precision when the pattern carries no fractional-second token.

use std::fmt::{self, Write};
use std::str::FromStr;
use std::time::SystemTime;

use chrono::format::{Item, Parsed, StrftimeItems};
use chrono::{DateTime, LocalResult, Local, TimeZone, Utc};
use log::trace;
use serde::{Deserialize, Serialize};

/// Default pattern for a full date and time, e.g. `2023-01-01 00:00:00`
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default pattern for a date, e.g. `2023-01-01`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default pattern for a time of day, e.g. `13:45:00`
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Failure to turn text into a [`Timestamp`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to parse date/time string '{input}': {source}")]
    Mismatch {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("'{input}' is not a representable local time")]
    Unrepresentable { input: String },
}

/// A point on the system calendar clock.
///
/// Stored in UTC; rendering picks the zone. Serializes as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current calendar time
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build a timestamp from seconds since the Unix epoch.
    ///
    /// Returns `None` when the value is outside the supported calendar range.
    pub fn from_unix_seconds(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    /// Whole seconds since the Unix epoch
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// The same instant as a UTC `DateTime`
    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// The same instant in the local time zone
    pub fn to_local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    /// Render in local time. Same as [`render`].
    pub fn format(&self, format: &str) -> String {
        render(*self, format)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.with_timezone(&Utc))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(value: SystemTime) -> Self {
        Self(DateTime::<Utc>::from(value))
    }
}

impl From<Timestamp> for SystemTime {
    fn from(value: Timestamp) -> Self {
        value.0.into()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(*self, DEFAULT_DATETIME_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, DEFAULT_DATETIME_FORMAT)
    }
}

/// Current local date and time as text
///
/// # Arguments
/// * `format` - strftime-style pattern, usually [`DEFAULT_DATETIME_FORMAT`]
pub fn current_local_text(format: &str) -> String {
    render(Timestamp::now(), format)
}

/// Current UTC date and time as text
///
/// # Arguments
/// * `format` - strftime-style pattern, usually [`DEFAULT_DATETIME_FORMAT`]
pub fn current_utc_text(format: &str) -> String {
    render_utc(Timestamp::now(), format)
}

/// Current local date as text, usually with [`DEFAULT_DATE_FORMAT`]
pub fn current_date_text(format: &str) -> String {
    current_local_text(format)
}

/// Current local time of day as text, usually with [`DEFAULT_TIME_FORMAT`]
pub fn current_time_text(format: &str) -> String {
    current_local_text(format)
}

/// Render a timestamp in the local time zone
///
/// # Arguments
/// * `timestamp` - Point in time to render
/// * `format` - strftime-style pattern
///
/// # Returns
/// * `String` - Rendered text. Unknown pattern tokens are dropped, so a
///   malformed pattern degrades to partial (possibly empty) output.
pub fn render(timestamp: Timestamp, format: &str) -> String {
    format_lenient(&timestamp.to_local(), format)
}

/// Render a timestamp in UTC. Same leniency as [`render`].
pub fn render_utc(timestamp: Timestamp, format: &str) -> String {
    format_lenient(&timestamp.as_utc(), format)
}

/// Alias of [`render`]
pub fn to_text(timestamp: Timestamp, format: &str) -> String {
    render(timestamp, format)
}

/// Parse local date/time text into a timestamp
///
/// # Arguments
/// * `text` - Text to parse
/// * `format` - strftime-style pattern the text must match
///
/// # Returns
/// * `Result<Timestamp, ParseError>` - `Mismatch` when the text does not fit
///   the pattern or the pattern names no date, `Unrepresentable` when the
///   fields name a local time that does not exist (a daylight-saving gap).
///   Time fields the pattern leaves out are zero, so a date-only pattern
///   yields local midnight and `%Y-%m-%d %H` yields the top of the hour. A
///   time-only pattern is a `Mismatch`: there is no date to anchor it to. An
///   ambiguous local time resolves to the earlier instant.
pub fn parse(text: &str, format: &str) -> Result<Timestamp, ParseError> {
    let mismatch = |source: chrono::ParseError| ParseError::Mismatch {
        input: text.to_string(),
        source,
    };

    let mut parsed = Parsed::default();
    chrono::format::parse(&mut parsed, text, StrftimeItems::new(format)).map_err(mismatch)?;

    // Only an explicit epoch timestamp pins the time of day on its own
    if parsed.timestamp.is_none() {
        parsed.hour_div_12.get_or_insert(0);
        parsed.hour_mod_12.get_or_insert(0);
        parsed.minute.get_or_insert(0);
        parsed.second.get_or_insert(0);
    }
    let naive = parsed.to_naive_datetime_with_offset(0).map_err(mismatch)?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(Timestamp::from(local)),
        LocalResult::Ambiguous(earliest, _) => Ok(Timestamp::from(earliest)),
        LocalResult::None => Err(ParseError::Unrepresentable { input: text.to_string() }),
    }
}

/// Alias of [`parse`]
pub fn from_text(text: &str, format: &str) -> Result<Timestamp, ParseError> {
    parse(text, format)
}

/// The host's current offset from UTC in seconds (positive east of Greenwich)
pub fn local_utc_offset_seconds() -> i32 {
    Local::now().offset().local_minus_utc()
}

/// Format with chrono, dropping the pattern items it cannot interpret.
///
/// `DelayedFormat::to_string` panics on an invalid pattern; writing through
/// `fmt::Write` surfaces the failure as an error instead.
fn format_lenient<Tz: TimeZone>(dt: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: fmt::Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(format)
        .filter(|item| !matches!(item, Item::Error))
        .collect();

    let mut out = String::new();
    if write!(out, "{}", dt.format_with_items(items.iter())).is_err() {
        trace!("Pattern '{}' could not be fully rendered", format);
    }
    out
}

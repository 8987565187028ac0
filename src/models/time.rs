use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::models::duration::CanvasDuration;

/// Error returned when a temporal string matches none of the accepted formats.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized time value {text:?}")]
pub struct TimeParseError {
    pub text: String,
}

/// A Canvas schedule instant with three observable shapes: date-only,
/// time-only, or combined.
///
/// Internally a single naive civil datetime in the process-local calendar.
/// A date-only value carries a midnight time-of-day; a time-only value is
/// anchored to the zero date (year 0, January 1). A value that is both
/// midnight and zero-dated is indistinguishable from either shape; the
/// display rules below pick date-only for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanvasTime(NaiveDateTime);

const COMBINED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(0, 1, 1).expect("year 0 is representable")
}

impl CanvasTime {
    /// Parse a temporal string, trying each accepted format unconditionally
    /// in a fixed order: combined `YYYY-MM-DD HH:MM:SS`, date-only
    /// `YYYY-MM-DD`, time-only `HH:MM:SS`, then an RFC 3339 timestamp
    /// (converted into the local civil calendar). The first match wins.
    pub fn parse(text: &str) -> Result<Self, TimeParseError> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, COMBINED_FORMAT) {
            return Ok(Self(dt));
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
            return Ok(Self(date.and_time(NaiveTime::MIN)));
        }
        if let Ok(time) = NaiveTime::parse_from_str(text, TIME_FORMAT) {
            return Ok(Self(zero_date().and_time(time)));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(dt.with_timezone(&Local).naive_local()));
        }
        Err(TimeParseError {
            text: text.to_string(),
        })
    }

    /// Build an instant from an explicit date and time-of-day.
    pub fn from_parts(date: NaiveDate, time: NaiveTime) -> Self {
        Self(date.and_time(time))
    }

    /// The date component (the zero date for time-only values).
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// The time-of-day component (midnight for date-only values).
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Whether the time-of-day is exactly midnight.
    pub fn is_midnight(&self) -> bool {
        self.0.time() == NaiveTime::MIN
    }

    /// Displace this instant by a signed offset using civil (calendar)
    /// arithmetic. `None` if the result falls outside the representable
    /// datetime range.
    pub fn offset_by(&self, offset: CanvasDuration) -> Option<Self> {
        let delta = chrono::TimeDelta::try_seconds(offset.as_secs())?;
        self.0.checked_add_signed(delta).map(Self)
    }

    /// The fully qualified RFC 3339 UTC form used for outbound API calls.
    ///
    /// The naive value is resolved through the process time zone and
    /// converted to UTC; shape information is intentionally lost.
    pub fn to_wire(&self) -> String {
        let utc = match Local.from_local_datetime(&self.0) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
            // A local time skipped by a zone transition; fall back to UTC.
            LocalResult::None => Utc.from_utc_datetime(&self.0),
        };
        utc.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl fmt::Display for CanvasTime {
    /// Most-specific display shape: date-only when the time-of-day is
    /// midnight, time-only when the date is the zero date, combined
    /// otherwise. The check order makes the all-zero value date-only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_midnight() {
            write!(f, "{}", self.0.format(DATE_FORMAT))
        } else if self.0.date() == zero_date() {
            write!(f, "{}", self.0.format(TIME_FORMAT))
        } else {
            write!(f, "{}", self.0.format(COMBINED_FORMAT))
        }
    }
}

impl Serialize for CanvasTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanvasTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        CanvasTime::parse(&text).map_err(de::Error::custom)
    }
}

//! Travel time handling for the itinerary feed.
//!
//! The feed carries departure and arrival stamps as "YYYY-MM-DDTHHMM"
//! strings. This module parses them and provides `TravelTime`, an
//! ordered whole-minute duration whose display form carries minutes
//! over into hours (50 min + 40 min reads as "1h 30m").

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use chrono::{Duration, NaiveDateTime};

/// Timestamp format used by the feed, e.g. `2018-10-22T0005`.
const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H%M";

/// Error returned when parsing an invalid feed timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

/// Parse a feed timestamp such as `2018-10-22T0005`.
///
/// # Examples
///
/// ```
/// use flight_server::domain::parse_feed_timestamp;
///
/// let t = parse_feed_timestamp("2018-10-22T0005").unwrap();
/// assert_eq!(t.to_string(), "2018-10-22 00:05:00");
///
/// assert!(parse_feed_timestamp("2018-10-22 00:05").is_err());
/// assert!(parse_feed_timestamp("2018-10-22T2505").is_err());
/// ```
pub fn parse_feed_timestamp(s: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(s, FEED_TIMESTAMP_FORMAT).map_err(|_| TimeError {
        reason: "expected YYYY-MM-DDTHHMM",
    })
}

/// Total travel time of a route, in whole minutes.
///
/// Supports ordering (for time sorts) and a human-readable display form
/// with normalized units.
///
/// # Examples
///
/// ```
/// use flight_server::domain::TravelTime;
///
/// let t = TravelTime::from_minutes(90);
/// assert_eq!(t.to_string(), "1h 30m");
///
/// let total = TravelTime::from_minutes(50) + TravelTime::from_minutes(40);
/// assert_eq!(total, t);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TravelTime {
    minutes: i64,
}

impl TravelTime {
    /// A zero-length travel time.
    pub const ZERO: TravelTime = TravelTime { minutes: 0 };

    /// Create a travel time from a number of minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Create a travel time from a `chrono` duration, truncated to
    /// whole minutes.
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            minutes: duration.num_minutes(),
        }
    }

    /// Returns the total number of minutes.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl Add for TravelTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            minutes: self.minutes + rhs.minutes,
        }
    }
}

impl Sum for TravelTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Debug for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelTime({self})")
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {:02}m", self.minutes / 60, self.minutes % 60)
    }
}

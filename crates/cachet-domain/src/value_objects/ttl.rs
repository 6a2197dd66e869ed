//! Time-to-live value objects
//!
//! A TTL is either absent (`Option::None`, no expiration), a relative number
//! of seconds, or a calendar-style interval. [`normalize_ttl`] reduces all of
//! them to the single `Option<i64>` seconds figure handed to a store.
//!
//! ## Interval normalization
//!
//! An interval is *not* measured from "now". It is added to the Unix epoch
//! with calendar arithmetic and the resulting timestamp is used as the
//! seconds figure:
//!
//! ```text
//! PT35S -> 1970-01-01T00:00:35Z -> 35
//! P1M   -> 1970-02-01T00:00:00Z -> 2_678_400
//! P1Y   -> 1971-01-01T00:00:00Z -> 31_536_000
//! ```
//!
//! Stores treat that figure as a relative expiry, so month and year lengths
//! are those of 1970. Existing deployments depend on these exact numbers.

use crate::error::{Error, Result};
use chrono::{DateTime, Months, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Expiration directive for a cache entry
///
/// Deserializes from an integer (seconds) or an ISO-8601 duration string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ttl {
    /// Relative seconds, forwarded unchanged (zero and negatives included)
    Seconds(i64),
    /// Calendar-style interval, see the module docs for its normalization
    Interval(TtlInterval),
}

impl Ttl {
    /// TTL of `secs` seconds
    pub fn seconds(secs: i64) -> Self {
        Self::Seconds(secs)
    }

    /// Whether this TTL counts as supplied when deciding on a fallback
    ///
    /// `Seconds(0)` is treated like an absent TTL; every interval counts,
    /// even an empty one.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Seconds(secs) => *secs != 0,
            Self::Interval(_) => true,
        }
    }

    /// Reduce to a seconds figure
    pub fn normalize(&self) -> Result<i64> {
        match self {
            Self::Seconds(secs) => Ok(*secs),
            Self::Interval(interval) => interval.epoch_offset_secs(),
        }
    }
}

/// Whole seconds, rounded up: a sub-second duration still expires
impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        let secs = duration
            .as_secs()
            .saturating_add(u64::from(duration.subsec_nanos() > 0));
        Self::Seconds(i64::try_from(secs).unwrap_or(i64::MAX))
    }
}

impl From<TtlInterval> for Ttl {
    fn from(interval: TtlInterval) -> Self {
        Self::Interval(interval)
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{}s", secs),
            Self::Interval(interval) => write!(f, "{}", interval),
        }
    }
}

/// Normalize an optional TTL into "no expiration" or a seconds figure
pub fn normalize_ttl(ttl: Option<&Ttl>) -> Result<Option<i64>> {
    ttl.map(Ttl::normalize).transpose()
}

/// Pick the TTL to forward: the caller's when supplied, otherwise the fallback
pub fn ttl_or_default(ttl: Option<Ttl>, fallback: Option<&Ttl>) -> Option<Ttl> {
    match ttl {
        Some(ttl) if ttl.is_set() => Some(ttl),
        _ => fallback.cloned(),
    }
}

/// Calendar-style duration (years, months, days and clock time)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TtlInterval {
    /// Whole years
    pub years: u32,
    /// Whole months
    pub months: u32,
    /// Whole days (weeks are folded in)
    pub days: u32,
    /// Hours
    pub hours: u32,
    /// Minutes
    pub minutes: u32,
    /// Seconds
    pub seconds: u32,
    /// Interval points backwards in time
    pub inverted: bool,
}

impl TtlInterval {
    /// Empty interval
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the years component
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Set the months component
    pub fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    /// Set the days component
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Set the hours component
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// Set the minutes component
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes = minutes;
        self
    }

    /// Set the seconds component
    pub fn with_seconds(mut self, seconds: u32) -> Self {
        self.seconds = seconds;
        self
    }

    /// Flip the interval direction
    pub fn inverted(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    /// Timestamp of `unix_epoch + self`, in seconds
    pub fn epoch_offset_secs(&self) -> Result<i64> {
        let overflow = || Error::invalid_argument(format!("TTL interval {} overflows", self));

        let months = self
            .years
            .checked_mul(12)
            .and_then(|m| m.checked_add(self.months))
            .ok_or_else(overflow)?;
        let clock_secs = i64::from(self.days) * SECS_PER_DAY
            + i64::from(self.hours) * SECS_PER_HOUR
            + i64::from(self.minutes) * SECS_PER_MINUTE
            + i64::from(self.seconds);
        let clock = TimeDelta::try_seconds(clock_secs).ok_or_else(overflow)?;

        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        let instant = if self.inverted {
            epoch
                .checked_sub_months(Months::new(months))
                .and_then(|t| t.checked_sub_signed(clock))
        } else {
            epoch
                .checked_add_months(Months::new(months))
                .and_then(|t| t.checked_add_signed(clock))
        };

        Ok(instant.ok_or_else(overflow)?.timestamp())
    }

    fn is_empty(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }
}

impl fmt::Display for TtlInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.is_empty() {
            return f.write_str("T0S");
        }
        for (value, unit) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if value > 0 {
                write!(f, "{}{}", value, unit)?;
            }
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            f.write_str("T")?;
            for (value, unit) in [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')] {
                if value > 0 {
                    write!(f, "{}{}", value, unit)?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for TtlInterval {
    type Err = Error;

    /// Parse an ISO-8601 duration such as `PT35S`, `P1Y2M3DT4H5M6S` or `P2W`
    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            |why: &str| Error::invalid_argument(format!("invalid TTL interval '{}': {}", s, why));

        let (inverted, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let rest = rest
            .strip_prefix('P')
            .ok_or_else(|| invalid("missing 'P' designator"))?;

        let (date_part, time_part) = match rest.split_once('T') {
            Some((_, "")) => return Err(invalid("empty time section")),
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let mut interval = Self {
            inverted,
            ..Self::default()
        };
        let mut components = 0;

        // Designators must appear in this order; position tracks the last one seen.
        let mut position = 0;
        for (value, unit) in split_components(date_part).map_err(invalid)? {
            let slot = ['Y', 'M', 'W', 'D']
                .iter()
                .position(|u| *u == unit)
                .ok_or_else(|| invalid("unknown date designator"))?;
            if slot < position {
                return Err(invalid("date designators out of order"));
            }
            position = slot + 1;
            match unit {
                'Y' => interval.years = value,
                'M' => interval.months = value,
                'W' => {
                    let days = value
                        .checked_mul(7)
                        .and_then(|d| d.checked_add(interval.days))
                        .ok_or_else(|| invalid("week count overflows"))?;
                    interval.days = days;
                }
                _ => {
                    interval.days = interval
                        .days
                        .checked_add(value)
                        .ok_or_else(|| invalid("day count overflows"))?;
                }
            }
            components += 1;
        }

        if let Some(time_part) = time_part {
            let mut position = 0;
            for (value, unit) in split_components(time_part).map_err(invalid)? {
                let slot = ['H', 'M', 'S']
                    .iter()
                    .position(|u| *u == unit)
                    .ok_or_else(|| invalid("unknown time designator"))?;
                if slot < position {
                    return Err(invalid("time designators out of order"));
                }
                position = slot + 1;
                match unit {
                    'H' => interval.hours = value,
                    'M' => interval.minutes = value,
                    _ => interval.seconds = value,
                }
                components += 1;
            }
        }

        if components == 0 {
            return Err(invalid("no components"));
        }
        Ok(interval)
    }
}

/// Split `12Y3M` into `[(12, 'Y'), (3, 'M')]`
fn split_components(section: &str) -> std::result::Result<Vec<(u32, char)>, &'static str> {
    let mut out = Vec::new();
    let mut digits = String::new();
    for c in section.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if digits.is_empty() {
            return Err("designator without a number");
        }
        let value = digits.parse::<u32>().map_err(|_| "number out of range")?;
        out.push((value, c));
        digits.clear();
    }
    if !digits.is_empty() {
        return Err("number without a designator");
    }
    Ok(out)
}

impl TryFrom<String> for TtlInterval {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TtlInterval> for String {
    fn from(interval: TtlInterval) -> Self {
        interval.to_string()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticks (100ns units) in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;
/// Ticks in one minute.
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
/// Ticks in one hour.
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
/// Ticks in one day.
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

const NANOS_PER_TICK: i64 = 100;

// 1970-01-01T00:00:00 measured from 0001-01-01T00:00:00.
const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Absolute point in time as a count of 100ns ticks since 0001-01-01T00:00:00 UTC.
///
/// Values are confined to `[TimeStamp::MIN, TimeStamp::MAX]`, i.e. the years
/// 0001 through 9999 of the proleptic Gregorian calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct TimeStamp(i64);

impl TimeStamp {
    /// 0001-01-01T00:00:00.
    pub const MIN: Self = Self(0);
    /// 9999-12-31T23:59:59.9999999.
    pub const MAX: Self = Self(3_155_378_975_999_999_999);

    /// Build a timestamp from a raw tick count; `None` outside `[MIN, MAX]`.
    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Option<Self> {
        if ticks < Self::MIN.0 || ticks > Self::MAX.0 {
            None
        } else {
            Some(Self(ticks))
        }
    }

    /// Tick count since 0001-01-01.
    #[must_use]
    pub const fn elapsed_ticks(self) -> i64 {
        self.0
    }

    /// Whole days elapsed since 0001-01-01.
    #[must_use]
    pub const fn elapsed_days(self) -> i64 {
        self.0 / TICKS_PER_DAY
    }

    /// Convert a UTC date/time, truncating below tick precision.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Option<Self> {
        let sub_ticks = i64::from(dt.timestamp_subsec_nanos()) / NANOS_PER_TICK;
        let ticks = dt
            .timestamp()
            .checked_mul(TICKS_PER_SECOND)?
            .checked_add(sub_ticks)?
            .checked_add(UNIX_EPOCH_TICKS)?;
        Self::from_ticks(ticks)
    }

    /// Calendar date/time of this timestamp in UTC.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let since_unix = self.0 - UNIX_EPOCH_TICKS;
        let secs = since_unix.div_euclid(TICKS_PER_SECOND);
        let nanos = u32::try_from(since_unix.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK).ok()?;
        DateTime::from_timestamp(secs, nanos)
    }
}

impl TryFrom<i64> for TimeStamp {
    type Error = String;

    fn try_from(ticks: i64) -> Result<Self, Self::Error> {
        Self::from_ticks(ticks).ok_or_else(|| format!("tick count {ticks} out of range"))
    }
}

impl From<TimeStamp> for i64 {
    fn from(ts: TimeStamp) -> Self {
        ts.0
    }
}

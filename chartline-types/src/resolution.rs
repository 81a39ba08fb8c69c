use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChartError;

/// Granularity at which a chart series is aggregated and labelled.
///
/// Raw codes follow the data feed convention: `Tick = 0` through `Day = 4`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Individual ticks; one axis unit is one 100ns tick.
    Tick,
    /// One axis unit per second.
    Second,
    /// One axis unit per minute.
    Minute,
    /// One axis unit per hour.
    Hour,
    /// One axis unit per day.
    #[default]
    #[serde(alias = "daily")]
    Day,
}

impl Resolution {
    /// All resolutions, finest first.
    pub const ALL: [Self; 5] = [
        Self::Tick,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
    ];

    /// Raw feed code of this resolution.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Tick => 0,
            Self::Second => 1,
            Self::Minute => 2,
            Self::Hour => 3,
            Self::Day => 4,
        }
    }

    /// Lowercase name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for Resolution {
    type Error = ChartError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Tick),
            1 => Ok(Self::Second),
            2 => Ok(Self::Minute),
            3 => Ok(Self::Hour),
            4 => Ok(Self::Day),
            other => Err(ChartError::unsupported_resolution(
                other.to_string(),
                "resolution code",
            )),
        }
    }
}

impl FromStr for Resolution {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tick" | "ticks" => Ok(Self::Tick),
            "second" => Ok(Self::Second),
            "minute" => Ok(Self::Minute),
            "hour" => Ok(Self::Hour),
            "day" | "daily" => Ok(Self::Day),
            _ => Err(ChartError::unsupported_resolution(s, "resolution name")),
        }
    }
}

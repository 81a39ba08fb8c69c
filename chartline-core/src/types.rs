//! Re-export of the shared data model from `chartline-types`.
// Downstream crates can depend on `chartline-core` only

pub use chartline_types::{
    AxisUnit, ChartConfig, ChartError, ChartPoint, OhlcBar, OhlcPoint, Resolution, TimeStamp,
};
pub use chartline_types::{TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND};

//! Chartline data model and configuration primitives shared by the workspace.
#![warn(missing_docs)]

mod bar;
mod config;
/// Error type shared by all chartline crates.
pub mod error;
mod resolution;
mod timestamp;

pub use bar::{AxisUnit, ChartPoint, OhlcBar, OhlcPoint};
pub use config::ChartConfig;
pub use error::ChartError;
pub use resolution::Resolution;
pub use timestamp::{
    TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND, TimeStamp,
};

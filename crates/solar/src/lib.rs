//! # luach-solar
//!
//! Sun times and the proportional-hour layer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_solar::{proportional_time, sun, Observer};
//!
//! let observer = Observer::new(31.7683, 35.2137)?; // Jerusalem
//!
//! // Sunrise for the day starting at a unix midnight.
//! let rise = sun::sunrise(observer, 1_727_913_600)?;
//!
//! // Proportional clock: which halachic hour is a given instant?
//! let t = proportional_time(observer, 1_727_956_800, 3 * 3600)?;
//! println!("{:?} hour {} ({:.0}%)", t.date(), t.hour(), t.fraction() * 100.0);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sun` | Solar coordinates, position, sunrise/sunset |
//! | `halachic` | Proportional hours over the solar day |
//! | `observer` | Observer location |
//! | `error` | Error types |

mod error;
mod halachic;
mod observer;
pub mod sun;

pub use error::SolarError;
pub use halachic::{proportional_time, ProportionalTime};
pub use observer::Observer;

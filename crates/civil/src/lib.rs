//! # luach-civil
//!
//! Civil calendar collaborator: epoch day counts shared with the Hebrew
//! calendar, Gregorian weekdays, and unix-time conversion.
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_civil::{CivilDate, CivilDateTime, TimeOfDay};
//!
//! let date = CivilDate::new(2023, 9, 16)?;
//! assert_eq!(date.days_since_epoch(), 738779);
//! assert_eq!(date.weekday().number(), 7); // Saturday
//!
//! let noon = CivilDateTime::new(date, TimeOfDay::new(12, 0, 0)?);
//! assert_eq!(noon.to_unix_seconds(), 1_694_865_600);
//! ```
//!
//! The day counter deliberately keeps the system's observed leap rule
//! (February gains a day only in years divisible by both 4 and 400); see
//! [`CivilDate`] for the consequences.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Civil date, day counts, weekday |
//! | `time` | Wall-clock time of day |
//! | `datetime` | Date-time and unix-time conversion |
//! | `error` | Error types |

mod date;
mod datetime;
mod error;
mod time;

pub use date::{is_leap_year, month_length, CivilDate};
pub use datetime::CivilDateTime;
pub use error::CivilError;
pub use time::TimeOfDay;

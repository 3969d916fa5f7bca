//! # luach-hebrew
//!
//! Hebrew calendar arithmetic: dates, year classification, holidays, and
//! the weekly Torah reading cycle.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"HebrewDate::new()"| B["HebrewDate"]
//!     B -->|".days_since_epoch()"| C["epoch day (rata die)"]
//!     C -->|"HebrewDate::from_days_since_epoch()"| B
//!     B -->|".weekday()"| D["Weekday"]
//!     B -->|".holiday(diaspora)"| E["Option of Holiday"]
//!     B -->|".weekly_reading()"| F["Reading"]
//!     G["year"] -->|"YearType::classify()"| H["YearType"]
//!     H -->|".index()"| F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_hebrew::{HebrewDate, Holiday, YearType};
//!
//! // First day of Pesach 5784, a Tuesday.
//! let pesach = HebrewDate::new(5784, 1, 15)?;
//! assert_eq!(pesach.weekday().number(), 3);
//! assert_eq!(pesach.holiday(false), Some(Holiday::Pesach));
//!
//! // Epoch day numbers are shared with the civil calendar.
//! let day = pesach.days_since_epoch();
//! assert_eq!(HebrewDate::from_days_since_epoch(day)?, pesach);
//!
//! // Year classification drives the reading schedule.
//! let year_type = YearType::classify(5784)?;
//! assert!(year_type.is_leap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `epoch` | Leap years, molad arithmetic, year starts, month lengths |
//! | `date` | Hebrew date and epoch-day conversions |
//! | `weekday` | Weekday numbering (1 = Sunday) |
//! | `year_type` | Fourteen-way year classification |
//! | `holiday` | Holiday determination with diaspora variants |
//! | `reading` | Weekly Torah reading lookup |
//! | `schedule` | Per-configuration reading schedule rows |
//! | `error` | Error types |

mod date;
pub mod epoch;
mod error;
mod holiday;
mod reading;
mod schedule;
mod weekday;
mod year_type;

pub use date::HebrewDate;
pub use error::HebrewError;
pub use holiday::Holiday;
pub use reading::{Parasha, Reading};
pub use weekday::Weekday;
pub use year_type::YearType;

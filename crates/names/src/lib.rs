//! # luach-names
//!
//! Display-name tables for the calendar engine. The engine crates emit
//! ordinals and enums only; this crate turns them into strings in one of
//! two locales. The strings are the system's established output and are
//! kept byte-for-byte, spelling oddities included.

mod civil;
mod hebrew;

pub use civil::{civil_month_name, civil_month_short_name, civil_weekday_short_name};
pub use hebrew::{
    holiday_name, month_name, parasha_name, weekday_name, year_type_sign,
};

/// Output locale for display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Hebrew script.
    #[default]
    Hebrew,
    /// Transliterated / English.
    English,
}

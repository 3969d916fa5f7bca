//! Error types for the luach-numerals crate.

/// Error type for numeral rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// Returned when the number is outside the renderable range.
    #[error("number {number} is outside 1..=9999")]
    OutOfRange {
        /// The number that was provided.
        number: u16,
    },
}

//! # luach-numerals
//!
//! Rendering of numbers as Hebrew numerals, optionally decorated with
//! geresh and gershayim marks (e.g. 5784 → ה׳תשפ״ד, 15 → ט״ו).
//!
//! The place-value walk reproduces the system's established output exactly,
//! including its documented quirks: 1000 renders as תתר because only values
//! above 1000 take the thousands prefix, and the gershayim before a final
//! unit letter keys off the whole input being above 10.

mod error;

pub use error::NumeralError;

const GERESH: char = '\u{05F3}';
const GERSHAYIM: char = '\u{05F4}';
const ALEF: u32 = 0x05D0;

/// Letter for the `1..=9` value `n` (alef through tet).
fn unit_letter(n: u16) -> char {
    // Alef is the first letter of the block; 1..=9 map onto it directly.
    char::from_u32(ALEF + u32::from(n) - 1).unwrap_or('\u{05D0}')
}

/// Renders `number` as a Hebrew numeral.
///
/// With `decorated`, geresh follows the thousands letter (and a lone
/// letter), and gershayim precedes the final letter of multi-letter
/// numerals.
///
/// # Errors
///
/// Returns [`NumeralError::OutOfRange`] outside 1..=9999.
pub fn hebrew_numeral(number: u16, decorated: bool) -> Result<String, NumeralError> {
    if !(1..=9999).contains(&number) {
        return Err(NumeralError::OutOfRange { number });
    }
    let mut out = String::new();
    let mut n = number;
    while n > 0 {
        if n > 1000 {
            let thousands = n / 1000;
            n -= thousands * 1000;
            out.push(unit_letter(thousands));
            if decorated {
                out.push(GERESH);
            }
        } else if n >= 400 {
            out.push('ת');
            n -= 400;
        } else if n >= 300 {
            out.push('ש');
            n -= 300;
        } else if n >= 200 {
            out.push('ר');
            n -= 200;
        } else if n >= 100 {
            out.push('ק');
            n -= 100;
        } else if n >= 90 {
            out.push('צ');
            n -= 90;
        } else if n >= 80 {
            out.push('פ');
            n -= 80;
        } else if n >= 70 {
            out.push('ע');
            n -= 70;
        } else if n >= 60 {
            out.push('ס');
            n -= 60;
        } else if n >= 50 {
            out.push('נ');
            n -= 50;
        } else if n >= 40 {
            out.push('מ');
            n -= 40;
        } else if n >= 30 {
            out.push('ל');
            n -= 30;
        } else if n >= 20 {
            out.push('כ');
            n -= 20;
        } else if n >= 10 {
            // 15 and 16 avoid spelling the divine name: tet-vav and
            // tet-zayin instead of yod plus units.
            if n == 16 {
                out.push('ט');
                if decorated {
                    out.push(GERSHAYIM);
                }
                out.push('ז');
                n -= 16;
            } else if n == 15 {
                out.push('ט');
                if decorated {
                    out.push(GERSHAYIM);
                }
                out.push('ו');
                n -= 15;
            } else {
                out.push('י');
                n -= 10;
            }
        } else {
            if decorated && number > 10 {
                out.push(GERSHAYIM);
            }
            out.push(unit_letter(n));
            n = 0;
        }
        // A numeral that came out as a single letter takes a geresh.
        if n == 0 && decorated && out.chars().count() == 1 {
            out.push(GERESH);
        }
    }
    Ok(out)
}

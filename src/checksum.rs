//! Modulo 31 check character.

use crate::consts::{CHECKSUM_ALPHABET, CHECKSUM_MODULUS};

/// The nine digit number `DDMMYYNNN` the check character is computed from.
///
/// Every field has a fixed width (two digits, or three for the rolling id),
/// so positional arithmetic gives the same value as concatenating the
/// zero padded digits and reading them as one decimal number, leading zero
/// of the day included.
pub const fn checksum_base(day: u8, month: u8, two_digit_year: u8, rolling_id: u16) -> u32 {
    day as u32 * 10_000_000
        + month as u32 * 100_000
        + two_digit_year as u32 * 1_000
        + rolling_id as u32
}

/// Check character for a base number.
pub const fn checksum(base: u32) -> char {
    CHECKSUM_ALPHABET[(base % CHECKSUM_MODULUS) as usize] as char
}

/// True if `check` is the check character for `base`. Case sensitive.
pub const fn verify(base: u32, check: char) -> bool {
    checksum(base) == check
}

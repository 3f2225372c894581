//! Structural check of the `DDMMYYSNNNC` layout.
//!
//! The century sign constrains the two digit year to the window in which
//! codes with that sign have been issued: `+` only for 1850-1899 and
//! `A`-`F` only for 2000-2029.

use std::sync::LazyLock;

use regex::Regex;

/// Day, month, sign-coupled year, rolling id, check character. ASCII digits only.
static PIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0[1-9]|[12][0-9]|3[01])(0[1-9]|1[0-2])([5-9][0-9]\+|[0-9]{2}[-YXWVU]|[012][0-9][A-F])[0-9]{3}[0-9A-FHJ-NPR-Y]$",
    )
    .expect("Invalid personal identity code regex")
});

/// Returns true if `pic` has the shape of a personal identity code.
///
/// Passing this gate does not mean the date exists (31.04. passes) or that
/// the check character is right.
pub fn matches(pic: &str) -> bool {
    PIC_REGEX.is_match(pic)
}

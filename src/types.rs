use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use crate::{FEMALE, MALE, PicError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A resolved four digit birth year.
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "u16", into = "u16")]
#[display(fmt = "{}", _0)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year
    ///
    /// # Errors
    /// Returns `PicError::InvalidDate` if the value is 0.
    pub fn new(value: u16) -> Result<Self, PicError> {
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(PicError::InvalidDate {
                year: value,
                month: 0,
                day: 0,
            })
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Last two digits, as written in an identity code
    #[inline]
    pub const fn two_digit(self) -> u8 {
        // always < 100
        #[allow(clippy::cast_possible_truncation)]
        let yy = (self.0.get() % CENTURY_CYCLE) as u8;
        yy
    }

    /// First year of the century this year belongs to (1995 -> 1900)
    #[inline]
    pub const fn century(self) -> u16 {
        self.0.get() / CENTURY_CYCLE * CENTURY_CYCLE
    }
}

impl TryFrom<u16> for Year {
    type Error = PicError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[display(fmt = "{:02}", "_0.get()")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `PicError::InvalidDate` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, PicError> {
        let invalid = PicError::InvalidDate {
            year: 0,
            month: value,
            day: 0,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > MAX_MONTH {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Parses the zero padded two digit month code of an identity code ("02").
    ///
    /// # Errors
    /// Returns `PicError::InvalidDate` for anything but `01`..=`12`.
    pub fn from_code(code: &str) -> Result<Self, PicError> {
        let value = match code.as_bytes() {
            [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => (tens - b'0') * 10 + (ones - b'0'),
            _ => {
                return Err(PicError::InvalidDate {
                    year: 0,
                    month: 0,
                    day: 0,
                });
            }
        };
        Self::new(value)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = PicError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[serde(into = "u8")]
#[display(fmt = "{:02}", "_0.get()")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `PicError::InvalidDate` if the value is 0, the month is unknown,
    /// or the month of that year is shorter than `value`.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, PicError> {
        let invalid = PicError::InvalidDate {
            year,
            month,
            day: value,
        };

        let max_day = days_in_month(year, month).ok_or_else(|| invalid.clone())?;
        if !(MIN_DAY..=max_day).contains(&value) {
            return Err(invalid);
        }

        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

/// Sex encoded by the parity of the rolling id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Odd rolling id
    #[display(fmt = "male")]
    Male,
    /// Even rolling id
    #[display(fmt = "female")]
    Female,
}

impl Sex {
    /// Sex for a rolling id: odd is male, even is female
    #[inline]
    pub const fn from_rolling_id(rolling_id: u16) -> Self {
        if rolling_id % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Same text as `Display`, without allocating
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => MALE,
            Self::Female => FEMALE,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1..=12.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

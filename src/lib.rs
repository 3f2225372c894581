mod century;
mod checksum;
mod clock;
mod consts;
mod format;
mod generate;
mod prelude;
mod types;

pub use century::{CenturySign, SIGNS_1800, SIGNS_1900, SIGNS_2000, UnknownCenturySign};
pub use checksum::{checksum, checksum_base, verify};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use format::matches;
pub use generate::{RandomSource, generate_with_age, generate_with_age_using};
pub use types::{Day, Month, Sex, Year, days_in_month, is_leap_year};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why an identity code could not be parsed or generated.
///
/// Messages never contain the code itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PicError {
    /// The string does not have the `DDMMYYSNNNC` shape.
    #[error("Not valid PIC format: {0}")]
    InvalidFormat(String),

    /// The shape is right but the date does not exist.
    #[error("Not valid PIC: no day {day} in month {month:02} of {year}")]
    InvalidDate { year: u16, month: u8, day: u8 },

    /// The generator cannot produce a code for this age.
    #[error("No PIC can be generated for age {0} (sensible ages are {min}-{max})", min = MIN_AGE, max = MAX_AGE)]
    InvalidAge(i32),
}

/// A Finnish personal identity code (henkilötunnus) with a real birth date.
///
/// The check character is kept as given; use [`is_valid`](Self::is_valid)
/// to find out whether it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalIdentityCode {
    day: Day,
    month: Month,
    year: Year,
    sign: CenturySign,
    rolling_id: u16,
    check: char,
}

/// Everything an identity code says about its holder, as of some day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedPic {
    /// Check character matches the rest of the code
    pub valid: bool,
    pub sex: Sex,
    pub date_of_birth: NaiveDate,
    /// Completed years; negative for a birth date after today
    pub age_in_years: i32,
}

impl PersonalIdentityCode {
    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Full year, resolved through the century sign
    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn century_sign(&self) -> CenturySign {
        self.sign
    }

    /// The three digit individual number
    pub const fn rolling_id(&self) -> u16 {
        self.rolling_id
    }

    /// Check character as written in the code
    pub const fn check_char(&self) -> char {
        self.check
    }

    pub const fn sex(&self) -> Sex {
        Sex::from_rolling_id(self.rolling_id)
    }

    /// The nine digits `DDMMYYNNN` as a number
    pub const fn checksum_base(&self) -> u32 {
        checksum_base(
            self.day.get(),
            self.month.get(),
            self.year.two_digit(),
            self.rolling_id,
        )
    }

    /// True if the check character matches the rest of the code
    pub const fn is_valid(&self) -> bool {
        verify(self.checksum_base(), self.check)
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        // day, month and year have all been validated against the calendar
        NaiveDate::from_ymd_opt(
            i32::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(self.day.get()),
        )
        .unwrap_or(NaiveDate::MIN)
    }

    /// Completed years of age on `today`.
    ///
    /// One less than the difference in years until the birthday has been
    /// reached; someone born on 29.2. turns a year older on 1.3. in common years.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let born = (u32::from(self.month.get()), u32::from(self.day.get()));
        let birthday_passed = born <= (today.month(), today.day());
        today.year() - i32::from(self.year.get()) - i32::from(!birthday_passed)
    }

    /// Checksum validity, sex, birth date and age on the clock's today.
    pub fn describe(&self, clock: &(impl Clock + ?Sized)) -> ParsedPic {
        ParsedPic {
            valid: self.is_valid(),
            sex: self.sex(),
            date_of_birth: self.date_of_birth(),
            age_in_years: self.age_on(clock.today()),
        }
    }

    /// Reads `n` ASCII digits starting at `at`. Callers have passed the format gate.
    fn digits(bytes: &[u8], at: usize, n: usize) -> u16 {
        bytes[at..at + n]
            .iter()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }
}

impl FromStr for PersonalIdentityCode {
    type Err = PicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != PIC_LENGTH {
            tracing::debug!(len = s.len(), "rejected personal identity code: wrong length");
            return Err(PicError::InvalidFormat(format!(
                "expected {PIC_LENGTH} characters"
            )));
        }
        if !format::matches(s) {
            tracing::debug!("rejected personal identity code: malformed");
            return Err(PicError::InvalidFormat(
                "does not match DDMMYYSNNNC".to_owned(),
            ));
        }

        // the gate guarantees 11 ASCII characters
        let bytes = s.as_bytes();
        let sign = CenturySign::from_char(char::from(bytes[6]))
            .ok_or_else(|| PicError::InvalidFormat("unknown century sign".to_owned()))?;
        let month = Month::from_code(&s[2..4])?;
        // two digit values, always < 100
        #[allow(clippy::cast_possible_truncation)]
        let (day, yy) = (Self::digits(bytes, 0, 2) as u8, Self::digits(bytes, 4, 2));
        let rolling_id = Self::digits(bytes, 7, 3);
        let check = char::from(bytes[10]);

        let full_year = sign.century() + yy;
        let no_such_date = |_| {
            tracing::debug!("rejected personal identity code: no such date");
            PicError::InvalidDate {
                year: full_year,
                month: month.get(),
                day,
            }
        };
        let year = Year::new(full_year).map_err(no_such_date)?;
        let day = Day::new(day, full_year, month.get()).map_err(no_such_date)?;

        Ok(Self {
            day,
            month,
            year,
            sign,
            rolling_id,
            check,
        })
    }
}

impl fmt::Display for PersonalIdentityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:02}{}{:03}{}",
            self.day,
            self.month,
            self.year.two_digit(),
            self.sign,
            self.rolling_id,
            self.check
        )
    }
}

impl Serialize for PersonalIdentityCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PersonalIdentityCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses `pic`, computing the age against the system clock.
///
/// # Errors
/// `PicError::InvalidFormat` or `PicError::InvalidDate`. A wrong check
/// character is not an error; it shows up as `valid: false`.
pub fn parse(pic: &str) -> Result<ParsedPic, PicError> {
    parse_with_clock(pic, &SystemClock)
}

/// [`parse`] with the age computed against `clock`.
///
/// # Errors
/// Same as [`parse`].
pub fn parse_with_clock(pic: &str, clock: &(impl Clock + ?Sized)) -> Result<ParsedPic, PicError> {
    let code: PersonalIdentityCode = pic.parse()?;
    Ok(code.describe(clock))
}

/// True only for a well formed code with a real date and the right check character.
pub fn validate(pic: &str) -> bool {
    pic.parse::<PersonalIdentityCode>()
        .is_ok_and(|code| code.is_valid())
}

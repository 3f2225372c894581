//! Synthesizes personal identity codes for a requested age.

use std::cmp::Ordering;

use chrono::Datelike;
use rand::Rng;

use crate::checksum::{checksum, checksum_base};
use crate::clock::{Clock, SystemClock};
use crate::consts::{
    JANUARY, MAX_AGE, MAX_DAY, MAX_GENERATED_ROLLING_ID, MAX_MONTH, MIN_AGE, MIN_DAY,
    MIN_GENERATED_ROLLING_ID,
};
use crate::types::{Year, days_in_month};
use crate::{CenturySign, PicError, format};

/// Uniform integer draws for the generator.
///
/// Implemented for every [`rand::Rng`], so a seeded `StdRng` gives
/// reproducible codes.
pub trait RandomSource {
    /// A value in `low..=high`.
    fn pick(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

/// Generates a random valid code for someone who is `age` years old today.
///
/// # Errors
/// `PicError::InvalidAge` if `age` is outside `1..=200` or no birth date
/// giving that age falls in the issuance window of any century sign.
pub fn generate_with_age(age: i32) -> Result<String, PicError> {
    generate_with_age_using(age, &SystemClock, &mut rand::thread_rng())
}

/// [`generate_with_age`] with an explicit clock and random source.
///
/// # Errors
/// Same as [`generate_with_age`].
pub fn generate_with_age_using<C, R>(age: i32, clock: &C, rng: &mut R) -> Result<String, PicError>
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        tracing::debug!(age, "requested age out of range");
        return Err(PicError::InvalidAge(age));
    }

    let today = clock.today();
    let (today_month, today_day) = (today.month(), today.day());
    let age_year = today.year() - age;

    // Someone who is `age` today was born in `age_year` on a (month, day) up to
    // today's, and in the year before on a later one. Only years some century
    // sign can encode are eligible.
    let passed = encodable(age_year);
    let upcoming = encodable(age_year - 1);

    // Last day of `month` that still falls in the `passed` year.
    let split = |month: u8| match u32::from(month).cmp(&today_month) {
        Ordering::Less => MAX_DAY,
        Ordering::Equal => u8::try_from(today_day).unwrap_or(MAX_DAY),
        Ordering::Greater => 0,
    };

    let mut months = [(0u8, 0u8, 0u8); MAX_MONTH as usize];
    let mut eligible = 0;
    for month in JANUARY..=MAX_MONTH {
        if let Some((first, last)) = eligible_days(month, split(month), passed, upcoming) {
            months[eligible] = (month, first, last);
            eligible += 1;
        }
    }
    if eligible == 0 {
        tracing::debug!(age, "no encodable birth date for age");
        return Err(PicError::InvalidAge(age));
    }

    let (month, first, last) = months[pick_index(rng, eligible)];
    let day = pick_u8(rng, first, last);
    let year = (if day <= split(month) { passed } else { upcoming })
        .ok_or(PicError::InvalidAge(age))?;

    let signs = CenturySign::for_year(year.get()).ok_or(PicError::InvalidAge(age))?;
    let sign = signs[pick_index(rng, signs.len())];

    let rolling_id = pick_u16(rng, MIN_GENERATED_ROLLING_ID, MAX_GENERATED_ROLLING_ID);
    let yy = year.two_digit();
    let check = checksum(checksum_base(day, month, yy, rolling_id));

    let pic = format!("{day:02}{month:02}{yy:02}{sign}{rolling_id:03}{check}");
    debug_assert!(format::matches(&pic), "generated code fails the format gate");

    tracing::trace!(age, century = year.century(), %sign, "generated personal identity code");
    Ok(pic)
}

/// `year` as a birth year, if some century sign can encode it.
fn encodable(year: i32) -> Option<Year> {
    let year = u16::try_from(year).ok()?;
    CenturySign::for_year(year)?;
    Year::new(year).ok()
}

/// Eligible days of `month`: up to `split` in the `passed` year, after it in
/// the `upcoming` year. The two spans are adjacent, so their union is one range.
fn eligible_days(
    month: u8,
    split: u8,
    passed: Option<Year>,
    upcoming: Option<Year>,
) -> Option<(u8, u8)> {
    let days_in = |year: Year| days_in_month(year.get(), month).unwrap_or(0);

    let early = passed.and_then(|year| {
        let last = split.min(days_in(year));
        (last >= MIN_DAY).then_some((MIN_DAY, last))
    });
    let late = upcoming.and_then(|year| {
        let first = split + 1;
        let last = days_in(year);
        (first <= last).then_some((first, last))
    });

    match (early, late) {
        (Some((first, _)), Some((_, last))) => Some((first, last)),
        (range, None) | (None, range) => range,
    }
}

// The draws below never exceed their `high` bound, so the narrowing is lossless.

#[allow(clippy::cast_possible_truncation)]
fn pick_u8<R: RandomSource + ?Sized>(rng: &mut R, low: u8, high: u8) -> u8 {
    rng.pick(u32::from(low), u32::from(high)) as u8
}

#[allow(clippy::cast_possible_truncation)]
fn pick_u16<R: RandomSource + ?Sized>(rng: &mut R, low: u32, high: u32) -> u16 {
    rng.pick(low, high) as u16
}

#[allow(clippy::cast_possible_truncation)]
fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.pick(0, len.saturating_sub(1) as u32) as usize
}

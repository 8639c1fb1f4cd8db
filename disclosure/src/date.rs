//! `YYMMDD` date fields.
//!
//! Only two year digits are stored, so decoding needs a reference year to
//! pick the century. A two-digit year lands in the reference year's century
//! unless that puts it more than ten years past the reference year, in which
//! case it moves back one century. Birth dates therefore land in the past
//! while expiry dates up to ten years ahead stay in the future.

use std::ops::Range;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use crate::error::Error;

/// Number of ASCII characters in an encoded date.
pub const DATE_WIDTH: usize = 6;

const LOOKAHEAD_YEARS: i32 = 10;

/// The calendar year two-digit years are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReferenceYear(i32);

impl ReferenceYear {
    pub fn new(year: i32) -> Self {
        ReferenceYear(year)
    }

    /// The current year on the local clock.
    pub fn current() -> Self {
        ReferenceYear(chrono::Local::now().year())
    }

    pub fn year(self) -> i32 {
        self.0
    }

    /// Turns a two-digit year (0-99) into a full year.
    ///
    /// Returns `None` for a value above 99 or when the result does not fit
    /// in an `i32`.
    pub fn resolve(self, two_digit_year: u8) -> Option<i32> {
        if two_digit_year > 99 {
            return None;
        }
        let century = self.0.div_euclid(100).checked_mul(100)?;
        let candidate = century.checked_add(i32::from(two_digit_year))?;
        if candidate > self.0.saturating_add(LOOKAHEAD_YEARS) {
            candidate.checked_sub(100)
        } else {
            Some(candidate)
        }
    }
}

impl From<i32> for ReferenceYear {
    fn from(year: i32) -> Self {
        ReferenceYear(year)
    }
}

/// Parses `YYMMDD` text that has already had its filler stripped.
///
/// Empty text means the date was not disclosed and gives `None`. A day past
/// the end of its month rolls into the next month (`Feb 30` is `Mar 1` or
/// `Mar 2`), but month and day must still be in `1..=12` and `1..=31`.
pub fn parse_date(text: &str, reference: ReferenceYear) -> Result<Option<NaiveDate>, Error> {
    if text.is_empty() {
        return Ok(None);
    }
    if text.len() != DATE_WIDTH {
        return Err(Error::DateLength(text.to_string()));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::DateNotNumeric(text.to_string()));
    }

    fn component<T: FromStr>(text: &str, range: Range<usize>) -> Result<T, Error> {
        text[range]
            .parse()
            .map_err(|_| Error::DateNotNumeric(text.to_string()))
    }
    let two_digit_year: u8 = component(text, 0..2)?;
    let month: u32 = component(text, 2..4)?;
    let day: u32 = component(text, 4..6)?;

    if !(1..=12).contains(&month) {
        return Err(Error::DateMonthOutOfRange(month));
    }
    if !(1..=31).contains(&day) {
        return Err(Error::DateDayOutOfRange(day));
    }

    let year = reference
        .resolve(two_digit_year)
        .ok_or(Error::ReferenceYearOutOfRange(reference.year()))?;
    let out_of_range = || Error::DateOutOfRange { year, month, day };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    first
        .checked_add_days(Days::new(u64::from(day - 1)))
        .map(Some)
        .ok_or_else(out_of_range)
}

/// Formats a date as `YYMMDD` ASCII bytes. The century is dropped.
pub fn format_date(date: NaiveDate) -> Vec<u8> {
    format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
    .into_bytes()
}

//! Solar Hijri (Jalali) calendar date.

use crate::consts::{JALALI_EPOCH_YEAR, JALALI_MONTH_NAMES, MAX_MONTH, MAX_YEAR, MIN_DAY};
use crate::day_number;
use crate::error::DateError;
use crate::fmt::{format_jalali, parse_ymd};
use crate::gregorian::GregorianDate;
use crate::prelude::*;
use crate::types::{Unit, Weekday, jalali_days_in_month};
use std::str::FromStr;

/// A date in the Solar Hijri (Jalali) calendar.
///
/// Immutable value type; the constructor validates the year range and the
/// month/day bounds, so every held date is legal. Supported years are
/// 979..=9999 (year 979 begins at Gregorian 1600-03-20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct JalaliDate {
    year: u16,
    month: u8,
    day: u8,
}

impl JalaliDate {
    /// Creates a new `JalaliDate`, validating all fields.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidYear`], [`DateError::InvalidMonth`], or
    /// [`DateError::InvalidDay`] when a field is out of bounds. Esfand 30
    /// is accepted only in Jalali leap years; invalid day-of-month values
    /// are rejected, never wrapped or clamped.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(JALALI_EPOCH_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear {
                year,
                min: JALALI_EPOCH_YEAR,
                max: MAX_YEAR,
            });
        }
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        let max_day = jalali_days_in_month(year, month);
        if !(MIN_DAY..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid
    /// (decoder output).
    pub(crate) const fn from_parts(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1..=12).
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the transliterated month name (Farvardin..Esfand).
    pub const fn month_name(self) -> &'static str {
        JALALI_MONTH_NAMES[self.month as usize - 1]
    }

    /// Returns the weekday, derived from the absolute day number.
    ///
    /// Both calendars share the same weekday numbering because a day number
    /// difference of 7 preserves the weekday regardless of calendar.
    pub fn weekday(self) -> Weekday {
        day_number::weekday(self.day_number())
    }

    /// Days since Gregorian 1600-01-01.
    pub(crate) fn day_number(self) -> i32 {
        day_number::from_jalali(self.year, self.month, self.day)
    }

    /// Converts this date to the Gregorian calendar.
    ///
    /// # Errors
    /// Returns [`DateError::OutOfRange`] when the Gregorian year would
    /// exceed 9999 (Jalali years past 9377).
    pub fn to_gregorian(self) -> Result<GregorianDate, DateError> {
        let (year, month, day) = day_number::to_gregorian(self.day_number());
        if year > i32::from(MAX_YEAR) {
            return Err(DateError::OutOfRange);
        }
        Ok(GregorianDate::from_parts(year as u16, month, day))
    }

    /// Returns this date shifted by `amount` of `unit`.
    ///
    /// The shift happens on the Gregorian side: the date is converted,
    /// adjusted there, and converted back, so month and year arithmetic
    /// follow Gregorian month boundaries.
    ///
    /// # Errors
    /// Returns [`DateError::OutOfRange`] or [`DateError::BeforeJalaliEpoch`]
    /// when the result leaves the supported range.
    pub fn checked_add(self, amount: i64, unit: Unit) -> Result<Self, DateError> {
        self.to_gregorian()?.checked_add(amount, unit)?.to_jalali()
    }

    /// Renders the date through a pattern string; see the crate docs for
    /// the recognized codes.
    pub fn format(&self, pattern: &str) -> String {
        format_jalali(self, pattern)
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    /// Parses a strict `YYYY-MM-DD` string and validates the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for JalaliDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Gregorian calendar date.

use crate::consts::{
    DAYS_PER_WEEK, GREGORIAN_EPOCH_YEAR, GREGORIAN_MONTH_NAMES, HOURS_PER_DAY, JALALI_EPOCH_OFFSET,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MINUTES_PER_DAY, MONTHS_PER_YEAR, SECONDS_PER_DAY,
};
use crate::day_number;
use crate::error::DateError;
use crate::fmt::parse_ymd;
use crate::jalali::JalaliDate;
use crate::prelude::*;
use crate::types::{Unit, Weekday, gregorian_days_in_month};
use std::str::FromStr;

/// A date in the proleptic Gregorian calendar.
///
/// Immutable value type; the constructor validates the year range and the
/// month/day bounds, so every held date is legal. Supported years are
/// 1600..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: u16,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate`, validating all fields.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidYear`], [`DateError::InvalidMonth`], or
    /// [`DateError::InvalidDay`] when a field is out of bounds. Invalid
    /// day-of-month values are rejected, never wrapped or clamped.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(GREGORIAN_EPOCH_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear {
                year,
                min: GREGORIAN_EPOCH_YEAR,
                max: MAX_YEAR,
            });
        }
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        let max_day = gregorian_days_in_month(year, month);
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

    /// Returns the English month name.
    pub const fn month_name(self) -> &'static str {
        GREGORIAN_MONTH_NAMES[self.month as usize - 1]
    }

    /// Returns the weekday, derived from the absolute day number.
    pub fn weekday(self) -> Weekday {
        day_number::weekday(self.day_number())
    }

    /// Days since Gregorian 1600-01-01.
    pub(crate) fn day_number(self) -> i32 {
        day_number::from_gregorian(self.year, self.month, self.day)
    }

    /// Converts this date to the Jalali calendar.
    ///
    /// # Errors
    /// Returns [`DateError::BeforeJalaliEpoch`] for the handful of
    /// representable dates preceding Jalali 979-01-01 (Gregorian
    /// 1600-01-01..=1600-03-19).
    pub fn to_jalali(self) -> Result<JalaliDate, DateError> {
        let dn = self.day_number();
        if dn < JALALI_EPOCH_OFFSET {
            return Err(DateError::BeforeJalaliEpoch {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        let (year, month, day) = day_number::to_jalali(dn);
        Ok(JalaliDate::from_parts(year, month, day))
    }

    /// Returns this date shifted by `amount` of `unit`.
    ///
    /// Months and years keep the day-of-month, clamping it to the length of
    /// the target month (1600-01-31 plus one month is 1600-02-29). Sub-day
    /// units floor-divide into whole days, anchored at midnight.
    ///
    /// # Errors
    /// Returns [`DateError::OutOfRange`] when the result leaves the
    /// supported year range.
    pub fn checked_add(self, amount: i64, unit: Unit) -> Result<Self, DateError> {
        match unit {
            Unit::Years => self.shift_months(
                amount
                    .checked_mul(MONTHS_PER_YEAR)
                    .ok_or(DateError::OutOfRange)?,
            ),
            Unit::Months => self.shift_months(amount),
            Unit::Weeks => self.shift_days(
                amount
                    .checked_mul(DAYS_PER_WEEK)
                    .ok_or(DateError::OutOfRange)?,
            ),
            Unit::Days => self.shift_days(amount),
            Unit::Hours => self.shift_days(amount.div_euclid(HOURS_PER_DAY)),
            Unit::Minutes => self.shift_days(amount.div_euclid(MINUTES_PER_DAY)),
            Unit::Seconds => self.shift_days(amount.div_euclid(SECONDS_PER_DAY)),
        }
    }

    fn shift_days(self, days: i64) -> Result<Self, DateError> {
        let dn = i64::from(self.day_number())
            .checked_add(days)
            .ok_or(DateError::OutOfRange)?;
        let dn = i32::try_from(dn).map_err(|_| DateError::OutOfRange)?;
        if dn < 0 {
            return Err(DateError::OutOfRange);
        }
        let (year, month, day) = day_number::to_gregorian(dn);
        if year > i32::from(MAX_YEAR) {
            return Err(DateError::OutOfRange);
        }
        Ok(Self::from_parts(year as u16, month, day))
    }

    fn shift_months(self, months: i64) -> Result<Self, DateError> {
        let index = (i64::from(self.year) * MONTHS_PER_YEAR + i64::from(self.month) - 1)
            .checked_add(months)
            .ok_or(DateError::OutOfRange)?;
        let year = index.div_euclid(MONTHS_PER_YEAR);
        let month = (index.rem_euclid(MONTHS_PER_YEAR) + 1) as u8;
        if !(i64::from(GREGORIAN_EPOCH_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
            return Err(DateError::OutOfRange);
        }
        let year = year as u16;
        let day = self.day.min(gregorian_days_in_month(year, month));
        Ok(Self::from_parts(year, month, day))
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses a strict `YYYY-MM-DD` string and validates the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

use crate::consts::{
    ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_DAYS_IN_MONTH,
    JALALI_CYCLE_YEARS, JALALI_DAYS_IN_MONTH, JALALI_EPOCH_YEAR, JALALI_WEEKDAY_NAMES, MAX_MONTH,
};
use crate::error::DateError;
use crate::prelude::*;
use std::str::FromStr;

/// Day of the week, numbered 0..=6 starting from Sunday.
///
/// The numbering matches the Gregorian-style convention used by the
/// conversion algorithm; both calendars share it because weekdays are
/// derived from the absolute day number rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    /// Returns the weekday number (0 = Sunday, ..., 6 = Saturday).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the transliterated Persian name of the weekday.
    pub const fn persian_name(self) -> &'static str {
        JALALI_WEEKDAY_NAMES[self as usize]
    }

    /// Builds a `Weekday` from a number already reduced modulo 7.
    pub(crate) const fn from_number(number: u8) -> Self {
        match number {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

/// Adjustment unit accepted by `checked_add` on both date types.
///
/// Sub-day units shift the date by whole days only, anchored at midnight:
/// 24 hours make a day and fractions floor towards earlier dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "seconds")]
    Seconds,
}

impl FromStr for Unit {
    type Err = DateError;

    /// Parses a unit name, case-insensitively, singular or plural.
    ///
    /// # Errors
    /// Returns [`DateError::UnsupportedUnit`] for any unrecognized designator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" | "years" => Ok(Self::Years),
            "month" | "months" => Ok(Self::Months),
            "week" | "weeks" => Ok(Self::Weeks),
            "day" | "days" => Ok(Self::Days),
            "hour" | "hours" => Ok(Self::Hours),
            "minute" | "minutes" => Ok(Self::Minutes),
            "second" | "seconds" => Ok(Self::Seconds),
            _ => Err(DateError::UnsupportedUnit(s.to_owned())),
        }
    }
}

// --- leap rules and month lengths ---

/// Gregorian leap rule: every 4th year, skipping centuries not divisible by 400.
pub const fn is_gregorian_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Jalali leap rule as implied by the 33-year sub-cycle arithmetic:
/// 8 leap years per cycle, at offsets 0, 4, 8, ..., 28 from the epoch year.
pub const fn is_jalali_leap_year(year: u16) -> bool {
    let offset = (year as i32 - JALALI_EPOCH_YEAR as i32).rem_euclid(JALALI_CYCLE_YEARS);
    offset % 4 == 0 && offset != 32
}

/// Number of days in the given Gregorian month.
pub const fn gregorian_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in the given Jalali month.
pub const fn jalali_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_numbers() {
        assert_eq!(Weekday::Sunday.number(), 0);
        assert_eq!(Weekday::Wednesday.number(), 3);
        assert_eq!(Weekday::Saturday.number(), 6);
    }

    #[test]
    fn test_weekday_from_number_roundtrip() {
        for n in 0..7u8 {
            assert_eq!(Weekday::from_number(n).number(), n);
        }
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
    }

    #[test]
    fn test_weekday_persian_names() {
        assert_eq!(Weekday::Saturday.persian_name(), "Shanbeh");
        assert_eq!(Weekday::Sunday.persian_name(), "Yekshanbeh");
        assert_eq!(Weekday::Friday.persian_name(), "Jomeh");
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("day".parse::<Unit>().unwrap(), Unit::Days);
        assert_eq!("Days".parse::<Unit>().unwrap(), Unit::Days);
        assert_eq!("YEARS".parse::<Unit>().unwrap(), Unit::Years);
        assert_eq!(" month ".parse::<Unit>().unwrap(), Unit::Months);
        assert_eq!("week".parse::<Unit>().unwrap(), Unit::Weeks);
        assert_eq!("hours".parse::<Unit>().unwrap(), Unit::Hours);
        assert_eq!("minute".parse::<Unit>().unwrap(), Unit::Minutes);
        assert_eq!("seconds".parse::<Unit>().unwrap(), Unit::Seconds);
    }

    #[test]
    fn test_unit_from_str_unsupported() {
        let result = "fortnight".parse::<Unit>();
        assert!(matches!(result, Err(DateError::UnsupportedUnit(_))));

        let result = "".parse::<Unit>();
        assert!(matches!(result, Err(DateError::UnsupportedUnit(_))));
    }

    #[test]
    fn test_is_gregorian_leap_year_cases() {
        for (year, expected) in [
            (2020, true),  // divisible by 4
            (2024, true),  // divisible by 4
            (2021, false), // not divisible by 4
            (2023, false), // not divisible by 4
            (1900, false), // century not divisible by 400
            (2100, false), // century not divisible by 400
            (1600, true),  // divisible by 400
            (2000, true),  // divisible by 400
        ] {
            assert_eq!(is_gregorian_leap_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn test_is_jalali_leap_year_cases() {
        for (year, expected) in [
            (979, true),   // cycle offset 0
            (1395, true),  // offset 20
            (1399, true),  // offset 24
            (1400, false), // offset 25
            (1402, false), // offset 27
            (1403, true),  // offset 28
            (1404, false), // offset 29
            (1408, true),  // offset 0 of the next cycle
            (1011, false), // offset 32: divisible by 4 but excluded
        ] {
            assert_eq!(is_jalali_leap_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn test_jalali_leap_density() {
        // exactly 8 leap years in any aligned 33-year window
        let leaps = (979..979 + 33).filter(|&y| is_jalali_leap_year(y)).count();
        assert_eq!(leaps, 8);
    }

    #[test]
    fn test_gregorian_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(gregorian_days_in_month(2023, month), 31, "month {month}");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(gregorian_days_in_month(2023, month), 30, "month {month}");
        }
        assert_eq!(gregorian_days_in_month(2023, 2), 28);
        assert_eq!(gregorian_days_in_month(2024, 2), 29);
        assert_eq!(gregorian_days_in_month(1900, 2), 28);
        assert_eq!(gregorian_days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_jalali_days_in_month() {
        for month in 1..=6 {
            assert_eq!(jalali_days_in_month(1402, month), 31, "month {month}");
        }
        for month in 7..=11 {
            assert_eq!(jalali_days_in_month(1402, month), 30, "month {month}");
        }
        assert_eq!(jalali_days_in_month(1402, 12), 29);
        assert_eq!(jalali_days_in_month(1403, 12), 30);
    }
}

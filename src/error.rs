//! Error type shared by date construction, parsing, conversion, and arithmetic.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Returned when a year is outside the supported range of its calendar.
    #[error("invalid year: {year} (must be {min}..={max})")]
    InvalidYear {
        /// The invalid year that was provided.
        year: u16,
        /// The earliest supported year of the calendar.
        min: u16,
        /// The latest supported year of the calendar.
        max: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for month {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The year containing the month.
        year: u16,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when converting a Gregorian date that falls before the
    /// first supported Jalali day (979-01-01, i.e. Gregorian 1600-03-20).
    #[error("date {year}-{month:02}-{day:02} precedes the Jalali epoch (Gregorian 1600-03-20)")]
    BeforeJalaliEpoch {
        /// The Gregorian year of the unconvertible date.
        year: u16,
        /// The Gregorian month of the unconvertible date.
        month: u8,
        /// The Gregorian day of the unconvertible date.
        day: u8,
    },

    /// Returned when a conversion or adjustment result falls outside the
    /// supported year range.
    #[error("resulting date falls outside the supported range")]
    OutOfRange,

    /// Returned when an adjustment unit designator is not recognized.
    #[error("unsupported adjustment unit: {0:?}")]
    UnsupportedUnit(String),

    /// Returned when a date string does not have the expected shape.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),

    /// Returned when a date string is empty.
    #[error("empty date string")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year() {
        let err = DateError::InvalidYear {
            year: 978,
            min: 979,
            max: 9999,
        };
        assert_eq!(err.to_string(), "invalid year: 978 (must be 979..=9999)");
    }

    #[test]
    fn error_invalid_month() {
        let err = DateError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = DateError::InvalidDay {
            year: 1402,
            month: 12,
            day: 30,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 1402-12 (max 29)");
    }

    #[test]
    fn error_before_jalali_epoch() {
        let err = DateError::BeforeJalaliEpoch {
            year: 1600,
            month: 1,
            day: 1,
        };
        assert_eq!(
            err.to_string(),
            "date 1600-01-01 precedes the Jalali epoch (Gregorian 1600-03-20)"
        );
    }

    #[test]
    fn error_unsupported_unit() {
        let err = DateError::UnsupportedUnit("fortnight".to_owned());
        assert_eq!(err.to_string(), "unsupported adjustment unit: \"fortnight\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DateError>();
    }
}

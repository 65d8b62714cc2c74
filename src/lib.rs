//! Convert dates between the proleptic Gregorian calendar and the Solar
//! Hijri (Jalali) calendar using pure integer day-counting arithmetic.
//!
//! Both directions route through an absolute day number (days elapsed since
//! Gregorian 1600-01-01): a date is encoded with its own calendar's leap
//! rules and decoded with the other's, so there is no per-year lookup table
//! and the two directions cannot drift apart. Supported years are
//! 1600..=9999 Gregorian and 979..=9999 Jalali.
//!
//! # Examples
//!
//! ```
//! use jalali_date::{GregorianDate, JalaliDate, Weekday};
//!
//! let nowruz = GregorianDate::new(1979, 3, 21)?.to_jalali()?;
//! assert_eq!((nowruz.year(), nowruz.month(), nowruz.day()), (1358, 1, 1));
//! assert_eq!(nowruz.weekday(), Weekday::Wednesday);
//!
//! let back = nowruz.to_gregorian()?;
//! assert_eq!(back.to_string(), "1979-03-21");
//!
//! let esfand = JalaliDate::new(1403, 12, 30)?; // leap year, Esfand has 30 days
//! assert_eq!(esfand.to_gregorian()?.to_string(), "2025-03-20");
//! # Ok::<(), jalali_date::DateError>(())
//! ```
//!
//! Dates parse from and display as `YYYY-MM-DD`, and [`JalaliDate::format`]
//! understands the pattern codes `d`, `j`, `w`, `m`, `F`, `y`, and `Y`:
//!
//! ```
//! use jalali_date::JalaliDate;
//!
//! let date: JalaliDate = "1403-05-17".parse()?;
//! assert_eq!(date.format("j F Y"), "17 Mordad 1403");
//! # Ok::<(), jalali_date::DateError>(())
//! ```

mod consts;
mod day_number;
mod error;
mod fmt;
mod gregorian;
mod jalali;
mod prelude;
mod types;

pub use consts::*;
pub use error::DateError;
pub use gregorian::GregorianDate;
pub use jalali::JalaliDate;
pub use types::{
    Unit, Weekday, gregorian_days_in_month, is_gregorian_leap_year, is_jalali_leap_year,
    jalali_days_in_month,
};

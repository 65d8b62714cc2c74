/// Maximum valid year (inclusive) for either calendar
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// The Gregorian year whose January 1st is day number 0.
/// Also the earliest supported Gregorian year.
pub const GREGORIAN_EPOCH_YEAR: u16 = 1600;

/// The Jalali year beginning at day number 79 (Gregorian 1600-03-20).
/// Also the earliest supported Jalali year.
pub const JALALI_EPOCH_YEAR: u16 = 979;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;

/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for Jalali leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Gregorian month of a non-leap year (index 0 unused,
/// months are 1-indexed). February is adjusted by the leap-year check.
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Jalali month of a non-leap year (index 0 unused,
/// months are 1-indexed). Esfand is adjusted by the leap-year check.
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_jalali_leap_year check)
];

/// English month names, January first
pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Transliterated Jalali month names, Farvardin first
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Transliterated Persian weekday names, indexed by [`Weekday`] number
/// (0 = Sunday = Yekshanbeh).
///
/// [`Weekday`]: crate::Weekday
pub const JALALI_WEEKDAY_NAMES: [&str; 7] = [
    "Yekshanbeh",
    "Doshanbeh",
    "Seshanbeh",
    "Chaharshanbeh",
    "Panjshanbeh",
    "Jomeh",
    "Shanbeh",
];

/// Days between the Gregorian epoch (1600-01-01) and the Jalali epoch
/// (979-01-01 = 1600-03-20).
pub(crate) const JALALI_EPOCH_OFFSET: i32 = 79;

/// Days in 4 Jalali or Gregorian years including one leap year
pub(crate) const DAYS_PER_4_YEARS: i32 = 1461;
/// Days in the 33-year Jalali sub-cycle (25 non-leap + 8 leap years)
pub(crate) const DAYS_PER_33_YEARS: i32 = 12_053;
/// Days in a Gregorian century without its grand leap day
pub(crate) const DAYS_PER_CENTURY: i32 = 36_524;
/// Days in the full 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;
/// Years in the Jalali leap sub-cycle
pub(crate) const JALALI_CYCLE_YEARS: i32 = 33;

/// Sub-day unit conversions, floor-divided into whole days by date arithmetic
pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MINUTES_PER_DAY: i64 = 1_440;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
/// Days added per week by date arithmetic
pub(crate) const DAYS_PER_WEEK: i64 = 7;
/// Months per year for month-index arithmetic
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

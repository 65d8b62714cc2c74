//! Date-string parsing and the Jalali pattern formatter.

use crate::consts::{DATE_SEPARATOR, JALALI_MONTH_NAMES};
use crate::error::DateError;
use crate::jalali::JalaliDate;

/// Splits a strict `YYYY-MM-DD` string into its numeric components.
///
/// Components are trimmed, so `" 1403 - 05 - 17 "` parses; the separator
/// count and numeric shape are enforced, range validation is the caller's.
pub(crate) fn parse_ymd(s: &str) -> Result<(u16, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(DateError::InvalidFormat(format!(
            "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed:?}"
        )));
    }

    let year = parse_u16(parts[0])?;
    let month = parse_u8(parts[1])?;
    let day = parse_u8(parts[2])?;
    Ok((year, month, day))
}

fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Renders a Jalali date through a pattern string.
///
/// Recognized codes: `d` (zero-padded day), `j` (day), `w` (weekday name),
/// `m` (zero-padded month), `F` (month name), `y` (two-digit year), `Y`
/// (full year). Every other character is copied through unchanged.
pub(crate) fn format_jalali(date: &JalaliDate, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for code in pattern.chars() {
        match code {
            'd' => out.push_str(&format!("{:02}", date.day())),
            'j' => out.push_str(&date.day().to_string()),
            'w' => out.push_str(date.weekday().persian_name()),
            'm' => out.push_str(&format!("{:02}", date.month())),
            'F' => out.push_str(JALALI_MONTH_NAMES[usize::from(date.month()) - 1]),
            'y' => out.push_str(&format!("{:02}", date.year() % 100)),
            'Y' => out.push_str(&format!("{:04}", date.year())),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ymd_valid() {
        assert_eq!(parse_ymd("1403-05-17").unwrap(), (1403, 5, 17));
        assert_eq!(parse_ymd("2024-3-1").unwrap(), (2024, 3, 1));
        assert_eq!(parse_ymd(" 1403 - 05 - 17 ").unwrap(), (1403, 5, 17));
    }

    #[test]
    fn test_parse_ymd_empty() {
        assert!(matches!(parse_ymd(""), Err(DateError::EmptyInput)));
        assert!(matches!(parse_ymd("   "), Err(DateError::EmptyInput)));
    }

    #[test]
    fn test_parse_ymd_wrong_shape() {
        assert!(matches!(
            parse_ymd("1403-05"),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ymd("1403-05-17-23"),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ymd("1403/05/17"),
            Err(DateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_ymd_non_numeric() {
        assert!(matches!(
            parse_ymd("140X-05-17"),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ymd("1403-xx-17"),
            Err(DateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_format_codes() {
        // 1403-05-17 is Gregorian 2024-08-07, a Wednesday
        let date = JalaliDate::new(1403, 5, 17).unwrap();
        assert_eq!(date.format("Y-m-d"), "1403-05-17");
        assert_eq!(date.format("j F Y"), "17 Mordad 1403");
        assert_eq!(date.format("y/m/d"), "03/05/17");
        assert_eq!(date.format("w"), "Chaharshanbeh");
    }

    #[test]
    fn test_format_passes_unknown_chars_through() {
        let date = JalaliDate::new(1400, 1, 9).unwrap();
        assert_eq!(date.format("[Y] j?"), "[1400] 9?");
    }
}

//! Date token parsing.
//!
//! Accepts `[-]<year>-<month>-<day>` where each field is a run of ASCII
//! digits. A single leading `-` before the year is absorbed without
//! negating anything, and a negative year is stored as its magnitude.
//! Fields may carry a leading `+`.

use crate::date::Date;
use crate::error::{DateError, DateResult};

const SEPARATOR: char = '-';

/// Parse a whitespace-free date token into a `Date`.
///
/// Shape problems (missing separator, non-numeric or overflowing field,
/// trailing characters, empty input) are `BadFormat`. Out-of-range month
/// or day values are reported by `Date::new` as `InvalidDate`.
pub fn parse_date(token: &str) -> DateResult<Date> {
    let bad_format = || DateError::BadFormat(token.to_string());

    let rest = token.strip_prefix(SEPARATOR).unwrap_or(token);

    let (year, rest) = take_year(rest).ok_or_else(bad_format)?;
    let rest = skip_separator(rest).ok_or_else(bad_format)?;
    let (month, rest) = take_number(rest).ok_or_else(bad_format)?;
    let rest = skip_separator(rest).ok_or_else(bad_format)?;
    let (day, rest) = take_number(rest).ok_or_else(bad_format)?;

    if !rest.is_empty() {
        return Err(bad_format());
    }

    Date::new(year, month, day)
}

/// Year may be signed; the sign only affects how it is read, not the value.
fn take_year(s: &str) -> Option<(u32, &str)> {
    match s.strip_prefix('-') {
        Some(negative) => take_digits(negative),
        None => take_number(s),
    }
}

fn take_number(s: &str) -> Option<(u32, &str)> {
    take_digits(s.strip_prefix('+').unwrap_or(s))
}

fn take_digits(s: &str) -> Option<(u32, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

fn skip_separator(s: &str) -> Option<&str> {
    s.strip_prefix(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateField;

    fn date(year: u32, month: u32, day: u32) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_date("2017-11-18"), Ok(date(2017, 11, 18)));
        assert_eq!(parse_date("1-1-1"), Ok(date(1, 1, 1)));
        assert_eq!(parse_date("0-0-0"), Ok(date(0, 0, 0)));
    }

    #[test]
    fn test_parse_allows_unpadded_and_zero_padded_fields() {
        assert_eq!(parse_date("2017-01-08"), Ok(date(2017, 1, 8)));
        assert_eq!(parse_date("02017-1-8"), Ok(date(2017, 1, 8)));
    }

    #[test]
    fn test_leading_hyphen_is_absorbed() {
        assert_eq!(parse_date("-2017-11-18"), Ok(date(2017, 11, 18)));
    }

    #[test]
    fn test_negative_year_becomes_magnitude() {
        assert_eq!(parse_date("--2017-11-18"), Ok(date(2017, 11, 18)));
    }

    #[test]
    fn test_plus_signs_accepted() {
        assert_eq!(parse_date("+2017-+1-+8"), Ok(date(2017, 1, 8)));
    }

    #[test]
    fn test_bad_format_cases() {
        for token in [
            "",
            "abc",
            "2017",
            "2017-11",
            "2017-11-",
            "2017-11-18-",
            "2017-1a-18",
            "2017-11-18x",
            "2017/11/18",
            "---2017-11-18",
            "2017--1-18",
            "2017-11--18",
            "-",
            "--",
            "+-2017-1-1",
        ] {
            assert_eq!(
                parse_date(token),
                Err(DateError::BadFormat(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_overflowing_field_is_bad_format() {
        assert!(parse_date("99999999999-1-1").unwrap_err().is_bad_format());
        assert!(
            parse_date("2017-99999999999-1")
                .unwrap_err()
                .is_bad_format()
        );
    }

    #[test]
    fn test_out_of_range_is_invalid_date() {
        assert_eq!(
            parse_date("2017-13-01"),
            Err(DateError::InvalidDate {
                field: DateField::Month,
                value: 13,
            })
        );
        assert_eq!(
            parse_date("2017-11-32"),
            Err(DateError::InvalidDate {
                field: DateField::Day,
                value: 32,
            })
        );
        assert_eq!(
            parse_date("2017-13-32"),
            Err(DateError::InvalidDate {
                field: DateField::Month,
                value: 13,
            })
        );
    }

    #[test]
    fn test_shape_checked_before_range() {
        // Trailing garbage wins over an out-of-range month.
        assert!(parse_date("2017-13-01x").unwrap_err().is_bad_format());
    }
}

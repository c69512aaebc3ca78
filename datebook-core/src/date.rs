//! Calendar date value.
//!
//! A `Date` is a plain (year, month, day) triple. Month and day are only
//! range-checked; there is no calendar calculus, so `2019-02-31` is a valid
//! value. Ordering is lexicographic on the three fields, which the derived
//! `Ord` gives us from the field order below.

use std::fmt;
use std::str::FromStr;

use crate::error::{DateError, DateField, DateResult};
use crate::parse::parse_date;

const MAX_MONTH: u32 = 12;
const MAX_DAY: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u32,
    month: u32,
    day: u32,
}

impl Date {
    /// Build a date, rejecting month > 12 (checked first) and day > 31.
    pub fn new(year: u32, month: u32, day: u32) -> DateResult<Self> {
        if month > MAX_MONTH {
            return Err(DateError::InvalidDate {
                field: DateField::Month,
                value: month,
            });
        }
        if day > MAX_DAY {
            return Err(DateError::InvalidDate {
                field: DateField::Day,
                value: day,
            });
        }

        Ok(Date { year, month, day })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether events may be stored under this date.
    /// Month 0 and day 0 are structurally valid but never hold events.
    pub fn is_event_date(&self) -> bool {
        self.month > 0 && self.day > 0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

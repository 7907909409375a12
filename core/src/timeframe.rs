// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use jiff::{Span, ToSpan, Zoned};

use crate::error::{Error, Result};

/// A half-open span of calendar days, `[start, end)`.
///
/// The start date is included, the end date is not, so
/// `2007-10-01/2007-11-01` holds the 31 days of October 2007. Equal bounds
/// denote an empty (zero-length) timeframe.
///
/// Timeframes are plain values: every operation returns a new instance.
/// They order by start date, then by end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timeframe {
    start: Date,
    end: Date,
}

impl Timeframe {
    /// Creates a timeframe from its start date and its exclusive end date.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start` is after `end`.
    pub fn of(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange(format!(
                "start date {start} should be earlier than end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// A zero-length timeframe positioned at `date`.
    #[must_use]
    pub const fn empty_at(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The given calendar month, from its first day to the first day of the
    /// following month.
    ///
    /// ## Errors
    ///
    /// Fails if the year or month is not a valid calendar value.
    pub fn of_month(year: i16, month: i8) -> Result<Self> {
        let start = Date::new(year, month, 1)?;
        let end = start.checked_add(1.month())?;
        Ok(Self { start, end })
    }

    /// The given calendar year, from January 1st to January 1st of the next year.
    ///
    /// ## Errors
    ///
    /// Fails if the year is outside the supported calendar range.
    pub fn of_year(year: i16) -> Result<Self> {
        let start = Date::new(year, 1, 1)?;
        let end = start.checked_add(1.year())?;
        Ok(Self { start, end })
    }

    /// The timeframe from `years` years before today to `years` years after it.
    ///
    /// ## Errors
    ///
    /// Fails if `years` is negative or the bounds leave the calendar range.
    pub fn mid(years: i64) -> Result<Self> {
        Self::mid_from(Self::today(), years)
    }

    /// Like [`Timeframe::mid`], centered on `today` instead of the system date.
    ///
    /// ## Errors
    ///
    /// Fails if `years` is negative or the bounds leave the calendar range.
    pub fn mid_from(today: Date, years: i64) -> Result<Self> {
        let span = Span::new().try_years(years)?;
        Self::of(today.checked_sub(span)?, today.checked_add(span)?)
    }

    /// The current calendar year.
    ///
    /// ## Errors
    ///
    /// Fails only if the system date is at the very end of the calendar range.
    pub fn this_year() -> Result<Self> {
        Self::of_year(Self::today().year())
    }

    /// Today's date in the system time zone.
    #[must_use]
    pub fn today() -> Date {
        Zoned::now().date()
    }

    /// The first day of the timeframe.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// The first day after the timeframe.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Number of days covered.
    #[must_use]
    pub fn days(&self) -> i32 {
        (self.end - self.start).get_days()
    }

    /// Whether the timeframe covers no day at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether a date or another timeframe lies within this one.
    ///
    /// For timeframes the inclusion is weak: equal bounds count as contained.
    pub fn contains<T: Within + ?Sized>(&self, item: &T) -> bool {
        item.within(self)
    }

    /// Whether `other` lies strictly inside this timeframe, on both bounds.
    #[must_use]
    pub fn properly_contains(&self, other: &Timeframe) -> bool {
        self.start < other.start && self.end > other.end
    }

    /// The calendar year this timeframe falls in.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidRange`] when the first and the last day are in
    /// different years. Zero-length timeframes resolve to the year of their start.
    pub fn year(&self) -> Result<Self> {
        if !self.is_empty() {
            let last = self.end.yesterday()?;
            if last.year() != self.start.year() {
                return Err(Error::InvalidRange(format!(
                    "timeframe {self} crosses a year boundary"
                )));
            }
        }
        Self::of_year(self.start.year())
    }

    /// The same timeframe, one calendar year earlier.
    ///
    /// A bound on February 29th moves to February 28th.
    ///
    /// ## Errors
    ///
    /// Fails if the shifted bounds leave the calendar range.
    pub fn last_year(&self) -> Result<Self> {
        Self::of(
            self.start.checked_sub(1.year())?,
            self.end.checked_sub(1.year())?,
        )
    }

    /// The canonical `YYYY-MM-DD/YYYY-MM-DD` form, same as `to_string()`.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// The JSON representation: a bare string holding the canonical form.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::String(self.to_string())
    }
}

/// Something that can be tested for membership in a [`Timeframe`].
pub trait Within {
    /// Whether `self` lies within `timeframe`.
    fn within(&self, timeframe: &Timeframe) -> bool;
}

impl Within for Date {
    fn within(&self, timeframe: &Timeframe) -> bool {
        timeframe.start <= *self && *self < timeframe.end
    }
}

impl Within for Timeframe {
    fn within(&self, timeframe: &Timeframe) -> bool {
        timeframe.start <= self.start && timeframe.end >= self.end
    }
}

/// ISO 8601 time interval, method 1, eliding times.
impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

/// Parses the canonical `YYYY-MM-DD/YYYY-MM-DD` form, with an exclusive end.
impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((start, end)) = split_canonical(s) else {
            return Err(Error::Parse(format!(
                "`{s}` is not a canonical YYYY-MM-DD/YYYY-MM-DD interval"
            )));
        };
        let parse = |date: &str| {
            date.parse::<Date>()
                .map_err(|e| Error::Parse(format!("invalid date `{date}`: {e}")))
        };
        Self::of(parse(start)?, parse(end)?)
    }
}

/// Splits `s` into its two dates if it has the exact canonical shape.
pub(crate) fn split_canonical(s: &str) -> Option<(&str, &str)> {
    let (start, end) = s.split_once('/')?;
    (is_iso_date(start) && is_iso_date(end)).then_some((start, end))
}

fn is_iso_date(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

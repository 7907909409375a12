// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The two sides of an ISO 8601 time interval and how they combine.

use jiff::SignedDuration;
use jiff::civil::{Date, Time};
use timeframe_core::{Error, Result, Timeframe};

use crate::datetime::{parse_date, parse_time};
use crate::duration::Duration;

/// One side of a `<side>/<side>` interval string.
#[derive(Debug, Clone, PartialEq)]
pub enum IntervalSide {
    /// A duration such as `P1Y2M`, relative to the other side.
    Duration(Duration),

    /// A date, optionally followed by `T` and a time. The second side of an
    /// interval may elide leading components of either part.
    Moment {
        /// Date part, e.g. `2007-11-13`, or `13` as shorthand.
        date: String,

        /// Time part after the `T`, if any.
        time: Option<String>,
    },

    /// A bare time of day such as `15:30`, on the date of the other side.
    TimeOfDay(String),
}

impl IntervalSide {
    /// Classifies a raw side token.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        let has_t = raw.contains(['T', 't']);
        if raw.starts_with(['P', 'p']) {
            IntervalSide::Duration(Duration::parse(raw))
        } else if raw.contains(':') && !has_t {
            IntervalSide::TimeOfDay(raw.to_owned())
        } else {
            match raw.split_once(['T', 't']) {
                Some((date, time)) => IntervalSide::Moment {
                    date: date.to_owned(),
                    time: Some(time.to_owned()),
                },
                None => IntervalSide::Moment {
                    date: raw.to_owned(),
                    time: None,
                },
            }
        }
    }
}

/// Resolves the two sides of an interval into a timeframe.
///
/// The named end day is inclusive, so the exclusive end of the timeframe is
/// the day after it. Durations are measured from midnight of the opposite
/// side using average month and year lengths:
///
/// * `<date>/<date>` gives `[A, B + 1 day)`.
/// * `<date>/<duration>` gives `[A, A + duration + 1 day)`.
/// * `<duration>/<date>` gives `[B - duration + 1 day, B + 1 day)`.
///
/// ## Errors
///
/// Returns [`Error::Parse`] for two durations, a time-of-day first side, a
/// duration paired with a time of day, or a malformed date or time token.
pub fn resolve_interval(a: &IntervalSide, b: &IntervalSide) -> Result<Timeframe> {
    match (a, b) {
        (IntervalSide::Moment { date, time }, IntervalSide::Moment { date: d, time: t }) => {
            let start = parse_date(date)?;
            let last = parse_date(&expand(date, d, '-'))?;
            validate_time(time.as_deref())?;
            if let Some(t) = t {
                parse_time(&expand(time.as_deref().unwrap_or_default(), t, ':'))?;
            }
            tracing::trace!(%start, %last, "resolved date/date interval");
            Timeframe::of(start, last.tomorrow()?)
        }

        (IntervalSide::Moment { date, time }, IntervalSide::TimeOfDay(t)) => {
            let start = parse_date(date)?;
            validate_time(time.as_deref())?;
            parse_time(&expand(time.as_deref().unwrap_or_default(), t, ':'))?;
            tracing::trace!(%start, "resolved date/time-of-day interval");
            Timeframe::of(start, start.tomorrow()?)
        }

        (IntervalSide::Moment { date, time }, IntervalSide::Duration(duration)) => {
            let start = parse_date(date)?;
            validate_time(time.as_deref())?;
            let seconds = duration.seconds().checked_add(DAY).ok_or_else(too_long)?;
            let end = shift(start, seconds)?;
            tracing::trace!(%start, %end, "resolved date/duration interval");
            Timeframe::of(start, end)
        }

        (IntervalSide::Duration(duration), IntervalSide::Moment { date, time }) => {
            let last = parse_date(date)?;
            validate_time(time.as_deref())?;
            let seconds = DAY.checked_sub(duration.seconds()).ok_or_else(too_long)?;
            let start = shift(last, seconds)?;
            tracing::trace!(%start, %last, "resolved duration/date interval");
            Timeframe::of(start, last.tomorrow()?)
        }

        (IntervalSide::Duration(_), IntervalSide::Duration(_)) => Err(Error::Parse(
            "an interval cannot have a duration on both sides".to_owned(),
        )),

        (IntervalSide::Duration(_), IntervalSide::TimeOfDay(_)) => Err(Error::Parse(
            "a duration cannot be paired with a bare time of day".to_owned(),
        )),

        (IntervalSide::TimeOfDay(_), _) => Err(Error::Parse(
            "a bare time of day is only allowed as the end of an interval".to_owned(),
        )),
    }
}

const DAY: i64 = 86_400;

fn too_long() -> Error {
    Error::Parse("duration exceeds the supported range".to_owned())
}

/// The date reached from midnight of `date` after `seconds`.
fn shift(date: Date, seconds: i64) -> Result<Date> {
    let instant = date
        .to_datetime(Time::midnight())
        .checked_add(SignedDuration::from_secs(seconds))?;
    Ok(instant.date())
}

/// Completes an elided token by borrowing the leading characters of `full`.
///
/// A token is elided when it has fewer than two `separator`s and is shorter
/// than `full`, e.g. `15` after `2007-11-13` becomes `2007-11-15`.
fn expand(full: &str, short: &str, separator: char) -> String {
    if short.matches(separator).count() < 2
        && short.len() < full.len()
        && let Some(prefix) = full.get(..full.len() - short.len())
    {
        return format!("{prefix}{short}");
    }
    short.to_owned()
}

/// Times only need to be well formed, the timeframe keeps whole days.
fn validate_time(time: Option<&str>) -> Result<()> {
    if let Some(time) = time {
        parse_time(time)?;
    }
    Ok(())
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde_json::{Map, Value};
use timeframe_core::{Config, Error, Result, Timeframe};

use crate::datetime::{parse_canonical, parse_date};
use crate::side::{IntervalSide, resolve_interval};

/// The shapes of input [`parse`] understands.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeframeInput {
    /// A calendar year, e.g. `2009`.
    Year(i64),

    /// A year, an interval string, or JSON text holding one of the other shapes.
    Text(String),

    /// An object with `start_date`/`end_date` (or `startDate`/`endDate`)
    /// date strings. The end date is exclusive.
    Mapping(Map<String, Value>),
}

impl From<i32> for TimeframeInput {
    fn from(value: i32) -> Self {
        Self::Year(value.into())
    }
}

impl From<i64> for TimeframeInput {
    fn from(value: i64) -> Self {
        Self::Year(value)
    }
}

impl From<u16> for TimeframeInput {
    fn from(value: u16) -> Self {
        Self::Year(value.into())
    }
}

impl From<&str> for TimeframeInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TimeframeInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Map<String, Value>> for TimeframeInput {
    fn from(value: Map<String, Value>) -> Self {
        Self::Mapping(value)
    }
}

impl TryFrom<Value> for TimeframeInput {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Year).ok_or_else(|| {
                Error::InvalidArgument(format!("{n} is not a whole year"))
            }),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Object(map) => Ok(Self::Mapping(map)),
            other => Err(Error::InvalidArgument(format!(
                "cannot build a timeframe from {other}"
            ))),
        }
    }
}

/// Parses a timeframe from any supported input shape.
///
/// ```
/// use jiff::civil::date;
/// use timeframe_core::Timeframe;
///
/// let shorthand = timeframe_iso8601::parse("2007-11-13/15").unwrap();
/// assert_eq!(shorthand, Timeframe::of(date(2007, 11, 13), date(2007, 11, 16)).unwrap());
///
/// let year = timeframe_iso8601::parse(2009).unwrap();
/// assert_eq!(year, Timeframe::of_year(2009).unwrap());
/// ```
///
/// The canonical `YYYY-MM-DD/YYYY-MM-DD` form is read with an exclusive end,
/// so that `parse(t.to_string()) == t`. Every other interval spelling names
/// the last day included: `2008-05-01/2008-05-11` ends on May 11th, while
/// `2008-05-01/2008-05-11T00:00` and `2008-05-01--2008-05-11` end on May 12th.
///
/// ## Errors
///
/// Returns [`Error::Parse`] for malformed interval strings or JSON,
/// [`Error::InvalidArgument`] for unsupported shapes, and
/// [`Error::InvalidRange`] if the start ends up after the end.
pub fn parse(input: impl Into<TimeframeInput>) -> Result<Timeframe> {
    parse_with(input, &Config::default())
}

/// Like [`parse`], and additionally checks the result against `config`.
///
/// ## Errors
///
/// Fails like [`parse`], or with [`Error::InvalidRange`] if the
/// configuration rejects the parsed timeframe.
pub fn parse_with(input: impl Into<TimeframeInput>, config: &Config) -> Result<Timeframe> {
    let input = input.into();
    tracing::debug!(?input, "parsing timeframe");
    let timeframe = resolve(input)?;
    config.check(&timeframe)?;
    Ok(timeframe)
}

/// Parses an already decoded JSON value.
///
/// ## Errors
///
/// Fails like [`parse`], or with [`Error::InvalidArgument`] for arrays,
/// booleans, null and fractional numbers.
pub fn parse_value(value: Value) -> Result<Timeframe> {
    parse(TimeframeInput::try_from(value)?)
}

fn resolve(input: TimeframeInput) -> Result<Timeframe> {
    match input {
        TimeframeInput::Year(year) => {
            let year = i16::try_from(year)
                .map_err(|_| Error::InvalidArgument(format!("year {year} is out of range")))?;
            Timeframe::of_year(year)
        }
        TimeframeInput::Text(text) => resolve_text(text.trim()),
        TimeframeInput::Mapping(map) => resolve_mapping(&map),
    }
}

fn resolve_text(text: &str) -> Result<Timeframe> {
    if text.starts_with(['{', '[', '"']) {
        tracing::trace!(text, "decoding JSON input");
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Error::Parse(format!("invalid JSON `{text}`: {e}")))?;
        return resolve(TimeframeInput::try_from(value)?);
    }

    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        let year = lexical::parse::<i16, _>(text)
            .map_err(|e| Error::Parse(format!("invalid year `{text}`: {e}")))?;
        return Timeframe::of_year(year);
    }

    if let Some((start, end)) = parse_canonical(text) {
        tracing::trace!(text, "canonical interval");
        return Timeframe::of(start, end);
    }

    let (a, b) = split_interval(text)?;
    resolve_interval(&IntervalSide::classify(a), &IntervalSide::classify(b))
}

/// Splits an interval at `/`, or at `--` when there is no slash.
fn split_interval(text: &str) -> Result<(&str, &str)> {
    let separator = if text.contains('/') { "/" } else { "--" };
    let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
    match parts.as_slice() {
        &[a, b] if !a.is_empty() && !b.is_empty() => Ok((a, b)),
        _ => Err(Error::Parse(format!(
            "`{text}` is not an interval of the form <start>/<end>"
        ))),
    }
}

fn resolve_mapping(map: &Map<String, Value>) -> Result<Timeframe> {
    let field = |snake: &str, camel: &str| {
        map.get(snake)
            .or_else(|| map.get(camel))
            .ok_or_else(|| Error::InvalidArgument(format!("missing `{snake}` or `{camel}`")))
            .and_then(|value| {
                value.as_str().ok_or_else(|| {
                    Error::InvalidArgument(format!("`{snake}` must be a date string"))
                })
            })
    };

    let start = parse_date(field("start_date", "startDate")?)?;
    let end = parse_date(field("end_date", "endDate")?)?;
    Timeframe::of(start, end)
}

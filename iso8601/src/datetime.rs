// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsers for the date and time tokens of an ISO 8601 interval side.

use std::borrow::Cow;

use chumsky::Parser;
use chumsky::error::RichPattern;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use jiff::civil::{Date, Time};
use jiff::tz::Offset;
use timeframe_core::{Error, Result};

/// Time of day with an optional UTC offset, as written in an interval side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Civil time of day.
    pub time: Time,

    /// Offset from UTC, `Some(Offset::UTC)` for a trailing `Z`.
    pub offset: Option<Offset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    Date,
    Time,
    Offset,
}

impl From<Expected> for RichPattern<'_, char> {
    fn from(expected: Expected) -> Self {
        match expected {
            Expected::Date => Self::Label(Cow::Borrowed("invalid date")),
            Expected::Time => Self::Label(Cow::Borrowed("invalid time")),
            Expected::Offset => Self::Label(Cow::Borrowed("utc offset out of range")),
        }
    }
}

/// Parses a calendar date in extended (`YYYY-MM-DD`) or basic (`YYYYMMDD`) form.
///
/// ## Errors
///
/// Returns [`Error::Parse`] if the token is malformed or names a day that
/// does not exist.
pub fn parse_date(src: &str) -> Result<Date> {
    date::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(src)
        .into_result()
        .map_err(|errs| Error::Parse(render("date", src, &errs)))
}

/// Parses a time of day, `hh[:mm[:ss[.fff]]]` with an optional zone suffix.
///
/// ## Errors
///
/// Returns [`Error::Parse`] if the token is malformed.
pub fn parse_time(src: &str) -> Result<ClockTime> {
    clock_time::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(src)
        .into_result()
        .map_err(|errs| Error::Parse(render("time", src, &errs)))
}

/// Parses the exact canonical `YYYY-MM-DD/YYYY-MM-DD` form into its bounds.
pub(crate) fn parse_canonical(src: &str) -> Option<(Date, Date)> {
    extended_date::<'_, _, extra::Err<Rich<'_, char>>>()
        .then_ignore(just('/'))
        .then(extended_date())
        .parse(src)
        .into_result()
        .ok()
}

fn render(what: &str, src: &str, errs: &[Rich<'_, char>]) -> String {
    let reasons: Vec<String> = errs.iter().map(ToString::to_string).collect();
    format!("invalid {what} `{src}`: {}", reasons.join("; "))
}

/// Format Definition:
///
/// ```txt
/// date          = date-extended / date-basic
/// date-extended = date-fullyear "-" date-month "-" date-mday
/// date-basic    = date-fullyear date-month date-mday
/// ```
fn date<'src, I, E>() -> impl Parser<'src, I, Date, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, Expected>,
{
    let basic = date_fullyear()
        .then(date_month())
        .then(date_mday())
        .try_map(|((year, month), day), span| {
            Date::new(year, month, day)
                .map_err(|_| E::Error::expected_found([Expected::Date], None, span))
        });

    choice((extended_date(), basic))
}

fn extended_date<'src, I, E>() -> impl Parser<'src, I, Date, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, Expected>,
{
    date_fullyear()
        .then_ignore(just('-'))
        .then(date_month())
        .then_ignore(just('-'))
        .then(date_mday())
        .try_map(|((year, month), day), span| {
            Date::new(year, month, day)
                .map_err(|_| E::Error::expected_found([Expected::Date], None, span))
        })
}

fn date_fullyear<'src, I, E>() -> impl Parser<'src, I, i16, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    i16_0_9()
        .then(i16_0_9())
        .then(i16_0_9())
        .then(i16_0_9())
        .map(|(((a, b), c), d)| 1000 * a + 100 * b + 10 * c + d)
}

fn date_month<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just('0').ignore_then(i8_1_9()),
        just('1').ignore_then(i8_0_2()).map(|b| 10 + b),
    ))
}

fn date_mday<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just('0').ignore_then(i8_1_9()),
        i8_1_2().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('3').ignore_then(i8_0_1()).map(|b| 30 + b),
    ))
}

/// Format Definition:
///
/// ```txt
/// time      = time-hour [[":"] time-minute [[":"] time-second [time-frac]]] [time-zone]
/// time-frac = ("." / ",") 1*9DIGIT
/// time-zone = "Z" / ("+" / "-") time-hour [[":"] time-minute]
/// ```
fn clock_time<'src, I, E>() -> impl Parser<'src, I, ClockTime, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, Expected>,
{
    let fraction = select! { c @ ('.' | ',') => c }
        .ignore_then(
            select! { c @ '0'..='9' => c }
                .repeated()
                .at_least(1)
                .at_most(9)
                .collect::<String>(),
        )
        .try_map(|digits, span| {
            // right-pad to nanoseconds, at most 9 digits so it always fits
            lexical::parse::<i32, _>(format!("{digits:0<9}"))
                .map_err(|_| E::Error::expected_found([Expected::Time], None, span))
        });

    let second = just(':')
        .or_not()
        .ignore_then(time_second())
        .then(fraction.or_not());
    let minute = just(':')
        .or_not()
        .ignore_then(time_minute())
        .then(second.or_not());

    time_hour()
        .then(minute.or_not())
        .try_map(|(hour, rest), span| {
            let (minute, second) = rest.unwrap_or((0, None));
            let (second, nanos) = second.unwrap_or((0, None));
            Time::new(hour, minute, second, nanos.unwrap_or(0))
                .map_err(|_| E::Error::expected_found([Expected::Time], None, span))
        })
        .then(time_zone().or_not())
        .map(|(time, offset)| ClockTime { time, offset })
}

fn time_zone<'src, I, E>() -> impl Parser<'src, I, Offset, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, Expected>,
{
    let numeric = select! { c @ ('+' | '-') => c }
        .then(time_hour())
        .then(just(':').or_not().ignore_then(time_minute()).or_not())
        .try_map(|((sign, hour), minute), span| {
            let seconds = i32::from(hour) * 3600 + i32::from(minute.unwrap_or(0)) * 60;
            let seconds = if sign == '-' { -seconds } else { seconds };
            Offset::from_seconds(seconds)
                .map_err(|_| E::Error::expected_found([Expected::Offset], None, span))
        });

    choice((just('Z').to(Offset::UTC), numeric))
}

fn time_hour<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        i8_0_1().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('2').ignore_then(i8_0_3()).map(|b| 20 + b),
    ))
}

fn time_minute<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    i8_0_5().then(i8_0_9()).map(|(a, b)| 10 * a + b)
}

fn time_second<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    time_minute()
}

macro_rules! define_digit_select {
    ($fname:ident : $ty:ty => { $($ch:literal),+ $(,)? }) => {
        #[allow(trivial_numeric_casts, clippy::cast_lossless, clippy::char_lit_as_u8, clippy::cast_possible_wrap)]
        const fn $fname<'src, I, E>() -> impl Parser<'src, I, $ty, E> + Copy
        where
            I: Input<'src, Token = char, Span = SimpleSpan>,
            E: ParserExtra<'src, I>,
        {
            select! {
                $(
                    $ch => (($ch as u8 - b'0') as $ty),
                )+
            }
        }
    };
}

define_digit_select!(i8_0_1 : i8 => { '0', '1' });
define_digit_select!(i8_0_2 : i8 => { '0', '1', '2' });
define_digit_select!(i8_0_3 : i8 => { '0', '1', '2', '3' });
define_digit_select!(i8_0_5 : i8 => { '0', '1', '2', '3', '4', '5' });
define_digit_select!(i8_0_9 : i8 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i8_1_2 : i8 => { '1', '2' });
define_digit_select!(i8_1_9 : i8 => { '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i16_0_9 : i16 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });

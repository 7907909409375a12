// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use regex::Regex;

/// Average length of a Gregorian year, in seconds.
const SECONDS_PER_YEAR: f64 = 31_556_926.0;

/// Average length of a Gregorian month, in seconds.
const SECONDS_PER_MONTH: f64 = 2_629_743.83;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// ISO 8601 duration such as `P1Y2M10DT2H30M`, split into its designators.
///
/// Missing designators are zero. Weeks (`nW`) are folded into days.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Duration {
    /// Years, `nY` before the `T`.
    pub years: f64,

    /// Months, `nM` before the `T`.
    pub months: f64,

    /// Days, `nD` plus seven times `nW`, before the `T`.
    pub days: f64,

    /// Hours, `nH` after the `T`.
    pub hours: f64,

    /// Minutes, `nM` after the `T`.
    pub minutes: f64,

    /// Seconds, `nS` after the `T`.
    pub seconds: f64,
}

impl Duration {
    /// Parses a duration token leniently.
    ///
    /// The token is case-insensitive, values may use `.` or `,` as decimal
    /// mark, and anything that is not a well-formed designator counts as zero.
    #[must_use]
    pub fn parse(src: &str) -> Self {
        let upper = src.to_uppercase();
        let mut parts = upper.split('T');
        let date_part = parts.next().unwrap_or_default();
        let time_part = parts.next().unwrap_or_default();

        let duration = Self {
            years: magnitude(date_part, "Y"),
            months: magnitude(date_part, "M"),
            days: magnitude(date_part, "D") + 7.0 * magnitude(date_part, "W"),
            hours: magnitude(time_part, "H"),
            minutes: magnitude(time_part, "M"),
            seconds: magnitude(time_part, "S"),
        };
        tracing::trace!(src, ?duration, "parsed duration");
        duration
    }

    /// Total length in whole seconds, rounded up.
    ///
    /// Years and months use their average Gregorian lengths, so the result is
    /// an approximation that does not depend on where the duration is applied.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn seconds(&self) -> i64 {
        let total = self.years * SECONDS_PER_YEAR
            + self.months * SECONDS_PER_MONTH
            + self.days * SECONDS_PER_DAY
            + self.hours * 3_600.0
            + self.minutes * 60.0
            + self.seconds;
        total.ceil() as i64
    }
}

/// The value written before the first `designator` in `part`, or zero.
fn magnitude(part: &str, designator: &str) -> f64 {
    const RE: &str = r"([0-9]+(?:[.,][0-9]+)?)([YMWDHS])";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    re.captures_iter(part)
        .find(|c| c.get(2).is_some_and(|m| m.as_str() == designator))
        .and_then(|c| c.get(1))
        .and_then(|m| lexical::parse::<f64, _>(m.as_str().replace(',', ".")).ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_designators() {
        let duration = Duration::parse("P1Y2M10DT2H30M");
        assert_eq!(
            duration,
            Duration {
                years: 1.0,
                months: 2.0,
                days: 10.0,
                hours: 2.0,
                minutes: 30.0,
                seconds: 0.0,
            }
        );

        let time_only = Duration::parse("pt36h5s");
        assert_eq!(
            time_only,
            Duration {
                hours: 36.0,
                seconds: 5.0,
                ..Duration::default()
            }
        );
    }

    #[test]
    #[expect(clippy::float_cmp)]
    fn parses_fractions_and_weeks() {
        assert_eq!(Duration::parse("P1.5Y").years, 1.5);
        assert_eq!(Duration::parse("P0,5D").days, 0.5);
        assert_eq!(Duration::parse("P2W").days, 14.0);
        assert_eq!(Duration::parse("P1W3D").days, 10.0);
    }

    #[test]
    fn treats_malformed_as_zero() {
        for src in ["P", "PXY", "PY", "PT", "P1Q", "nonsense"] {
            assert_eq!(
                Duration::parse(src),
                Duration::default(),
                "Failed for {src}"
            );
        }

        // the broken designator is skipped, the rest still counts
        let partial = Duration::parse("PxY3D");
        assert_eq!(partial.seconds(), 3 * 86_400);
    }

    #[test]
    fn converts_to_seconds() {
        #[rustfmt::skip]
        let cases = [
            ("P1Y",            31_556_926),
            ("P1M",            2_629_744), // rounded up
            ("P2M",            5_259_488),
            ("P1D",            86_400),
            ("PT1H1M1S",       3_661),
            ("PT0.2S",         1),
            ("P1Y2M10DT2H30M", 37_689_414),
            ("P",              0),
        ];
        for (src, expected) in cases {
            assert_eq!(Duration::parse(src).seconds(), expected, "Failed for {src}");
        }
    }
}

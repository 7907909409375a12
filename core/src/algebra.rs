// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Set-like operations: intersection, cropping, constraining and gap analysis.

use std::ops::{BitAnd, Div};

use jiff::civil::Date;

use crate::error::{Error, Result};
use crate::timeframe::Timeframe;

impl Timeframe {
    /// The overlap of two timeframes, or `None` if they are disjoint.
    ///
    /// When one timeframe lies strictly inside the other (or both are equal)
    /// the inner one is returned as is.
    #[must_use]
    pub fn intersect(&self, other: &Timeframe) -> Option<Timeframe> {
        if self == other || other.properly_contains(self) {
            Some(*self)
        } else if self.properly_contains(other) {
            Some(*other)
        } else if self.start() >= other.end() || self.end() <= other.start() {
            None
        } else {
            Timeframe::of(
                self.start().max(other.start()),
                self.end().min(other.end()),
            )
            .ok()
        }
    }

    /// The fraction of `other` that this timeframe represents, in days.
    ///
    /// Dividing by a zero-length timeframe yields an infinite or NaN value.
    #[must_use]
    pub fn ratio(&self, other: &Timeframe) -> f64 {
        f64::from(self.days()) / f64::from(other.days())
    }

    /// Clamps the timeframe into `container`.
    ///
    /// A timeframe disjoint from the container collapses to a zero-length
    /// timeframe at the nearest container bound.
    #[must_use]
    pub fn crop(&self, container: &Timeframe) -> Timeframe {
        let clamp = |d: Date| d.clamp(container.start(), container.end());
        Timeframe::of(clamp(self.start()), clamp(self.end()))
            .unwrap_or_else(|_| Timeframe::empty_at(container.start()))
    }

    /// Crops the timeframe so that it ends no later than `date`.
    ///
    /// Returns `None` when the timeframe starts on or after `date`.
    #[must_use]
    pub fn ending_no_later_than(&self, date: Date) -> Option<Timeframe> {
        if self.end() < date {
            Some(*self)
        } else if self.start() >= date {
            None
        } else {
            Timeframe::of(self.start(), date).ok()
        }
    }

    /// Builds `[start, end)` and constrains it to `constraint`.
    ///
    /// A range that does not touch the constraint at all yields a zero-length
    /// timeframe at the start of the constraint. A range crossing a year
    /// boundary that envelops the constraint's years yields the constraint
    /// itself; otherwise the range is clamped into the constraint.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start` is after `end`.
    pub fn constrained(start: Date, end: Date, constraint: &Timeframe) -> Result<Timeframe> {
        let candidate = Timeframe::of(start, end)?;
        let outside = end <= constraint.start() || start >= constraint.end();
        if outside {
            return Ok(Timeframe::empty_at(constraint.start()));
        }

        let last = end.yesterday()?;
        if start.year() == last.year() {
            Ok(candidate
                .intersect(constraint)
                .unwrap_or_else(|| Timeframe::empty_at(constraint.start())))
        } else if start.year() < constraint.start().year()
            && constraint.start().year() < last.year()
        {
            Ok(*constraint)
        } else {
            Timeframe::of(
                constraint.start().max(start),
                constraint.end().min(end),
            )
        }
    }

    /// The parts of this timeframe not covered by any of `others`, in
    /// ascending order.
    ///
    /// Candidates outside the timeframe are ignored, the rest are cropped to
    /// it, and candidates properly contained in another are dropped before
    /// the uncovered stretches between them are collected.
    pub fn gaps_left_by<'a, I>(&self, others: I) -> Vec<Timeframe>
    where
        I: IntoIterator<Item = &'a Timeframe>,
    {
        let cropped: Vec<Timeframe> = others
            .into_iter()
            .filter(|t| t.end() > self.start() && t.start() < self.end())
            .map(|t| t.crop(self))
            .collect();

        let mut covering: Vec<Timeframe> = cropped
            .iter()
            .filter(|t| !cropped.iter().any(|u| u.properly_contains(t)))
            .copied()
            .collect();
        tracing::trace!(
            timeframe = %self,
            candidates = cropped.len(),
            covering = covering.len(),
            "computing gaps"
        );

        if covering.is_empty() {
            return vec![*self];
        }
        covering.sort();

        let lower = std::iter::once(self.start()).chain(covering.iter().map(Timeframe::end));
        let upper = covering
            .iter()
            .map(Timeframe::start)
            .chain(std::iter::once(self.end()));
        lower
            .zip(upper)
            .filter(|(a, b)| b > a)
            .filter_map(|(a, b)| Timeframe::of(a, b).ok())
            .collect()
    }

    /// Whether the union of `others` covers this timeframe entirely.
    pub fn covered_by<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Timeframe>,
    {
        self.gaps_left_by(others).is_empty()
    }
}

impl BitAnd for Timeframe {
    type Output = Option<Timeframe>;

    fn bitand(self, rhs: Timeframe) -> Option<Timeframe> {
        self.intersect(&rhs)
    }
}

impl BitAnd for &Timeframe {
    type Output = Option<Timeframe>;

    fn bitand(self, rhs: &Timeframe) -> Option<Timeframe> {
        self.intersect(rhs)
    }
}

impl Div for Timeframe {
    type Output = f64;

    fn div(self, rhs: Timeframe) -> f64 {
        self.ratio(&rhs)
    }
}

impl Div for &Timeframe {
    type Output = f64;

    fn div(self, rhs: &Timeframe) -> f64 {
        self.ratio(rhs)
    }
}

/// Gap analysis over several base timeframes at once.
pub trait Gaps {
    /// Applies [`Timeframe::gaps_left_by`] to each base timeframe and
    /// concatenates the results in input order.
    fn gaps_left_by(&self, others: &[Timeframe]) -> Vec<Timeframe>;
}

impl Gaps for [Timeframe] {
    fn gaps_left_by(&self, others: &[Timeframe]) -> Vec<Timeframe> {
        self.iter()
            .flat_map(|base| base.gaps_left_by(others))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn tf(start: Date, end: Date) -> Timeframe {
        Timeframe::of(start, end).unwrap()
    }

    fn month(m: i8) -> Timeframe {
        Timeframe::of_month(2009, m).unwrap()
    }

    #[test]
    fn intersects() {
        let year = Timeframe::of_year(2009).unwrap();

        assert_eq!(month(4) & month(6), None);
        assert_eq!(month(4) & month(5), None);
        assert_eq!(month(4) & month(4), Some(month(4)));
        assert_eq!(year & month(4), Some(month(4)));
        assert_eq!(month(4) & year, Some(month(4)));

        let a = tf(date(2009, 2, 1), date(2009, 6, 1));
        let b = tf(date(2009, 4, 1), date(2009, 8, 1));
        let expected = Some(tf(date(2009, 4, 1), date(2009, 6, 1)));
        assert_eq!(&a & &b, expected);
        assert_eq!(&b & &a, expected);
    }

    #[test]
    fn divides() {
        let april = month(4);
        let year = Timeframe::of_year(2009).unwrap();
        #[expect(clippy::float_cmp)]
        {
            assert_eq!(april / year, 30.0 / 365.0);
            assert_eq!(year.ratio(&year), 1.0);
        }
    }

    #[test]
    fn crops() {
        let year = Timeframe::of_year(2009).unwrap();
        assert_eq!(year.crop(&year), year);

        let spanning = tf(date(2008, 11, 1), date(2009, 2, 1));
        assert_eq!(spanning.crop(&year), tf(date(2009, 1, 1), date(2009, 2, 1)));

        let before = tf(date(2008, 3, 1), date(2008, 4, 1));
        let cropped = before.crop(&year);
        assert_eq!(cropped.days(), 0);
        assert_eq!(cropped.start(), year.start());

        let after = tf(date(2010, 3, 1), date(2010, 4, 1));
        assert_eq!(after.crop(&year), Timeframe::empty_at(year.end()));
    }

    #[test]
    fn ends_no_later_than() {
        let march = month(3);
        assert_eq!(march.ending_no_later_than(date(2009, 5, 1)), Some(march));
        assert_eq!(march.ending_no_later_than(date(2009, 3, 1)), None);
        assert_eq!(march.ending_no_later_than(date(2009, 2, 1)), None);
        assert_eq!(
            march.ending_no_later_than(date(2009, 3, 10)),
            Some(tf(date(2009, 3, 1), date(2009, 3, 10)))
        );
        assert_eq!(march.ending_no_later_than(date(2009, 4, 1)), Some(march));
    }

    #[test]
    fn constrains() {
        let year = Timeframe::of_year(2008).unwrap();
        let may = Timeframe::of_month(2008, 5).unwrap();
        let january = Timeframe::of_month(2008, 1).unwrap();

        assert_eq!(
            Timeframe::constrained(may.start(), may.end(), &year).unwrap(),
            may
        );
        assert_eq!(
            Timeframe::constrained(date(2007, 1, 1), date(2010, 1, 1), &year).unwrap(),
            year
        );
        assert_eq!(
            Timeframe::constrained(date(2007, 11, 1), date(2008, 2, 1), &year).unwrap(),
            january
        );
    }

    #[test]
    fn constrains_within_single_year() {
        let start = date(2008, 2, 14);
        let finish = date(2008, 5, 10);

        let constraint = tf(date(2008, 1, 1), date(2008, 12, 1));
        assert_eq!(
            Timeframe::constrained(start, finish, &constraint).unwrap(),
            tf(start, finish)
        );

        let narrow = tf(start, finish);
        assert_eq!(
            Timeframe::constrained(date(2008, 1, 1), date(2008, 12, 1), &narrow).unwrap(),
            narrow
        );

        let later_start = tf(date(2008, 1, 14), date(2008, 12, 1));
        assert_eq!(
            Timeframe::constrained(date(2008, 1, 1), finish, &later_start).unwrap(),
            tf(date(2008, 1, 14), finish)
        );

        let earlier_end = tf(date(2008, 1, 1), date(2008, 4, 14));
        assert_eq!(
            Timeframe::constrained(start, finish, &earlier_end).unwrap(),
            tf(start, date(2008, 4, 14))
        );
    }

    #[test]
    fn constrains_disjoint_to_zero_length() {
        let constraint = Timeframe::of_year(2010).unwrap();
        let timeframe =
            Timeframe::constrained(date(2009, 1, 1), date(2010, 1, 1), &constraint).unwrap();
        assert_eq!(timeframe.days(), 0);
        assert_eq!(timeframe.start(), constraint.start());

        let err = Timeframe::constrained(date(2010, 2, 1), date(2010, 1, 1), &constraint)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange(_)));
    }

    #[test]
    fn finds_gaps() {
        let year = Timeframe::of_year(2009).unwrap();
        let gaps = year.gaps_left_by(&[
            month(3),
            month(5),
            tf(date(2009, 8, 1), date(2009, 11, 1)),
            tf(date(2009, 9, 1), date(2009, 10, 1)),
        ]);
        assert_eq!(
            gaps,
            vec![
                tf(date(2009, 1, 1), date(2009, 3, 1)),
                tf(date(2009, 4, 1), date(2009, 5, 1)),
                tf(date(2009, 6, 1), date(2009, 8, 1)),
                tf(date(2009, 11, 1), date(2010, 1, 1)),
            ]
        );
    }

    #[test]
    fn finds_gaps_with_outside_and_overlapping_candidates() {
        let year = Timeframe::of_year(2009).unwrap();
        assert_eq!(year.gaps_left_by([]), vec![year]);

        let outside = Timeframe::of_year(2011).unwrap();
        assert_eq!(year.gaps_left_by([&outside]), vec![year]);

        let overlapping = [
            tf(date(2008, 6, 1), date(2009, 2, 1)),
            tf(date(2009, 1, 15), date(2009, 3, 1)),
            tf(date(2009, 12, 1), date(2010, 6, 1)),
        ];
        assert_eq!(
            year.gaps_left_by(&overlapping),
            vec![tf(date(2009, 3, 1), date(2009, 12, 1))]
        );

        let shared_start = [tf(date(2009, 1, 1), date(2009, 6, 1)), month(1)];
        assert_eq!(
            year.gaps_left_by(&shared_start),
            vec![tf(date(2009, 6, 1), date(2010, 1, 1))]
        );
    }

    #[test]
    fn checks_coverage() {
        let year = Timeframe::of_year(2009).unwrap();
        let rest = tf(date(2009, 2, 1), date(2010, 1, 1));
        assert!(year.covered_by(&[month(1), rest]));
        assert!(!year.covered_by(&[month(1)]));
        assert!(year.covered_by(&[Timeframe::of_year(2009).unwrap()]));
    }

    #[test]
    fn finds_gaps_for_multiple_timeframes() {
        let t1 = tf(date(2011, 10, 10), date(2011, 10, 28));
        let t2 = tf(date(2011, 11, 1), date(2011, 11, 12));
        let t3 = tf(date(2011, 10, 11), date(2011, 10, 15));
        let t4 = tf(date(2011, 11, 1), date(2011, 11, 8));

        let bases = [t1, t2];
        assert_eq!(
            bases.gaps_left_by(&[t3, t4]),
            vec![
                tf(date(2011, 10, 10), date(2011, 10, 11)),
                tf(date(2011, 10, 15), date(2011, 10, 28)),
                tf(date(2011, 11, 8), date(2011, 11, 12)),
            ]
        );
    }
}

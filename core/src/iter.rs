// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Day and month iteration, and subdivision into month/year sub-timeframes.

use std::iter::FusedIterator;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::error::Result;
use crate::timeframe::Timeframe;

impl Timeframe {
    /// Every date in the timeframe, in ascending order.
    ///
    /// The iterator is lazy; clone it (or call `dates()` again) to restart.
    #[must_use]
    pub fn dates(&self) -> Dates {
        Dates {
            next: self.start(),
            end: self.end(),
        }
    }

    /// The first day of every calendar month the timeframe touches.
    #[must_use]
    pub fn first_days_of_months(&self) -> FirstDaysOfMonths {
        FirstDaysOfMonths {
            next: (!self.is_empty()).then(|| self.start().first_of_month()),
            end: self.end(),
        }
    }

    /// Splits the timeframe along calendar months.
    ///
    /// Partial months at either boundary are kept as the cropped part, so the
    /// result always covers exactly `[start, end)`.
    #[must_use]
    pub fn months(&self) -> Vec<Self> {
        self.first_days_of_months()
            .filter_map(|first| {
                let next = first.checked_add(1.month()).unwrap_or(self.end());
                Timeframe::of(first, next).ok()?.intersect(self)
            })
            .collect()
    }

    /// Like [`Timeframe::months`], but every element is the whole calendar month.
    ///
    /// ## Errors
    ///
    /// Fails if a month extends past the supported calendar range.
    pub fn full_months(&self) -> Result<Vec<Self>> {
        self.first_days_of_months()
            .map(|first| Self::of_month(first.year(), first.month()))
            .collect()
    }

    /// Splits the timeframe along calendar years, keeping partial years cropped.
    ///
    /// ## Errors
    ///
    /// Fails if a year extends past the supported calendar range.
    pub fn years(&self) -> Result<Vec<Self>> {
        Ok(self
            .full_years()?
            .into_iter()
            .filter_map(|year| year.intersect(self))
            .collect())
    }

    /// Every calendar year the timeframe touches, as whole years.
    ///
    /// ## Errors
    ///
    /// Fails if a year extends past the supported calendar range.
    pub fn full_years(&self) -> Result<Vec<Self>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let last = self.end().yesterday()?;
        (self.start().year()..=last.year())
            .map(Self::of_year)
            .collect()
    }
}

/// Iterator over the dates of a [`Timeframe`], see [`Timeframe::dates`].
#[derive(Debug, Clone)]
pub struct Dates {
    next: Date,
    end: Date,
}

impl Iterator for Dates {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        // `end` is a later valid date, so tomorrow always exists here
        self.next = current.tomorrow().unwrap_or(self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next < self.end {
            usize::try_from((self.end - self.next).get_days()).unwrap_or(0)
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dates {}

impl FusedIterator for Dates {}

/// Iterator over month starts, see [`Timeframe::first_days_of_months`].
#[derive(Debug, Clone)]
pub struct FirstDaysOfMonths {
    next: Option<Date>,
    end: Date,
}

impl Iterator for FirstDaysOfMonths {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next.filter(|d| *d < self.end)?;
        self.next = current.checked_add(1.month()).ok();
        Some(current)
    }
}

impl FusedIterator for FirstDaysOfMonths {}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn tf(start: Date, end: Date) -> Timeframe {
        Timeframe::of(start, end).unwrap()
    }

    #[test]
    fn iterates_dates() {
        let timeframe = tf(date(2008, 2, 27), date(2008, 3, 2));
        let dates = timeframe.dates();
        assert_eq!(dates.len(), 4);
        assert_eq!(
            dates.clone().collect::<Vec<_>>(),
            vec![
                date(2008, 2, 27),
                date(2008, 2, 28),
                date(2008, 2, 29),
                date(2008, 3, 1)
            ]
        );
        // restartable
        assert_eq!(dates.count(), 4);
        assert_eq!(timeframe.dates().count(), 4);

        let empty = Timeframe::empty_at(date(2008, 2, 27));
        assert_eq!(empty.dates().next(), None);
    }

    #[test]
    fn iterates_first_days_of_months() {
        let timeframe = tf(date(2008, 11, 15), date(2009, 2, 1));
        let firsts: Vec<_> = timeframe.first_days_of_months().collect();
        assert_eq!(
            firsts,
            vec![date(2008, 11, 1), date(2008, 12, 1), date(2009, 1, 1)]
        );

        let partial_end = tf(date(2008, 11, 15), date(2009, 2, 2));
        assert_eq!(partial_end.first_days_of_months().count(), 4);

        let empty = Timeframe::empty_at(date(2008, 11, 15));
        assert_eq!(empty.first_days_of_months().count(), 0);
    }

    #[test]
    fn splits_into_months() {
        let year = Timeframe::of_year(2009).unwrap();
        let months = year.months();
        assert_eq!(months.len(), 12);
        assert_eq!(months.get(1), Some(&Timeframe::of_month(2009, 2).unwrap()));

        let partial = tf(date(2008, 12, 15), date(2009, 2, 10));
        assert_eq!(
            partial.months(),
            vec![
                tf(date(2008, 12, 15), date(2009, 1, 1)),
                tf(date(2009, 1, 1), date(2009, 2, 1)),
                tf(date(2009, 2, 1), date(2009, 2, 10)),
            ]
        );
        assert_eq!(
            partial.full_months().unwrap(),
            vec![
                Timeframe::of_month(2008, 12).unwrap(),
                Timeframe::of_month(2009, 1).unwrap(),
                Timeframe::of_month(2009, 2).unwrap(),
            ]
        );

        let inside = tf(date(2009, 3, 5), date(2009, 3, 9));
        assert_eq!(inside.months(), vec![inside]);
    }

    #[test]
    fn splits_into_years() {
        let timeframe = tf(date(2007, 6, 1), date(2009, 3, 1));
        assert_eq!(
            timeframe.years().unwrap(),
            vec![
                tf(date(2007, 6, 1), date(2008, 1, 1)),
                Timeframe::of_year(2008).unwrap(),
                tf(date(2009, 1, 1), date(2009, 3, 1)),
            ]
        );
        assert_eq!(timeframe.full_years().unwrap().len(), 3);

        let until_new_year = tf(date(2007, 6, 1), date(2008, 1, 1));
        assert_eq!(until_new_year.full_years().unwrap().len(), 1);
    }
}

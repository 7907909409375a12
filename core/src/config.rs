// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Policy for timeframes built from external input.

use jiff::civil::Date;

use crate::error::{Error, Result};
use crate::timeframe::Timeframe;

/// Policy settings applied when building timeframes from external input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether a timeframe may straddle a calendar year boundary.
    pub year_boundary: YearBoundary,
}

impl Config {
    /// Verifies that `timeframe` is acceptable under this configuration.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidRange`] when the year boundary policy rejects it.
    pub fn check(&self, timeframe: &Timeframe) -> Result<()> {
        match self.year_boundary {
            YearBoundary::Allow => Ok(()),
            YearBoundary::Reject => {
                if timeframe.is_empty() {
                    return Ok(());
                }
                let last = timeframe.end().yesterday()?;
                if last.year() == timeframe.start().year() {
                    Ok(())
                } else {
                    Err(Error::InvalidRange(format!(
                        "timeframe {timeframe} crosses a year boundary, which is rejected by configuration"
                    )))
                }
            }
        }
    }

    /// Builds `[start, end)` and checks it against this configuration.
    ///
    /// ## Errors
    ///
    /// Fails if `start` is after `end`, or the policy rejects the range.
    pub fn timeframe(&self, start: Date, end: Date) -> Result<Timeframe> {
        let timeframe = Timeframe::of(start, end)?;
        self.check(&timeframe)?;
        Ok(timeframe)
    }
}

/// Whether timeframes crossing a calendar year boundary are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearBoundary {
    /// Any `start <= end` is accepted.
    #[default]
    Allow,

    /// The first and the last day must share a calendar year.
    Reject,
}

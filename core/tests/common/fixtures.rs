// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timeframe factories for integration tests.

use jiff::civil::Date;
use timeframe_core::Timeframe;

/// Builds `[start, end)`, panicking on an invalid range.
pub fn tf(start: Date, end: Date) -> Timeframe {
    Timeframe::of(start, end).expect("test timeframe should be a valid range")
}

/// A whole calendar month.
#[allow(dead_code)]
pub fn month(year: i16, month: i8) -> Timeframe {
    Timeframe::of_month(year, month).expect("test month should be valid")
}

/// A whole calendar year.
#[allow(dead_code)]
pub fn year(year: i16) -> Timeframe {
    Timeframe::of_year(year).expect("test year should be valid")
}

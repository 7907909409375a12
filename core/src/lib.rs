// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Half-open date intervals ("timeframes") and their algebra.
//!
//! A [`Timeframe`] spans the calendar days from an inclusive start date to an
//! exclusive end date. It supports containment checks, intersection, cropping,
//! gap analysis over sets of covering timeframes, and month/year subdivision.
//!
//! ```
//! use jiff::civil::date;
//! use timeframe_core::Timeframe;
//!
//! let year = Timeframe::of_year(2009).unwrap();
//! let march = Timeframe::of_month(2009, 3).unwrap();
//! assert_eq!(march.days(), 31);
//! assert!(year.contains(&march));
//! assert!(year.contains(&date(2009, 12, 31)));
//! assert_eq!(year.to_string(), "2009-01-01/2010-01-01");
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod algebra;
mod config;
mod error;
mod iter;
mod timeframe;
mod wire;

pub use crate::algebra::Gaps;
pub use crate::config::{Config, YearBoundary};
pub use crate::error::{Error, Result};
pub use crate::iter::{Dates, FirstDaysOfMonths};
pub use crate::timeframe::{Timeframe, Within};

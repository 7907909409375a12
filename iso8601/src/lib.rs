// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse timeframes from ISO 8601 time intervals and a few legacy shapes.
//!
//! Accepted interval forms, with `/` or `--` between the sides:
//!
//! * `<date>/<date>`, where the second date is the last day included and may
//!   elide leading components (`2007-11-13/15`),
//! * `<date>/<duration>` and `<duration>/<date>` (`2007-02-28--P1Y`),
//!
//! as well as plain years, the canonical `YYYY-MM-DD/YYYY-MM-DD` form (end
//! exclusive), JSON text, and `{startDate, endDate}` mappings.

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

mod datetime;
mod duration;
mod input;
mod side;

pub use crate::datetime::{ClockTime, parse_date, parse_time};
pub use crate::duration::Duration;
pub use crate::input::{TimeframeInput, parse, parse_value, parse_with};
pub use crate::side::{IntervalSide, resolve_interval};

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by timeframe construction, algebra and parsing.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The bounds do not describe a valid range for the requested operation,
    /// e.g. the start is after the end, or the timeframe straddles a year
    /// boundary where a single year is required.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The input has a shape that cannot be turned into a timeframe.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The input looked like an interval but could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Calendar arithmetic left the supported date range.
    #[error("Calendar arithmetic failed: {0}")]
    Calendar(#[from] jiff::Error),
}

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

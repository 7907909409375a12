// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, io};

use jiff::civil::Date;
use serde::Serialize;
use timeframe_core::Timeframe;

use crate::util::ArgOutputFormat;

/// An item the formatter can list.
pub trait Row: fmt::Display + Serialize {
    /// Extra text shown after the item in text mode.
    fn detail(&self) -> Option<String> {
        None
    }
}

impl Row for Timeframe {
    fn detail(&self) -> Option<String> {
        Some(match self.days() {
            1 => "1 day".to_owned(),
            n => format!("{n} days"),
        })
    }
}

impl Row for Date {}

/// Renders lists of timeframes or dates as text or JSON.
#[derive(Debug, Clone)]
pub struct TimeframeFormatter {
    format: ArgOutputFormat,
    details: bool,
    placeholder: Option<&'static str>,
}

impl TimeframeFormatter {
    pub fn new() -> Self {
        Self {
            format: ArgOutputFormat::Text,
            details: false,
            placeholder: None,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Show the details of each row, e.g. the day count of a timeframe.
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Text printed instead of an empty list in text mode.
    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn format<'a, R: Row>(&'a self, rows: &'a [R]) -> Display<'a, R> {
        Display {
            rows,
            formatter: self,
        }
    }

    /// Writes the rows followed by a newline.
    pub fn write<R: Row>(&self, out: &mut impl io::Write, rows: &[R]) -> io::Result<()> {
        let rendered = self.format(rows).to_string();
        if rendered.is_empty() {
            return Ok(());
        }
        writeln!(out, "{rendered}")
    }
}

impl Default for TimeframeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Display<'a, R: Row> {
    rows: &'a [R],
    formatter: &'a TimeframeFormatter,
}

impl<R: Row> fmt::Display for Display<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string(self.rows).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Text => {
                if self.rows.is_empty() {
                    if let Some(placeholder) = self.formatter.placeholder {
                        write!(f, "{placeholder}")?;
                    }
                    return Ok(());
                }

                for (i, row) in self.rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{row}")?;
                    if self.formatter.details
                        && let Some(detail) = row.detail()
                    {
                        write!(f, "\t{detail}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};

use crate::config::Config;
use crate::formatter::TimeframeFormatter;
use crate::util::{ArgOutputFormat, get_input, get_inputs, parse_timeframe};

#[derive(Debug, Clone)]
pub struct CmdGaps {
    pub input: String,
    pub by: Vec<String>,
    pub output_format: Option<ArgOutputFormat>,
}

impl CmdGaps {
    pub const NAME: &str = "gaps";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the parts of a timeframe left uncovered by others")
            .arg(arg!(input: <INPUT> "The timeframe to analyze"))
            .arg(arg!(--by <INPUT>... "The covering timeframes").required(true))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: get_input(matches, "input"),
            by: get_inputs(matches, "by"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "computing gaps...");
        let timeframe = parse_timeframe(&self.input, config)?;
        let covering = self
            .by
            .iter()
            .map(|input| parse_timeframe(input, config))
            .collect::<Result<Vec<_>, _>>()?;

        let gaps = timeframe.gaps_left_by(&covering);
        let formatter = TimeframeFormatter::new()
            .with_output_format(ArgOutputFormat::or_configured(self.output_format, config))
            .with_details(true)
            .with_placeholder("covered");
        formatter.write(out, &gaps)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdIntersect {
    pub first: String,
    pub second: String,
    pub output_format: Option<ArgOutputFormat>,
}

impl CmdIntersect {
    pub const NAME: &str = "intersect";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the overlap of two timeframes")
            .arg(arg!(first: <A> "The first timeframe"))
            .arg(arg!(second: <B> "The second timeframe"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            first: get_input(matches, "first"),
            second: get_input(matches, "second"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "intersecting timeframes...");
        let first = parse_timeframe(&self.first, config)?;
        let second = parse_timeframe(&self.second, config)?;

        let overlap = first.intersect(&second);
        let formatter = TimeframeFormatter::new()
            .with_output_format(ArgOutputFormat::or_configured(self.output_format, config))
            .with_details(true)
            .with_placeholder("none");
        formatter.write(out, overlap.as_slice())?;
        Ok(())
    }
}

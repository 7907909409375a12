// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use timeframe_core::Timeframe;

use crate::config::Config;

/// The output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgOutputFormat {
    /// One item per line.
    #[default]
    Text,

    /// A JSON array.
    Json,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format, defaults to the configured one")
            .value_parser(value_parser!(ArgOutputFormat))
    }

    pub fn from(matches: &ArgMatches) -> Option<Self> {
        matches.get_one("output-format").copied()
    }

    /// The explicit choice if any, otherwise the configured format.
    pub fn or_configured(format: Option<Self>, config: &Config) -> Self {
        format.unwrap_or(config.output_format)
    }
}

pub fn arg_verbose() -> Arg {
    arg!(-v --verbose "Show debug logs on stderr")
}

pub fn get_verbose(matches: &ArgMatches) -> bool {
    matches.get_flag("verbose")
}

pub fn get_input(matches: &ArgMatches, id: &str) -> String {
    match matches.get_one::<String>(id) {
        Some(input) => input.clone(),
        None => unreachable!("{id} is required"),
    }
}

pub fn get_inputs(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|inputs| inputs.cloned().collect())
        .unwrap_or_default()
}

/// Parses a command-line input under the configured policy.
pub fn parse_timeframe(input: &str, config: &Config) -> Result<Timeframe, Box<dyn Error>> {
    timeframe_iso8601::parse_with(input, &config.core)
        .map_err(|e| format!("Invalid timeframe `{input}`: {e}").into())
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};
use jiff::civil::Date;

use crate::config::Config;
use crate::formatter::TimeframeFormatter;
use crate::util::{ArgOutputFormat, get_input, get_inputs, parse_timeframe};

const INPUT_HELP: &str = "A year, an ISO 8601 interval such as 2007-11-13/15, or JSON";

#[derive(Debug, Clone)]
pub struct CmdParse {
    pub inputs: Vec<String>,
    pub output_format: Option<ArgOutputFormat>,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("p")
            .about("Parse timeframes and print their canonical form")
            .arg(arg!(inputs: <INPUT>... "The timeframes to parse").long_help(INPUT_HELP))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            inputs: get_inputs(matches, "inputs"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing timeframes...");
        let timeframes = self
            .inputs
            .iter()
            .map(|input| parse_timeframe(input, config))
            .collect::<Result<Vec<_>, _>>()?;

        let formatter = TimeframeFormatter::new()
            .with_output_format(ArgOutputFormat::or_configured(self.output_format, config))
            .with_details(true);
        formatter.write(out, &timeframes)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdMonths {
    pub input: String,
    pub full: bool,
    pub output_format: Option<ArgOutputFormat>,
}

impl CmdMonths {
    pub const NAME: &str = "months";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Split a timeframe into its months")
            .arg(arg!(input: <INPUT> "The timeframe to split").long_help(INPUT_HELP))
            .arg(arg!(--full "Expand partial months at the boundaries to whole months"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: get_input(matches, "input"),
            full: matches.get_flag("full"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "splitting timeframe into months...");
        let timeframe = parse_timeframe(&self.input, config)?;
        let months = if self.full {
            timeframe.full_months()?
        } else {
            timeframe.months()
        };

        let formatter = TimeframeFormatter::new()
            .with_output_format(ArgOutputFormat::or_configured(self.output_format, config))
            .with_details(true);
        formatter.write(out, &months)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdDates {
    pub input: String,
    pub output_format: Option<ArgOutputFormat>,
}

impl CmdDates {
    pub const NAME: &str = "dates";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List every date of a timeframe")
            .arg(arg!(input: <INPUT> "The timeframe to list").long_help(INPUT_HELP))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: get_input(matches, "input"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing dates...");
        let timeframe = parse_timeframe(&self.input, config)?;
        let dates: Vec<Date> = timeframe.dates().collect();

        let formatter = TimeframeFormatter::new()
            .with_output_format(ArgOutputFormat::or_configured(self.output_format, config));
        formatter.write(out, &dates)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_parse(args: &[&str], config: &Config) -> Result<String, Box<dyn Error>> {
        let cmd = Command::new("test").subcommand(CmdParse::command());
        let matches = cmd.try_get_matches_from(args.iter().copied())?;
        let sub_matches = matches.subcommand_matches(CmdParse::NAME).unwrap();

        let mut out = Vec::new();
        CmdParse::from(sub_matches).run(config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn parse_prints_canonical_forms() {
        let config = Config::default();
        let output = run_parse(&["test", "parse", "2009", "2007-11-13/15"], &config).unwrap();
        assert_eq!(
            output,
            "2009-01-01/2010-01-01\t365 days\n2007-11-13/2007-11-16\t3 days\n"
        );

        let output = run_parse(
            &["test", "parse", "--output-format", "json", "2009"],
            &config,
        )
        .unwrap();
        assert_eq!(output, "[\"2009-01-01/2010-01-01\"]\n");
    }

    #[test]
    fn parse_uses_configured_format() {
        let config = Config {
            output_format: ArgOutputFormat::Json,
            ..Config::default()
        };
        let output = run_parse(&["test", "parse", "2009"], &config).unwrap();
        assert_eq!(output, "[\"2009-01-01/2010-01-01\"]\n");
    }

    #[test]
    fn parse_reports_invalid_input() {
        let config = Config::default();
        let err = run_parse(&["test", "parse", "2009", "not a timeframe"], &config).unwrap_err();
        assert!(err.to_string().contains("not a timeframe"));

        assert!(run_parse(&["test", "parse"], &config).is_err());
    }

    #[test]
    fn months_splits_timeframe() {
        let cmd = Command::new("test").subcommand(CmdMonths::command());
        let config = Config::default();

        let matches = cmd
            .clone()
            .try_get_matches_from(["test", "months", "2009-01-15/2009-03-10"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdMonths::NAME).unwrap();
        let mut out = Vec::new();
        CmdMonths::from(sub_matches).run(&config, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2009-01-15/2009-02-01\t17 days\n\
             2009-02-01/2009-03-01\t28 days\n\
             2009-03-01/2009-03-10\t9 days\n"
        );

        let matches = cmd
            .try_get_matches_from(["test", "months", "--full", "2009-01-15/2009-02-10"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdMonths::NAME).unwrap();
        let mut out = Vec::new();
        CmdMonths::from(sub_matches).run(&config, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2009-01-01/2009-02-01\t31 days\n2009-02-01/2009-03-01\t28 days\n"
        );
    }

    #[test]
    fn dates_lists_every_day() {
        let cmd = Command::new("test").subcommand(CmdDates::command());
        let matches = cmd
            .try_get_matches_from(["test", "dates", "2008-02-27/03-01"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdDates::NAME).unwrap();

        let mut out = Vec::new();
        CmdDates::from(sub_matches)
            .run(&Config::default(), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2008-02-27\n2008-02-28\n2008-02-29\n2008-03-01\n"
        );
    }
}

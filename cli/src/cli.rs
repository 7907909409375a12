// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_analyze::{CmdGaps, CmdIntersect};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_timeframe::{CmdDates, CmdMonths, CmdParse};
use crate::config::parse_config;
use crate::util::{arg_verbose, get_verbose};

/// Name of the binary, also used for the config directory.
pub const APP_NAME: &str = "timeframe";

/// Run the timeframe command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(2);
        }
    };

    init_tracing(cli.verbose);
    if let Err(e) = cli.run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

/// Logs go to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    if let Err(e) = result {
        eprintln!("{} failed to install logger: {}", "Warning:".yellow(), e);
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Whether to show debug logs
    pub verbose: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Parse, inspect and compare timeframes, half-open date intervals.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $TIMEFRAME_CONFIG, then to \
$XDG_CONFIG_HOME/timeframe/config.toml on Linux and MacOS, \
%APPDATA%/timeframe/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg_verbose())
            .subcommand(CmdParse::command())
            .subcommand(CmdMonths::command())
            .subcommand(CmdDates::command())
            .subcommand(CmdGaps::command())
            .subcommand(CmdIntersect::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::{Dates, GenerateCompletion, Gaps, Intersect, Months, Parse};
        let command = match matches.subcommand() {
            Some((CmdParse::NAME, matches)) => Parse(CmdParse::from(matches)),
            Some((CmdMonths::NAME, matches)) => Months(CmdMonths::from(matches)),
            Some((CmdDates::NAME, matches)) => Dates(CmdDates::from(matches)),
            Some((CmdGaps::NAME, matches)) => Gaps(CmdGaps::from(matches)),
            Some((CmdIntersect::NAME, matches)) => Intersect(CmdIntersect::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        let verbose = get_verbose(matches);
        Ok(Cli {
            config,
            verbose,
            command,
        })
    }

    /// Run the command, writing its output to stdout
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, &mut io::stdout().lock())
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Print canonical forms
    Parse(CmdParse),

    /// Split into months
    Months(CmdMonths),

    /// List dates
    Dates(CmdDates),

    /// Show uncovered parts
    Gaps(CmdGaps),

    /// Show the overlap of two timeframes
    Intersect(CmdIntersect),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command, loading the configuration file only if it is needed
    #[rustfmt::skip]
    pub fn run(self, config: Option<PathBuf>, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        use Commands::{Dates, GenerateCompletion, Gaps, Intersect, Months, Parse};
        let load = || {
            tracing::debug!("parsing configuration...");
            parse_config(config)
        };
        match self {
            Parse(a)              => a.run(&load()?, out),
            Months(a)             => a.run(&load()?, out),
            Dates(a)              => a.run(&load()?, out),
            Gaps(a)               => a.run(&load()?, out),
            Intersect(a)          => a.run(&load()?, out),
            GenerateCompletion(a) => a.run(out),
        }
    }
}

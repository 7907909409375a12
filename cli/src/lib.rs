// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for `timeframe-core` and `timeframe-iso8601`.

mod cli;
mod cmd_analyze;
mod cmd_generate_completion;
mod cmd_timeframe;
mod config;
mod formatter;
mod util;

pub use crate::cli::{APP_NAME, Cli, Commands, run};
pub use crate::cmd_analyze::{CmdGaps, CmdIntersect};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_timeframe::{CmdDates, CmdMonths, CmdParse};
pub use crate::config::{Config, parse_config};
pub use crate::formatter::{Row, TimeframeFormatter};
pub use crate::util::ArgOutputFormat;

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::builder::PossibleValue;
use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Shell as BuiltinShell, generate};
use clap_complete_nushell::Nushell;

use crate::{APP_NAME, Cli};

/// Prints a completion script for the whole `timeframe` command tree.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a completion script for a shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Shell>("shell") {
            Some(shell) => Self { shell: *shell },
            None => unreachable!("shell is required"),
        }
    }

    pub fn run(self, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "writing completion script...");
        let mut cmd = Cli::command();
        match self.shell {
            Shell::Builtin(shell) => generate(shell, &mut cmd, APP_NAME, out),
            Shell::Nushell => generate(Nushell, &mut cmd, APP_NAME, out),
        }
        out.flush()?;
        Ok(())
    }
}

/// The shells `clap_complete` supports, plus Nushell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Builtin(BuiltinShell),
    Nushell,
}

impl ValueEnum for Shell {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Shell::Builtin(BuiltinShell::Bash),
            Shell::Builtin(BuiltinShell::Elvish),
            Shell::Builtin(BuiltinShell::Fish),
            Shell::Nushell,
            Shell::Builtin(BuiltinShell::PowerShell),
            Shell::Builtin(BuiltinShell::Zsh),
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Shell::Builtin(shell) => shell.to_possible_value(),
            Shell::Nushell => Some(PossibleValue::new("nushell")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: &str) -> String {
        let matches = Cli::command()
            .try_get_matches_from(["timeframe", "generate-completion", shell])
            .unwrap_or_else(|e| panic!("Failed to parse for shell '{shell}': {e}"));
        let sub_matches = matches.subcommand_matches(CmdGenerateCompletion::NAME).unwrap();

        let mut out = Vec::new();
        CmdGenerateCompletion::from(sub_matches).run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn completes_every_subcommand() {
        for shell in ["bash", "elvish", "fish", "nushell", "powershell", "zsh"] {
            let script = script(shell);
            for name in ["parse", "months", "dates", "gaps", "intersect"] {
                assert!(script.contains(name), "{shell} script misses {name}");
            }
        }
    }

    #[test]
    fn maps_shell_names() {
        let parse = |name: &str| Shell::from_str(name, false);
        assert_eq!(parse("bash"), Ok(Shell::Builtin(BuiltinShell::Bash)));
        assert_eq!(parse("powershell"), Ok(Shell::Builtin(BuiltinShell::PowerShell)));
        assert_eq!(parse("nushell"), Ok(Shell::Nushell));
        assert!(parse("cmd").is_err());

        let err = Cli::command()
            .try_get_matches_from(["timeframe", "generate-completion", "cmd"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}

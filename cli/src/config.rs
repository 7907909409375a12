// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use timeframe_core::Config as CoreConfig;

use crate::{APP_NAME, util::ArgOutputFormat};

const TIMEFRAME_CONFIG_ENV: &str = "TIMEFRAME_CONFIG";

/// Loads the configuration.
///
/// The file is taken from `path`, then from `TIMEFRAME_CONFIG`, then from
/// `timeframe/config.toml` in the user config directory. Only the last one
/// may be absent, in which case the defaults apply.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TIMEFRAME_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e).into())
}

/// Configuration for the `timeframe` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format used when a command does not ask for one.
    pub output_format: ArgOutputFormat,

    /// Policy applied to every parsed timeframe.
    pub core: CoreConfig,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

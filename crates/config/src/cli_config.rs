// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path, ConfigLocation};
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use path_clean::clean;
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "polycalc.config.yaml";
pub const ENV_PREFIX: &str = "POLYCALC_";

/// Settings for the `polycalc` command line tool
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Directory that relative polynomial file paths are resolved against
    pub data_dir: PathBuf,
    /// Fixed number of decimals for printed evaluations. Unset prints the
    /// shortest exact representation.
    pub precision: Option<usize>,
    /// The file this configuration was read from, if any
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            precision: None,
            config_file: None,
        }
    }
}

impl CliConfig {
    /// Resolve a polynomial file path against `data_dir`
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            return path.to_path_buf();
        }
        clean(self.data_dir.join(path))
    }

    /// Render an evaluation result using the configured precision
    pub fn format_value(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        }
    }
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("polycalc")
    }
}

/// Load the configuration from the given file, or from `polycalc.config.yaml`
/// found in the working directory, one of its parents or the OS config folder.
///
/// Later sources win: defaults, then the YAML file, then `POLYCALC_*`
/// environment variables. A missing file is only an error when it was passed
/// explicitly.
pub fn load_config(cli_file: Option<String>) -> Result<CliConfig> {
    let location = resolve_config_path(
        find_in_parent,
        env::current_dir()?,
        OsDirs::config_dir(),
        DEFAULT_CONFIG_NAME,
        cli_file.map(PathBuf::from),
    );

    load_config_from(&location)
}

pub fn load_config_from(location: &ConfigLocation) -> Result<CliConfig> {
    let path = location.path();
    let exists = path.is_file();

    if location.is_explicit() && !exists {
        bail!("Configuration file not found: {}", path.display());
    }

    let mut figment = Figment::from(Serialized::defaults(CliConfig::default()));
    if exists {
        debug!(path = %path.display(), "Loading configuration file");
        figment = figment.merge(Yaml::file(path));
    }

    let mut config: CliConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not parse configuration")?;

    config.config_file = exists.then(|| path.to_path_buf());
    Ok(config)
}

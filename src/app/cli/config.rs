//! TOML configuration file parsing and loading
//!
//! The config file supplies defaults for anything not given on the command
//! line, including start-up overrides of the injected build values under a
//! `[build]` table.

use crate::app::error::ConfigError;
use crate::core::logging::{LOG_FORMATS, LOG_LEVELS};
use crate::core::strings::title_case;
use std::path::{Path, PathBuf};

use super::args::Args;

/// Default config location: `<config_dir>/<Command>/<command>.toml`
pub fn default_config_path(command_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| {
        d.join(title_case(command_name))
            .join(format!("{}.toml", command_name))
    })
}

/// Load the configuration file.
///
/// An explicitly named file must exist; the default location is optional.
pub fn load_config(
    config_file: Option<&Path>,
    command_name: &str,
) -> Result<Option<toml::Table>, ConfigError> {
    let config_path = match config_file {
        Some(path) if !path.exists() => return Err(ConfigError::not_found(path)),
        Some(path) => path.to_path_buf(),
        None => match default_config_path(command_name) {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    log::debug!("Loading configuration from {}", config_path.display());
    let contents =
        std::fs::read_to_string(&config_path).map_err(|e| ConfigError::io(&config_path, e))?;
    let table = toml::from_str::<toml::Table>(&contents)
        .map_err(|e| ConfigError::parse(&config_path, &e))?;
    Ok(Some(table))
}

fn get_str<'a>(config: &'a toml::Table, key: &str) -> Result<Option<&'a str>, ConfigError> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| ConfigError::invalid_value(key, "a string")),
    }
}

fn get_choice<'a>(
    config: &'a toml::Table,
    key: &str,
    choices: &[&str],
) -> Result<Option<&'a str>, ConfigError> {
    match get_str(config, key)? {
        Some(value) if !choices.contains(&value) => Err(ConfigError::invalid_value(
            key,
            &format!("one of: {}", choices.join(", ")),
        )),
        other => Ok(other),
    }
}

fn fill(target: &mut Option<String>, value: Option<&str>) {
    if target.is_none() {
        *target = value.map(str::to_string);
    }
}

impl Args {
    /// Apply TOML configuration values to Args. Values already set on the
    /// command line win; unknown keys are ignored.
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> Result<(), ConfigError> {
        fill(&mut self.name, get_str(config, "name")?);
        fill(&mut self.log_level, get_choice(config, "log-level", &LOG_LEVELS)?);
        fill(&mut self.log_format, get_choice(config, "log-format", &LOG_FORMATS)?);

        if let Some(log_file) = get_str(config, "log-file")? {
            if self.log_file.is_none() {
                self.log_file = Some(PathBuf::from(log_file));
            }
        }

        if let Some(value) = config.get("color") {
            let color = value
                .as_bool()
                .ok_or_else(|| ConfigError::invalid_value("color", "a boolean"))?;
            self.config_color = Some(color);
        }

        if let Some(build) = config.get("build") {
            let build = build
                .as_table()
                .ok_or_else(|| ConfigError::invalid_value("build", "a table"))?;
            fill(&mut self.set_version, get_str(build, "version")?);
            fill(&mut self.set_revision, get_str(build, "revision")?);
            fill(&mut self.set_build_date, get_str(build, "build-date")?);
        }

        Ok(())
    }
}

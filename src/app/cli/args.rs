//! Command-line arguments and their resolution into build information and
//! logging settings.

use crate::core::logging::{LogSettings, LOG_FORMATS, LOG_LEVELS};
use crate::core::version::BuildInfo;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

use super::display::OutputFormat;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "buildinfo")]
#[command(about = "Print the version, revision, build date and toolchain of this build")]
#[command(disable_version_flag = true)] // --version prints the description line instead
pub struct Args {
    /// Program name shown at the start of the line
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Print version information and exit
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    pub show_version: bool,

    /// Output format
    #[arg(long = "format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Override the injected version label
    #[arg(long = "set-version", value_name = "VERSION")]
    pub set_version: Option<String>,

    /// Override the injected revision
    #[arg(long = "set-revision", value_name = "REVISION")]
    pub set_revision: Option<String>,

    /// Override the injected build date (empty means "now")
    #[arg(long = "set-build-date", value_name = "DATE")]
    pub set_build_date: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = LOG_LEVELS)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = LOG_FORMATS)]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(short = 'g', long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Colour preference from the config file, used when neither flag is given
    #[arg(skip)]
    pub config_color: Option<bool>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the command name from the clap metadata
    pub fn command_name() -> String {
        Self::command().get_name().to_string()
    }

    /// Name rendered at the start of the line. `--version` always uses the command name.
    pub fn display_name(&self) -> String {
        match (&self.name, self.show_version) {
            (Some(name), false) => name.clone(),
            _ => Self::command_name(),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.show_version {
            return OutputFormat::Text;
        }
        OutputFormat::from_name(self.format.as_deref())
    }

    /// Apply the start-up overrides on top of the injected values
    pub fn resolve_build_info(&self, base: BuildInfo) -> BuildInfo {
        let mut info = base;
        if let Some(version) = &self.set_version {
            info = info.with_version(version.as_str());
        }
        if let Some(revision) = &self.set_revision {
            info = info.with_revision(revision.as_str());
        }
        if let Some(build_date) = &self.set_build_date {
            info = info.with_build_date(build_date.as_str());
        }
        info
    }

    /// Whether log output should be coloured: flags first, then config, then TTY detection
    pub fn use_color(&self) -> bool {
        use std::io::IsTerminal;

        if self.no_color || self.log_file_path().is_some() {
            return false;
        }
        if self.color {
            return true;
        }
        self.config_color
            .unwrap_or_else(|| std::io::stderr().is_terminal())
    }

    /// Log file path with the magic values "none" and "-" filtered out
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_ref()
            .filter(|path| {
                let raw = path.to_string_lossy();
                !raw.eq_ignore_ascii_case("none") && raw != "-"
            })
            .cloned()
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            file: self.log_file_path(),
            color: self.use_color(),
        }
    }
}

//! Logging setup on top of flexi_logger
//!
//! Log lines go to stderr (or a file) so stdout only carries the version line.

use flexi_logger::{DeferredNow, FileSpec, Logger, LoggerHandle};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

// Keeps the logger alive for the process lifetime
static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Level used when neither the command line nor the config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted log formats
pub const LOG_FORMATS: [&str; 3] = ["text", "ext", "json"];

/// Accepted log levels
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Resolved logging options, merged from command line and config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub level: Option<String>,
    pub format: Option<String>,
    pub file: Option<PathBuf>,
    pub color: bool,
}

/// Start the global logger. Only the first successful call takes effect.
///
/// Format, file and colour are fixed once the logger has started, so callers
/// merge the config file into `settings` before calling this.
pub fn init_logging(settings: &LogSettings) -> Result<(), Box<dyn std::error::Error>> {
    let level = settings.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
    let mut logger = Logger::try_with_str(level)?;

    logger = match (settings.format.as_deref().unwrap_or("text"), settings.color) {
        ("json", _) => logger.format(json_format),
        ("ext", true) => logger.format(extended_color_format),
        ("ext", false) => logger.format(extended_format),
        (_, true) => logger.format(simple_color_format),
        (_, false) => logger.format(simple_format),
    };

    if let Some(file_path) = settings.file.as_deref() {
        let file_spec = FileSpec::try_from(file_path)?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));

    Ok(())
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

fn level_colored(level: log::Level) -> colored::ColoredString {
    use colored::Colorize;

    let abbr = level_abbr(level);
    match level {
        log::Level::Error => abbr.red().bold(),
        log::Level::Warn => abbr.yellow(),
        log::Level::Info => abbr.green(),
        log::Level::Debug => abbr.blue(),
        log::Level::Trace => abbr.magenta(),
    }
}

// "YYYY-MM-DD HH:mm:ss.fff INF message"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args()
    )
}

fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::Colorize;

    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored(record.level()),
        record.args()
    )
}

// "YYYY-MM-DD HH:mm:ss.fff INF message (app/startup.rs:42)"
fn extended_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line())
    )
}

fn extended_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::Colorize;

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line()).dimmed()
    )
}

// Compact JSON, one object per record: timestamp, level, message, target
fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let json_obj = serde_json::json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr(record.level()),
        "message": record.args().to_string(),
        "target": format_target_as_path(record.target(), record.line()),
    });

    match serde_json::to_string(&json_obj) {
        Ok(json_string) => w.write_all(json_string.as_bytes()),
        Err(_) => w.write_all(b"{\"error\":\"Failed to serialize log message\"}"),
    }
}

// buildinfo::app::startup -> app/startup.rs:<line>
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = match target.strip_prefix("buildinfo::") {
        Some(without_prefix) => without_prefix.replace("::", "/") + ".rs",
        None => target.replace("::", "/"),
    };

    match line {
        Some(line_num) => format!("{}:{}", path_like, line_num),
        None => path_like,
    }
}

//! Rendering of the build information for stdout

use crate::core::time::{FixedTimeProvider, TimeProvider};
use crate::core::version::BuildInfo;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The single description line
    #[default]
    Text,
    /// One JSON object with the resolved fields and the description line
    Json,
}

impl OutputFormat {
    /// Unknown or missing names fall back to text
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if n.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Serialize)]
struct VersionReport<'a> {
    name: &'a str,
    version: &'a str,
    revision: &'a str,
    build_date: Cow<'a, str>,
    toolchain_version: &'a str,
    description: String,
}

/// Render build information in the requested format.
///
/// The clock is read once so the JSON date field and the description agree.
pub fn render(
    info: &BuildInfo,
    name: &str,
    format: OutputFormat,
    clock: &dyn TimeProvider,
) -> Result<String, serde_json::Error> {
    let frozen = FixedTimeProvider::new(clock.system_time());

    match format {
        OutputFormat::Text => Ok(info.describe_with(name, &frozen)),
        OutputFormat::Json => {
            let report = VersionReport {
                name,
                version: info.version(),
                revision: info.revision(),
                build_date: info.date_or_now(&frozen),
                toolchain_version: info.toolchain_version(),
                description: info.describe_with(name, &frozen),
            };
            serde_json::to_string(&report)
        }
    }
}

//! Build metadata and the one-line description rendered from it.
//!
//! The build script generates `version.rs` with the values it captured from git,
//! the build clock and the compiling `rustc`. They are included here so this module
//! is the single source of truth for the rest of the crate.
//!
//! ```
//! use buildinfo::core::time::FixedTimeProvider;
//! use buildinfo::core::version::BuildInfo;
//!
//! let info = BuildInfo::new("1.2.3", "abc123", "2025-01-01T00:00:00Z", "rustc 1.80.0");
//! assert_eq!(
//!     info.describe_with("myapp", &FixedTimeProvider::now()),
//!     "myapp, version: 1.2.3, revision: abc123, build date: 2025-01-01T00:00:00Z, rustc 1.80.0"
//! );
//! ```

use super::time::{SystemTimeProvider, TimeProvider};
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::sync::OnceLock;
use std::time::SystemTime;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/version.rs"));
}

pub use generated::{BUILD_DATE, REVISION, TOOLCHAIN_VERSION, VERSION};

pub use super::stamp::{DEFAULT_REVISION, DEFAULT_VERSION};

/// Pattern for the substituted build date, e.g. `Wed Jan  1 00:00:00 +00:00 2025`.
///
/// chrono renders `%Z` for local time as a numeric offset (`+00:00`, `-07:00`),
/// not a zone abbreviation such as `UTC` or `MST`.
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

static INSTALLED: OnceLock<BuildInfo> = OnceLock::new();

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Build information has already been installed for this process")]
    AlreadyInstalled,
}

impl crate::core::error_handling::ContextualError for VersionError {
    fn is_user_actionable(&self) -> bool {
        false // Programming error, nothing the user can change
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

/// Version, revision, build date and toolchain of the running binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    version: String,
    revision: String,
    build_date: String,
    toolchain_version: String,
}

impl BuildInfo {
    pub fn new(
        version: impl Into<String>,
        revision: impl Into<String>,
        build_date: impl Into<String>,
        toolchain_version: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            revision: revision.into(),
            build_date: build_date.into(),
            toolchain_version: toolchain_version.into(),
        }
    }

    /// Values captured by the build script
    pub fn from_build() -> Self {
        Self::new(VERSION, REVISION, BUILD_DATE, TOOLCHAIN_VERSION)
    }

    /// Values an uninjected build carries: `dev`, `none` and no build date
    pub fn unstamped() -> Self {
        Self::new(DEFAULT_VERSION, DEFAULT_REVISION, "", TOOLCHAIN_VERSION)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    pub fn with_build_date(mut self, build_date: impl Into<String>) -> Self {
        self.build_date = build_date.into();
        self
    }

    pub fn with_toolchain_version(mut self, toolchain_version: impl Into<String>) -> Self {
        self.toolchain_version = toolchain_version.into();
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn build_date(&self) -> &str {
        &self.build_date
    }

    pub fn toolchain_version(&self) -> &str {
        &self.toolchain_version
    }

    /// The build date, or the clock's current local time when none was injected.
    /// A non-empty build date is returned verbatim.
    pub fn date_or_now(&self, clock: &dyn TimeProvider) -> Cow<'_, str> {
        if self.build_date.is_empty() {
            Cow::Owned(format_wall_clock(clock.system_time()))
        } else {
            Cow::Borrowed(&self.build_date)
        }
    }

    /// Render the description line using the system clock
    pub fn describe(&self, name: &str) -> String {
        self.describe_with(name, &SystemTimeProvider)
    }

    /// Render `"<name>, version: <v>, revision: <r>, build date: <d>, <toolchain>"`
    pub fn describe_with(&self, name: &str, clock: &dyn TimeProvider) -> String {
        format!(
            "{}, version: {}, revision: {}, build date: {}, {}",
            name,
            self.version,
            self.revision,
            self.date_or_now(clock),
            self.toolchain_version
        )
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Format a point in time with [`DATE_FORMAT`] in the local timezone
pub fn format_wall_clock(at: SystemTime) -> String {
    DateTime::<Local>::from(at).format(DATE_FORMAT).to_string()
}

/// Store the process-wide build information. Only the first call succeeds.
pub fn install(info: BuildInfo) -> Result<(), VersionError> {
    INSTALLED
        .set(info)
        .map_err(|_| VersionError::AlreadyInstalled)?;
    log::debug!("Installed build information: {:?}", INSTALLED.get());
    Ok(())
}

/// Process-wide build information. Falls back to the build-time values, and
/// freezes them, if nothing was installed before the first read.
pub fn current() -> &'static BuildInfo {
    INSTALLED.get_or_init(BuildInfo::from_build)
}

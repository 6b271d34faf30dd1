//! Build-time stamping helpers.
//!
//! Shared with `build.rs` through `#[path]`, so this file must only depend on std.

use std::path::{Path, PathBuf};

/// Version label used when nothing was injected
pub const DEFAULT_VERSION: &str = "dev";

/// Revision used when nothing was injected
pub const DEFAULT_REVISION: &str = "none";

/// Tags considered release versions by `git describe --match`
pub const VERSION_TAG_PATTERN: &str = "v[0-9]*.[0-9]*.[0-9]*";

/// Files under the git directory whose changes mean HEAD, a branch or a tag moved
const GIT_WATCH_FILES: [&str; 5] = ["HEAD", "logs/HEAD", "refs/heads", "refs/tags", "packed-refs"];

/// `v1.2.3` -> `1.2.3`; no tag (or a bare prefix) falls back to `dev`
pub fn version_from_tag(tag: Option<&str>) -> String {
    tag.map(str::trim)
        .map(|t| t.chars().skip(1).collect::<String>())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

/// Short commit hash, or `none` outside a repository
pub fn revision_or_default(revision: Option<&str>) -> String {
    revision
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_REVISION)
        .to_string()
}

/// Existing git paths the build script must watch to restamp on commit, tag or checkout.
/// Missing paths are skipped because cargo reruns on every build for those.
pub fn git_watch_paths(git_dir: &Path) -> Vec<PathBuf> {
    GIT_WATCH_FILES
        .iter()
        .map(|f| git_dir.join(f))
        .filter(|p| p.exists())
        .collect()
}

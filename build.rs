use chrono::Local;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

#[path = "src/core/stamp.rs"]
#[allow(dead_code)]
mod stamp;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("version.rs");

    let version = env::var("BUILDINFO_VERSION").ok().unwrap_or_else(|| {
        let tag = git(&[
            "describe",
            "--tags",
            "--abbrev=0",
            &format!("--match={}", stamp::VERSION_TAG_PATTERN),
        ]);
        stamp::version_from_tag(tag.as_deref())
    });

    let revision = env::var("BUILDINFO_REVISION").ok().unwrap_or_else(|| {
        stamp::revision_or_default(git(&["rev-parse", "--short", "HEAD"]).as_deref())
    });

    // An explicitly empty BUILDINFO_BUILD_DATE is kept empty; the formatter fills in the clock.
    let build_date = env::var("BUILDINFO_BUILD_DATE")
        .ok()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%dT%H:%M:%S").to_string());

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let toolchain_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "rustc unknown".to_string());

    let mut f = File::create(&dest_path).unwrap();

    // Debug formatting escapes quotes and backslashes in injected values.
    writeln!(
        &mut f,
        r###"pub const VERSION: &str = {:?};
pub const REVISION: &str = {:?};
pub const BUILD_DATE: &str = {:?};
pub const TOOLCHAIN_VERSION: &str = {:?};"###,
        version, revision, build_date, toolchain_version
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    // Restamp the build date whenever the sources are rebuilt
    println!("cargo:rerun-if-changed=src");
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]).map(PathBuf::from) {
        for path in stamp::git_watch_paths(&git_dir) {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
    println!("cargo:rerun-if-env-changed=BUILDINFO_VERSION");
    println!("cargo:rerun-if-env-changed=BUILDINFO_REVISION");
    println!("cargo:rerun-if-env-changed=BUILDINFO_BUILD_DATE");
}

/// Run a git command and return its trimmed stdout when it succeeds.
fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

//! CLI argument parsing tests

use buildinfo::app::cli::args::Args;
use buildinfo::app::cli::display::OutputFormat;
use buildinfo::BuildInfo;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["buildinfo"]).unwrap();

    assert_eq!(args.name, None);
    assert!(!args.show_version);
    assert_eq!(args.output_format(), OutputFormat::Text);
    assert_eq!(args.display_name(), "buildinfo");
    assert_eq!(args.config_file, None);
    assert_eq!(args.log_level, None);
}

#[test]
fn test_short_and_long_flags() {
    let args = Args::try_parse_from([
        "buildinfo",
        "-n",
        "myapp",
        "-c",
        "custom.toml",
        "-l",
        "debug",
        "-o",
        "ext",
        "-f",
        "out.log",
    ])
    .unwrap();

    assert_eq!(args.name.as_deref(), Some("myapp"));
    assert_eq!(args.config_file, Some(PathBuf::from("custom.toml")));
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_format.as_deref(), Some("ext"));
    assert_eq!(args.log_file_path(), Some(PathBuf::from("out.log")));
}

#[test]
fn test_equals_syntax() {
    let args = Args::try_parse_from([
        "buildinfo",
        "--name=myapp",
        "--format=json",
        "--set-version=1.2.3",
    ])
    .unwrap();

    assert_eq!(args.display_name(), "myapp");
    assert_eq!(args.output_format(), OutputFormat::Json);
    assert_eq!(args.set_version.as_deref(), Some("1.2.3"));
}

#[test]
fn test_empty_overrides_accepted() {
    let args = Args::try_parse_from([
        "buildinfo",
        "--set-version=",
        "--set-revision=",
        "--set-build-date=",
    ])
    .unwrap();

    let info = args.resolve_build_info(BuildInfo::from_build());
    assert_eq!(info.version(), "");
    assert_eq!(info.revision(), "");
    assert_eq!(info.build_date(), "");
}

#[test]
fn test_builtin_version_flag_replaced() {
    let args = Args::try_parse_from(["buildinfo", "--version"]).unwrap();
    assert!(args.show_version);

    let args = Args::try_parse_from(["buildinfo", "-V"]).unwrap();
    assert!(args.show_version);
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Args::try_parse_from(["buildinfo", "--no-such-flag"]).is_err());
}

//! End-to-end tests running the built `buildinfo` binary

use buildinfo::core::version::{format_wall_clock, TOOLCHAIN_VERSION};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_buildinfo"))
        .args(args)
        .output()
        .expect("binary should start")
}

fn stdout_line(output: &Output) -> String {
    assert!(
        output.status.success(),
        "exit status {:?}, stderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8");
    stdout
        .strip_suffix('\n')
        .expect("output should end with a newline")
        .to_string()
}

/// Every wall-clock rendering between `before` and `after`, second by second
fn wall_clock_candidates(before: SystemTime, after: SystemTime) -> Vec<String> {
    let span = after.duration_since(before).unwrap_or_default().as_secs() + 1;
    (0..=span)
        .map(|s| format_wall_clock(before + Duration::from_secs(s)))
        .collect()
}

#[test]
fn test_prints_exact_line_with_overrides() {
    let output = run(&[
        "--name",
        "myapp",
        "--set-version",
        "1.2.3",
        "--set-revision",
        "abc123",
        "--set-build-date",
        "2025-01-01T00:00:00Z",
    ]);

    assert_eq!(
        stdout_line(&output),
        format!(
            "myapp, version: 1.2.3, revision: abc123, build date: 2025-01-01T00:00:00Z, {}",
            TOOLCHAIN_VERSION
        )
    );
}

#[test]
fn test_all_empty_substitutes_current_time() {
    let before = SystemTime::now();
    let output = run(&[
        "--name=",
        "--set-version=",
        "--set-revision=",
        "--set-build-date=",
    ]);
    let after = SystemTime::now();

    let line = stdout_line(&output);
    let prefix = ", version: , revision: , build date: ";
    let suffix = format!(", {}", TOOLCHAIN_VERSION);
    assert!(line.starts_with(prefix), "got: {}", line);
    assert!(line.ends_with(&suffix), "got: {}", line);

    let date = &line[prefix.len()..line.len() - suffix.len()];
    assert!(!date.is_empty());
    assert!(
        wall_clock_candidates(before, after).iter().any(|c| c == date),
        "date {:?} is not the current time",
        date
    );
}

#[test]
fn test_version_flag_uses_command_name() {
    let output = run(&["--version", "--name", "ignored", "--set-build-date", "fixed"]);
    let line = stdout_line(&output);

    assert!(line.starts_with("buildinfo, version: "), "got: {}", line);
    assert!(line.contains(", build date: fixed, "), "got: {}", line);
}

#[test]
fn test_json_output() {
    let output = run(&[
        "--format",
        "json",
        "--name",
        "myapp",
        "--set-version",
        "1.2.3",
        "--set-revision",
        "abc123",
        "--set-build-date",
        "2025-01-01",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout_line(&output)).unwrap();

    assert_eq!(value["name"], "myapp");
    assert_eq!(value["version"], "1.2.3");
    assert_eq!(value["revision"], "abc123");
    assert_eq!(value["build_date"], "2025-01-01");
    assert_eq!(value["toolchain_version"], TOOLCHAIN_VERSION);
    assert_eq!(
        value["description"],
        format!(
            "myapp, version: 1.2.3, revision: abc123, build date: 2025-01-01, {}",
            TOOLCHAIN_VERSION
        )
    );
}

#[test]
fn test_config_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buildinfo.toml");
    std::fs::write(
        &path,
        "name = \"configured\"\n[build]\nversion = \"4.5.6\"\nrevision = \"feed\"\nbuild-date = \"then\"\n",
    )
    .unwrap();

    let output = run(&["--config-file", path.to_str().unwrap()]);
    assert_eq!(
        stdout_line(&output),
        format!(
            "configured, version: 4.5.6, revision: feed, build date: then, {}",
            TOOLCHAIN_VERSION
        )
    );
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let output = run(&["--no-color", "--config-file", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("FATAL: The specified configuration file does not exist"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_invalid_flag_fails() {
    let output = run(&["--format", "yaml"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

/// Contents of every `.log` file flexi_logger wrote into `dir`
fn log_file_contents(dir: &std::path::Path) -> String {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "log"))
        .map(|path| std::fs::read_to_string(path).unwrap())
        .collect()
}

#[test]
fn test_config_logging_keys_write_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("buildinfo.log");
    let config_path = dir.path().join("buildinfo.toml");
    std::fs::write(
        &config_path,
        format!(
            "log-level = \"debug\"\nlog-format = \"json\"\nlog-file = {:?}\n",
            log_path.display().to_string()
        ),
    )
    .unwrap();

    let output = run(&[
        "--config-file",
        config_path.to_str().unwrap(),
        "--set-build-date",
        "fixed",
    ]);

    // stdout still carries only the line; log records go to the configured file
    assert!(stdout_line(&output).contains(", build date: fixed, "));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("DBG"), "stderr: {}", stderr);

    let logged = log_file_contents(dir.path());
    let records: Vec<serde_json::Value> = logged
        .lines()
        .map(|line| serde_json::from_str(line).expect("log lines should be JSON"))
        .collect();
    assert!(
        records
            .iter()
            .any(|r| r["level"] == "DBG"
                && r["message"].as_str().is_some_and(|m| m.starts_with("Rendered build information"))),
        "log file: {}",
        logged
    );
}

#[test]
fn test_config_log_level_applies_to_startup_records() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("buildinfo.toml");
    std::fs::write(&config_path, "log-level = \"info\"\n").unwrap();

    let output = run(&[
        "--no-color",
        "--config-file",
        config_path.to_str().unwrap(),
        "--set-version",
        "7.8.9",
    ]);

    assert!(stdout_line(&output).contains("version: 7.8.9"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("INF Build information: version=\"7.8.9\""),
        "stderr: {}",
        stderr
    );
}

mod helpers;

use helpers::{log_line, logtally_cmd, sample_log_lines, write_log, write_user_config};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_report_ranks_clients_and_paths() {
    let temp = TempDir::new().unwrap();
    let log = write_log(temp.path(), "access.log", &sample_log_lines());

    let mut cmd = logtally_cmd(temp.path());
    cmd.arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("File: access.log"))
        .stdout(predicate::str::contains("Lines: 18"))
        .stdout(predicate::str::contains("Unique clients: 11"))
        .stdout(predicate::str::contains(
            "Top clients:\n  1. 168.41.191.40 - 4 requests\n  2. 177.71.128.21 - 3 requests\n  3. 50.112.00.11 - 3 requests\n",
        ))
        .stdout(predicate::str::contains(
            "Top paths:\n  1. /docs/manage-websites - 11 visits\n  2. / - 2 visits\n  3. /asset.css - 1 visit\n",
        ))
        .stdout(predicate::str::contains(
            "Parsed 18 lines: 18 successful (100.0%), 0 failed",
        ))
        .stdout(predicate::str::contains("Status codes: 200=10, 404=8"));
}

#[test]
fn test_malformed_lines_reported() {
    let temp = TempDir::new().unwrap();
    let lines = vec![
        log_line("10.0.0.1", "/", 200, "10"),
        "lorem ipsum dolor".to_string(),
        log_line("10.0.0.2", "/", 200, "10"),
        "".to_string(),
        "GET / HTTP/1.1".to_string(),
        log_line("10.0.0.3", "/a", 200, "10"),
    ];
    let log = write_log(temp.path(), "access.log", &lines);

    let mut cmd = logtally_cmd(temp.path());
    cmd.arg(&log).arg("--show-failed").arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Parsed 5 lines: 3 successful (60.0%), 2 failed"))
        .stdout(predicate::str::contains("Failed lines:\n  lorem ipsum dolor\n  GET / HTTP/1.1\n"))
        .stdout(predicate::str::contains("File:").not());
}

#[test]
fn test_empty_file_reports_zero() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("empty.log");
    std::fs::write(&log, "").unwrap();

    let mut cmd = logtally_cmd(temp.path());
    cmd.arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Unique clients: 0"))
        .stdout(predicate::str::contains("Top paths:\n  (none)"))
        .stdout(predicate::str::contains("Parsed 0 lines: 0 successful (0.0%), 0 failed"));
}

#[test]
fn test_top_flag_limits_rankings() {
    let temp = TempDir::new().unwrap();
    let log = write_log(temp.path(), "access.log", &sample_log_lines());

    let mut cmd = logtally_cmd(temp.path());
    cmd.arg(&log).arg("-n").arg("1").arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  1. 168.41.191.40 - 4 requests"))
        .stdout(predicate::str::contains("  2. ").not());
}

#[test]
fn test_parallel_output_matches_sequential() {
    let temp = TempDir::new().unwrap();
    let log = write_log(temp.path(), "access.log", &sample_log_lines());

    let sequential = logtally_cmd(temp.path())
        .arg(&log)
        .arg("-q")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parallel = logtally_cmd(temp.path())
        .arg(&log)
        .arg("-q")
        .arg("--parallel")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_verbose_logs_config_loading() {
    let temp = TempDir::new().unwrap();
    let log = write_log(temp.path(), "access.log", &sample_log_lines());
    write_user_config(temp.path(), "top_n = 2\n");

    let mut cmd = logtally_cmd(temp.path());
    cmd.arg(&log).arg("--verbose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  3. ").not())
        .stderr(predicate::str::contains("Loading config file"))
        .stderr(predicate::str::contains("logtally"));
}

#[test]
fn test_config_loading_silent_without_verbose() {
    let temp = TempDir::new().unwrap();
    let log = write_log(temp.path(), "access.log", &sample_log_lines());
    write_user_config(temp.path(), "top_n = 2\n");

    let mut cmd = logtally_cmd(temp.path());
    cmd.arg(&log);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Loading config file").not());
}

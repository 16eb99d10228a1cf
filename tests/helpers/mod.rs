//! Shared fixtures for CLI and pipeline tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// `logtally` with its config lookup and log filter confined to `home`.
///
/// The user's own `~/.config/logtally/config.toml` must never leak into a test.
pub fn logtally_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("logtally");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("LOGTALLY_LOG");
    cmd
}

/// Where `logtally_cmd(home)` looks for its default config file
pub fn user_config_path(home: &Path) -> PathBuf {
    let config_dir = if cfg!(target_os = "macos") {
        home.join("Library").join("Application Support")
    } else {
        home.join(".config")
    };
    config_dir.join("logtally").join("config.toml")
}

/// Write a default-location config file under `home`
pub fn write_user_config(home: &Path, content: &str) -> PathBuf {
    let path = user_config_path(home);
    fs::create_dir_all(path.parent().expect("config path has a parent")).expect("create config dir");
    fs::write(&path, content).expect("write user config");
    path
}

/// Build one combined-log-format line
pub fn log_line(client: &str, path: &str, status: u16, size: &str) -> String {
    format!(
        r#"{} - - [10/Jul/2018:22:21:28 +0200] "GET {} HTTP/1.1" {} {} "-" "Mozilla/5.0 (X11; Linux x86_64)""#,
        client, path, status, size
    )
}

/// Write `lines` joined by newlines to `dir/name`
pub fn write_log(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).expect("write fixture log");
    path
}

/// Eighteen requests from eleven clients.
///
/// 168.41.191.40 four times, 177.71.128.21 and 50.112.00.11 three times each,
/// eight other clients once. `/docs/manage-websites/` is the busiest path.
pub fn sample_log_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for path in ["/docs/manage-websites/", "/intranet-analytics/", "/", "/faq/"] {
        lines.push(log_line("168.41.191.40", path, 200, "3574"));
    }
    for path in ["/docs/manage-websites/", "/temp-redirect", "/"] {
        lines.push(log_line("177.71.128.21", path, 200, "3574"));
    }
    for path in ["/docs/manage-websites/", "/asset.css", "/asset.js"] {
        lines.push(log_line("50.112.00.11", path, 200, "-"));
    }
    for client in [
        "168.41.191.34",
        "168.41.191.41",
        "168.41.191.9",
        "72.44.32.10",
        "72.44.32.11",
        "79.125.00.21",
        "50.112.00.28",
        "168.41.191.43",
    ] {
        lines.push(log_line(client, "/docs/manage-websites", 404, "1024"));
    }
    lines
}

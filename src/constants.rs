//! Global constants for logtally
//!
//! Centralized location for application-wide constants

/// Structural pattern for one combined-log-format line.
///
/// Anchored at the start only; anything after the user-agent field is ignored.
pub const COMBINED_LOG_PATTERN: &str = concat!(
    r"^(?P<client>\S+)\s+\S+\s+\S+\s+",
    r"\[(?P<timestamp>[^\]]+)\]\s+",
    r#""(?P<method>\S+)\s+(?P<path>\S+)\s+(?P<protocol>[^"\s]+)"\s+"#,
    r"(?P<status>\d{3})\s+(?P<size>\d+|-)\s+",
    r#""(?P<referrer>[^"]*)"\s+"(?P<user_agent>[^"]*)""#,
);

/// Response-size token meaning "no size recorded"
pub const SIZE_PLACEHOLDER: &str = "-";

/// Number of ranked paths/clients reported when not configured
pub const DEFAULT_TOP_N: usize = 3;

/// Environment variable holding the diagnostic log filter
pub const LOG_ENV_VAR: &str = "LOGTALLY_LOG";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "logtally";

/// Config file name looked up when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Exit code for invalid arguments and missing files
pub const EXIT_USER_ERROR: u8 = 1;

/// Exit code for any other failure
pub const EXIT_UNEXPECTED_ERROR: u8 = 2;

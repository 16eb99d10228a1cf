//! CLI argument parsing and validation module
//!
//! Handles command-line interface using clap, including:
//! - The single log file positional argument
//! - Ranking size and output format selection (text/JSON)
//! - Config file selection and layering over file settings
//! - Verbosity and quiet modes

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

use logtally::config::AnalyzerConfig;
use logtally::logging;

/// What the binary should do after argument parsing
#[derive(Debug)]
pub enum CliCommand {
    /// No log file given: print usage and exit successfully
    Usage(String),
    Analyze(RunConfig),
}

/// Everything needed to analyze one file
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub log_path: PathBuf,
    pub analyzer: AnalyzerConfig,
    pub quiet: bool,
}

fn build_command() -> Command {
    Command::new("logtally")
        .version(env!("LOGTALLY_VERSION"))
        .long_version(concat!(env!("LOGTALLY_VERSION"), " (", env!("GIT_HASH"), ")"))
        .about("Summarize web-server access logs")
        .long_about("Parses an access log in the combined log format and reports unique clients, the most requested paths and the most active clients.")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Access log file to analyze")
                // PathBuf's parser refuses "" before path validation can report it
                .value_parser(value_parser!(OsString))
                .num_args(1),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_name("N")
                .help("Number of top paths and clients to report")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-failed")
                .long("show-failed")
                .help("List lines that could not be parsed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Rank paths and clients concurrently")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG")
                .help("Configuration file (TOML)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress the file metadata block")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug diagnostics on stderr")
                .action(ArgAction::SetTrue),
        )
}

/// Parse command line arguments into a command.
///
/// Diagnostics are installed here, before the config file is read.
pub fn parse_args() -> Result<CliCommand> {
    let mut command = build_command();
    let matches = command.get_matches_mut();
    logging::init_logging(matches.get_flag("verbose"));
    resolve(&matches, &mut command)
}

fn resolve(matches: &ArgMatches, command: &mut Command) -> Result<CliCommand> {
    let Some(log_path) = matches.get_one::<OsString>("file").map(PathBuf::from) else {
        return Ok(CliCommand::Usage(command.render_help().to_string()));
    };

    let mut analyzer = AnalyzerConfig::resolve(matches.get_one::<PathBuf>("config").map(|p| p.as_path()))?;
    apply_overrides(&mut analyzer, matches);
    analyzer.validate()?;

    Ok(CliCommand::Analyze(RunConfig {
        log_path,
        analyzer,
        quiet: matches.get_flag("quiet"),
    }))
}

/// Flags only ever switch settings on; an absent flag keeps the file value.
fn apply_overrides(config: &mut AnalyzerConfig, matches: &ArgMatches) {
    if let Some(top_n) = matches.get_one::<usize>("top") {
        config.top_n = *top_n;
    }
    config.json |= matches.get_flag("json");
    config.show_failed |= matches.get_flag("show-failed");
    config.parallel |= matches.get_flag("parallel");
}

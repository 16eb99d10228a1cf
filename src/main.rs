#![forbid(unsafe_code)]

mod cli;

use anyhow::Result;
use std::process::ExitCode;

use logtally::constants::{EXIT_UNEXPECTED_ERROR, EXIT_USER_ERROR};
use logtally::{analyze_file, file_info, output};
use logtally::{AnalyzerError, CombinedLogParser, FrequencyAnalyzer};

use crate::cli::{CliCommand, RunConfig};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

fn try_main() -> Result<()> {
    match cli::parse_args()? {
        CliCommand::Usage(help) => {
            println!("{}", help);
            Ok(())
        }
        CliCommand::Analyze(run) => run_analysis(&run),
    }
}

fn run_analysis(run: &RunConfig) -> Result<()> {
    let parser = CombinedLogParser::new();
    let analyzer = FrequencyAnalyzer::with_parallel(run.analyzer.parallel);

    let result = analyze_file(&parser, &analyzer, &run.log_path, run.analyzer.top_n)?;

    if run.analyzer.json {
        println!("{}", output::format_json(&result)?);
        return Ok(());
    }

    if !run.quiet {
        println!("{}\n", file_info::describe_file(&run.log_path)?);
    }
    print!("{}", output::format_report(&result));

    if run.analyzer.show_failed {
        let failed = output::format_failed_lines(&result.parse_outcome);
        if !failed.is_empty() {
            print!("\n{}", failed);
        }
    }

    Ok(())
}

/// Map an error to its exit code, printing it to stderr.
///
/// Bad arguments and missing files get a one-line message; anything else
/// prints the full cause chain.
fn report_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<AnalyzerError>() {
        Some(analyzer_err) if analyzer_err.is_user_error() => {
            eprintln!("Error: {}", analyzer_err);
            ExitCode::from(EXIT_USER_ERROR)
        }
        _ => {
            eprintln!("Error: {:?}", err);
            ExitCode::from(EXIT_UNEXPECTED_ERROR)
        }
    }
}

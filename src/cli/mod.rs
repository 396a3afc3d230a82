use anyhow::Result;
use tracing::Level;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;
pub use run::RunResult;

mod args;
mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose);

    let result = run::run(&args)?;
    report::print(&result, args.format, args.verbose)?;

    Ok(exit_status_from_result(&result, args.strict))
}

/// Diagnostics go to stderr so stdout only ever carries the report.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn exit_status_from_result(result: &RunResult, strict: bool) -> ExitStatus {
    if strict && result.missing_count() > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}

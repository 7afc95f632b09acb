use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::error::SyncError;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Route `tracing` events to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose);

    let report = match run::run(&args) {
        Ok(report) => report,
        Err(err) => match err.downcast_ref::<SyncError>() {
            Some(sync_err) if sync_err.is_reference_load() => {
                report::print_reference_error(sync_err);
                return Ok(ExitStatus::Failure);
            }
            _ => return Err(err),
        },
    };

    report::print(&report);
    Ok(ExitStatus::from_report(&report))
}

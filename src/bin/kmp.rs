//! Interactive front-end: choose a mode, enter a pattern and a text.
//!
//! Pass `--trace` to log every construction and scan step to stderr.
//! `RUST_LOG` overrides the log filter.

use std::io;
use std::process::ExitCode;

use kmp_engine::{interact, KmpError, SessionOptions};
use tracing_subscriber::EnvFilter;

fn init_logging(trace: bool) {
    let default_filter = if trace {
        "kmp_engine=trace"
    } else {
        "kmp_engine=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let trace = std::env::args().skip(1).any(|arg| arg == "--trace");
    init_logging(trace);

    let options = SessionOptions::new().with_trace(trace);
    let stdin = io::stdin();
    let stdout = io::stdout();

    match interact(&mut stdin.lock(), &mut stdout.lock(), &options) {
        Ok(outcome) => {
            tracing::debug!(%outcome, "request answered");
            ExitCode::SUCCESS
        }
        // already reported on stdout
        Err(KmpError::InvalidMode(mode)) => {
            tracing::warn!(%mode, "invalid mode");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "request failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

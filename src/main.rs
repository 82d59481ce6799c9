use clap::Parser;
use tracing_subscriber::EnvFilter;
use xs_extend::parser::Args;

use std::process::ExitCode;

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let (files, params) = Args::parse().into_params();

    match xs_extend::run_pipeline(&files, &params) {
        Ok(report) if report.failures.is_empty() => ExitCode::SUCCESS,
        // the output is written, but some cross-sections are missing from it
        Ok(_) => ExitCode::from(2),
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

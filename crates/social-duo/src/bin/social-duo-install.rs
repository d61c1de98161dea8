use clap::Parser;
use social_duo::cli::InstallArgs;
use social_duo::{launch, logging, report};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let args = InstallArgs::parse();

    match launch::install(&args) {
        Ok(done) => {
            tracing::info!(
                source = %done.source,
                interpreter = %done.interpreter,
                created_venv = done.created_venv,
                "ready"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            report::fatal(&err);
            ExitCode::FAILURE
        }
    }
}

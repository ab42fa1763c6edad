//! `xa-compile` entrypoint: compile one source file to pretty-printed JSON.
//!
//! Thin wrapper over `xa_compile::cli`: parse args, run, and map a failure to
//! a non-zero exit status. For programmatic use, prefer `xa_compile::api`.

use std::process::ExitCode;

use clap::Parser;
use xa_compile::cli;

fn main() -> ExitCode {
    let args = cli::CompileArgs::parse();
    match cli::run_single(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

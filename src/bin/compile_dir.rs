//! `xa-compile-dir` entrypoint: compile every `.rule` and `.table` file in a
//! directory to sibling `.json` files.

use std::process::ExitCode;

use clap::Parser;
use xa_compile::cli;

fn main() -> ExitCode {
    let args = cli::CompileDirArgs::parse();
    match cli::run_directory(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

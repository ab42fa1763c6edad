//! Command Line Interface (CLI) layer shared by the `xa-compile` and
//! `xa-compile-dir` binaries.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! compilation. Embedders should use the `xa_compile::api` module instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{CompileArgs, CompileDirArgs};
pub use errors::AppError;
pub use runner::{run_directory, run_single};

//! High-level library API: compile one source to a file, or every rule and
//! table source in a directory to sibling JSON files. Prefer these entrypoints
//! over the `core` and `io` building blocks when embedding xa-compile.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::compile::{CompileJob, compile_job};
use crate::error::Result;
use crate::io::list_sources;
use crate::parser::RuleParser;
use crate::types::{ParseOperation, SourceKind};

/// Batch compilation report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub compiled: usize,
    pub errors: usize,
}

/// Compile a single source file to `output` using `operation`.
pub fn compile_file_to_path<P: RuleParser + ?Sized>(
    parser: &P,
    input: &Path,
    output: &Path,
    operation: ParseOperation,
) -> Result<()> {
    let job = CompileJob::new(input, output, operation);
    compile_job(parser, &job)?;
    info!("Compiled {:?} -> {:?}", input, output);
    Ok(())
}

/// Sources of `kind` directly inside `input_dir`, sorted by file name.
pub fn iterate_sources(input_dir: &Path, kind: SourceKind) -> Result<std::vec::IntoIter<PathBuf>> {
    Ok(list_sources(input_dir, kind)?.into_iter())
}

/// Plan the batch for `input_dir`: all `.rule` jobs, then all `.table` jobs.
pub fn plan_directory(input_dir: &Path, suffix: &str) -> Result<Vec<CompileJob>> {
    let mut jobs = Vec::new();
    for kind in SourceKind::ALL {
        jobs.extend(
            iterate_sources(input_dir, kind)?.map(|path| CompileJob::sibling(path, kind, suffix)),
        );
    }
    Ok(jobs)
}

/// Compile every `.rule` and then every `.table` file in `input_dir` into a
/// sibling file named with `suffix` appended.
///
/// `progress` is called with each job before it runs. If `continue_on_error`
/// is false the first failure is returned and later files are never touched;
/// otherwise failures are logged, counted in the report, and the batch goes on.
pub fn compile_directory<P, F>(
    parser: &P,
    input_dir: &Path,
    suffix: &str,
    continue_on_error: bool,
    mut progress: F,
) -> Result<BatchReport>
where
    P: RuleParser + ?Sized,
    F: FnMut(&CompileJob),
{
    info!("Starting batch compilation in directory: {:?}", input_dir);

    let mut report = BatchReport::default();

    for kind in SourceKind::ALL {
        for path in iterate_sources(input_dir, kind)? {
            let job = CompileJob::sibling(path, kind, suffix);
            progress(&job);

            match compile_job(parser, &job) {
                Ok(()) => report.compiled += 1,
                Err(e) => {
                    report.errors += 1;
                    if !continue_on_error {
                        return Err(e);
                    }
                    warn!("Error compiling {:?}: {}", job.input, e);
                }
            }
        }
    }

    info!(
        "Batch compilation complete: compiled={} errors={}",
        report.compiled, report.errors
    );
    Ok(report)
}

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::api::{compile_directory, compile_file_to_path, plan_directory};
use crate::core::compile::CompileJob;
use crate::core::params::CompileParams;
use crate::error::Error;
use crate::parser::CommandParser;
use crate::types::ParseOperation;

use super::args::{CommonArgs, CompileArgs, CompileDirArgs};
use super::errors::AppError;

fn init_logging(enabled: bool) {
    if enabled {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        // Logs go to stderr; stdout carries the progress lines.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Config file values first, then command-line overrides.
fn resolve_params(common: &CommonArgs, suffix: Option<&str>) -> Result<CompileParams, AppError> {
    let mut params = match &common.config {
        Some(path) => CompileParams::load(path)?,
        None => CompileParams::default(),
    };

    if let Some(program) = &common.parser {
        if program.trim().is_empty() {
            return Err(AppError::InvalidArgument {
                arg: "--parser",
                value: program.clone(),
            });
        }
        params.parser.program = program.clone();
    }
    if !common.parser_args.is_empty() {
        params.parser.args = common.parser_args.clone();
    }
    if let Some(suffix) = suffix {
        if suffix.is_empty() || suffix.contains(std::path::is_separator) {
            return Err(AppError::InvalidArgument {
                arg: "--suffix",
                value: suffix.to_string(),
            });
        }
        params.suffix = suffix.to_string();
    }

    debug!("Resolved parameters: {:?}", params);
    Ok(params)
}

fn announce(job: &CompileJob) {
    println!("> compiling {} to {}", job.input.display(), job.output.display());
}

pub fn run_single(args: CompileArgs) -> Result<(), AppError> {
    init_logging(args.common.log);
    let params = resolve_params(&args.common, None)?;

    let operation = args
        .kind
        .map(|kind| kind.operation())
        .unwrap_or(ParseOperation::Parse);
    let parser = CommandParser::new(params.parser);

    announce(&CompileJob::new(&args.input, &args.output, operation));
    compile_file_to_path(&parser, &args.input, &args.output, operation)?;
    Ok(())
}

pub fn run_directory(args: CompileDirArgs) -> Result<(), AppError> {
    init_logging(args.common.log);
    let params = resolve_params(&args.common, args.suffix.as_deref())?;

    if !args.directory.is_dir() {
        return Err(AppError::NotADirectory {
            path: args.directory,
        });
    }

    if args.dry_run {
        for job in plan_directory(&args.directory, &params.suffix)? {
            println!(
                "> would compile {} to {} ({})",
                job.input.display(),
                job.output.display(),
                job.operation
            );
        }
        return Ok(());
    }

    let parser = CommandParser::new(params.parser);
    let report = compile_directory(
        &parser,
        &args.directory,
        &params.suffix,
        args.keep_going,
        announce,
    )?;

    info!("Compiled: {}", report.compiled);
    info!("Errors: {}", report.errors);

    if report.errors > 0 {
        return Err(Error::BatchFailed {
            errors: report.errors,
        }
        .into());
    }
    Ok(())
}

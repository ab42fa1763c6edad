use clap::{Args, Parser};
use std::path::PathBuf;

use crate::types::SourceKind;

/// Options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// JSON config file with `parser` and `suffix` settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// External parser program (default: xa-rules-parse)
    #[arg(long)]
    pub parser: Option<String>,

    /// Argument passed to the parser program before the operation name (repeatable)
    #[arg(long = "parser-arg", allow_hyphen_values = true)]
    pub parser_args: Vec<String>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[derive(Parser, Debug)]
#[command(name = "xa-compile", version, about = "Compile one rule or table source to JSON")]
pub struct CompileArgs {
    /// Source file to compile
    pub input: PathBuf,

    /// Destination for the pretty-printed JSON (overwritten if present)
    pub output: PathBuf,

    /// Use the rule- or table-specific parse operation instead of the generic one
    #[arg(long, value_enum)]
    pub kind: Option<SourceKind>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "xa-compile-dir",
    version,
    about = "Compile every .rule and .table file in a directory to sibling JSON files"
)]
pub struct CompileDirArgs {
    /// Directory containing .rule and .table files (not searched recursively)
    pub directory: PathBuf,

    /// Suffix appended to each source file name to form its output name
    #[arg(long)]
    pub suffix: Option<String>,

    /// Continue with the remaining files when one fails
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Print the planned jobs without compiling anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

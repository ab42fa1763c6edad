//! The read-parse-serialize-write pipeline for one source file.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::{read_source, write_output};
use crate::parser::RuleParser;
use crate::types::{ParseOperation, SourceKind};

/// One unit of work: compile `input` with `operation` into `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub operation: ParseOperation,
}

impl CompileJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, operation: ParseOperation) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            operation,
        }
    }

    /// Job for a batch source: the output sits next to the input, named with `suffix` appended.
    pub fn sibling(input: PathBuf, kind: SourceKind, suffix: &str) -> Self {
        let output = output_path_for(&input, suffix);
        Self {
            input,
            output,
            operation: kind.operation(),
        }
    }
}

/// `foo.rule` + `.json` -> `foo.rule.json`; the original extension is kept.
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Pretty-print a parsed structure. Deterministic for equal values.
pub fn render(structure: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(structure)
}

pub fn compile_job<P: RuleParser + ?Sized>(parser: &P, job: &CompileJob) -> Result<()> {
    let text = read_source(&job.input)?;
    debug!("Read {} bytes from {:?}", text.len(), job.input);

    let structure = parser.run(job.operation, &text).map_err(|source| Error::Parse {
        path: job.input.clone(),
        source,
    })?;

    let rendered = render(&structure).map_err(|source| Error::Serialize {
        path: job.output.clone(),
        source,
    })?;

    write_output(&job.output, &rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn output_name_appends_suffix() {
        assert_eq!(
            output_path_for(Path::new("rules/foo.rule"), ".json"),
            PathBuf::from("rules/foo.rule.json")
        );
        assert_eq!(
            output_path_for(Path::new("bar.table"), ".compiled.json"),
            PathBuf::from("bar.table.compiled.json")
        );
    }

    #[test]
    fn sibling_job_uses_kind_operation() {
        let job = CompileJob::sibling(PathBuf::from("d/x.table"), SourceKind::Table, ".json");
        assert_eq!(job.output, PathBuf::from("d/x.table.json"));
        assert_eq!(job.operation, ParseOperation::ParseTable);
    }

    #[test]
    fn render_is_indented() {
        let rendered = render(&json!({ "a": [1, 2] })).unwrap();
        assert_eq!(rendered, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::ParserCommand;

pub const DEFAULT_OUTPUT_SUFFIX: &str = ".json";

/// Compilation parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileParams {
    pub parser: ParserCommand,
    /// Appended to an input file name to form its output name in batch mode
    pub suffix: String,
}

impl Default for CompileParams {
    fn default() -> Self {
        Self {
            parser: ParserCommand::default(),
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl CompileParams {
    /// Load parameters from a JSON file; missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let params: CompileParams = serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        params.validate(path)?;
        Ok(params)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.parser.program.trim().is_empty() {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: "parser.program must not be empty".to_string(),
            });
        }
        if self.suffix.is_empty() || self.suffix.contains(std::path::is_separator) {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: format!("invalid output suffix {:?}", self.suffix),
            });
        }
        Ok(())
    }
}

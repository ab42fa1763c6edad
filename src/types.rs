//! Shared types used across xa-compile.
//! Includes `SourceKind` (rule vs. table sources) and `ParseOperation`
//! (which operation of the parsing capability a job invokes).
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of a domain source file, determined by its extension.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Rule,
    Table,
}

impl SourceKind {
    /// Batch passes run in this order.
    pub const ALL: [SourceKind; 2] = [SourceKind::Rule, SourceKind::Table];

    pub fn extension(self) -> &'static str {
        match self {
            SourceKind::Rule => "rule",
            SourceKind::Table => "table",
        }
    }

    /// Detect the kind from a path's extension (case-sensitive, like the batch discovery).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "rule" => Some(SourceKind::Rule),
            "table" => Some(SourceKind::Table),
            _ => None,
        }
    }

    pub fn operation(self) -> ParseOperation {
        match self {
            SourceKind::Rule => ParseOperation::ParseRule,
            SourceKind::Table => ParseOperation::ParseTable,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// The operations a parsing capability exposes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseOperation {
    Parse,
    ParseRule,
    ParseTable,
}

impl ParseOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseOperation::Parse => "parse",
            ParseOperation::ParseRule => "parse_rule",
            ParseOperation::ParseTable => "parse_table",
        }
    }
}

impl std::fmt::Display for ParseOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

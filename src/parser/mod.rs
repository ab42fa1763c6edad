//! The parsing capability consumed by the compilers.
//!
//! The rule/table grammar lives outside this crate. Anything that can turn
//! source text into a JSON-serializable structure implements [`RuleParser`];
//! the binaries use [`CommandParser`], which delegates to an external program.
pub mod command;

pub use command::{CommandParser, ParserCommand};

use serde_json::Value;
use thiserror::Error;

use crate::types::ParseOperation;

/// Errors raised by a parsing capability.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{operation} rejected the source: {message}")]
    Rejected {
        operation: ParseOperation,
        message: String,
    },

    #[error("failed to start parser program {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while talking to the parser: {0}")]
    Io(#[from] std::io::Error),

    #[error("{operation} produced output that is not JSON: {source}")]
    InvalidOutput {
        operation: ParseOperation,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    pub fn rejected(operation: ParseOperation, message: impl Into<String>) -> Self {
        ParseError::Rejected {
            operation,
            message: message.into(),
        }
    }
}

/// A source-to-structure parser.
///
/// `parse_rule` and `parse_table` default to the generic `parse`, so a parser
/// that does not distinguish the two kinds only needs one method.
pub trait RuleParser {
    fn parse(&self, text: &str) -> Result<Value, ParseError>;

    fn parse_rule(&self, text: &str) -> Result<Value, ParseError> {
        self.parse(text)
    }

    fn parse_table(&self, text: &str) -> Result<Value, ParseError> {
        self.parse(text)
    }

    /// Dispatch to the method matching `operation`.
    fn run(&self, operation: ParseOperation, text: &str) -> Result<Value, ParseError> {
        match operation {
            ParseOperation::Parse => self.parse(text),
            ParseOperation::ParseRule => self.parse_rule(text),
            ParseOperation::ParseTable => self.parse_table(text),
        }
    }
}

impl<P: RuleParser + ?Sized> RuleParser for Box<P> {
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        (**self).parse(text)
    }

    fn parse_rule(&self, text: &str) -> Result<Value, ParseError> {
        (**self).parse_rule(text)
    }

    fn parse_table(&self, text: &str) -> Result<Value, ParseError> {
        (**self).parse_table(text)
    }
}

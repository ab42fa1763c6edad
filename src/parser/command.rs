//! Parser backed by an external program.
//!
//! The program is invoked as `<program> [args...] <operation>` with the source
//! text on stdin, and must print one JSON document on stdout. A non-zero exit
//! status is a rejection; its stderr becomes the error message.
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{ParseError, RuleParser};
use crate::types::ParseOperation;

pub const DEFAULT_PARSER_PROGRAM: &str = "xa-rules-parse";

/// How to launch the external parser; suitable for config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserCommand {
    pub program: String,
    /// Arguments placed before the operation name
    pub args: Vec<String>,
}

impl Default for ParserCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PARSER_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandParser {
    command: ParserCommand,
}

impl CommandParser {
    pub fn new(command: ParserCommand) -> Self {
        Self { command }
    }

    fn invoke(&self, operation: ParseOperation, text: &str) -> Result<Value, ParseError> {
        debug!(
            "Running parser: {} {:?} {}",
            self.command.program, self.command.args, operation
        );

        let mut child = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(operation.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ParseError::Spawn {
                program: self.command.program.clone(),
                source,
            })?;

        // Feed stdin from its own thread while stdout and stderr are drained
        // here; a parser may write before it has read all of its input.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = text.as_bytes().to_vec();
            std::thread::spawn(move || stdin.write_all(&input))
        });

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Ok(())) => {}
                // A parser may exit before draining its input; its status decides the outcome.
                Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => {
                    return Err(ParseError::Io(std::io::Error::other(
                        "parser stdin writer panicked",
                    )));
                }
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("parser exited with {}", output.status)
            } else {
                stderr
            };
            return Err(ParseError::rejected(operation, message));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|source| ParseError::InvalidOutput { operation, source })
    }
}

impl RuleParser for CommandParser {
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        self.invoke(ParseOperation::Parse, text)
    }

    fn parse_rule(&self, text: &str) -> Result<Value, ParseError> {
        self.invoke(ParseOperation::ParseRule, text)
    }

    fn parse_table(&self, text: &str) -> Result<Value, ParseError> {
        self.invoke(ParseOperation::ParseTable, text)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use serde_json::json;

    fn sh(script: &str) -> CommandParser {
        CommandParser::new(ParserCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "parser".to_string()],
        })
    }

    #[test]
    fn passes_operation_and_reads_json() {
        // $1 is the operation, stdin the source text
        let parser = sh(r#"body=$(cat); printf '{"op":"%s","body":"%s"}' "$1" "$body""#);
        assert_eq!(
            parser.parse_table("abc").unwrap(),
            json!({ "op": "parse_table", "body": "abc" })
        );
        assert_eq!(parser.parse("x").unwrap()["op"], "parse");
    }

    #[test]
    fn non_zero_exit_is_a_rejection_with_stderr() {
        let parser = sh("cat >/dev/null; echo 'line 3: unexpected token' >&2; exit 2");
        match parser.parse_rule("bad").unwrap_err() {
            ParseError::Rejected { operation, message } => {
                assert_eq!(operation, ParseOperation::ParseRule);
                assert_eq!(message, "line 3: unexpected token");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_json_output_is_rejected() {
        let parser = sh("cat >/dev/null; echo not-json");
        assert!(matches!(
            parser.parse("x").unwrap_err(),
            ParseError::InvalidOutput { .. }
        ));
    }

    #[test]
    fn large_input_through_pass_through_parser() {
        let parser = sh("cat");
        let body = "a".repeat(1_000_000);
        let source = format!("\"{body}\"");
        assert_eq!(parser.parse(&source).unwrap(), Value::String(body));
    }

    #[test]
    fn parser_writing_stderr_before_reading_input() {
        // 256 KiB of diagnostics fills the stderr pipe before stdin is touched.
        let parser = sh("head -c 262144 /dev/zero >&2; cat");
        let source = format!("[{}1]", "0,".repeat(100_000));
        let value = parser.parse_rule(&source).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(100_001));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let parser = CommandParser::new(ParserCommand {
            program: "/nonexistent/xa-rules-parse".to_string(),
            args: Vec::new(),
        });
        assert!(matches!(
            parser.parse("x").unwrap_err(),
            ParseError::Spawn { .. }
        ));
    }
}

#![doc = r#"
xa-compile — compile Xalgorithms rule and table sources into JSON documents.

The crate orchestrates compilation: it reads `.rule` and `.table` sources, hands
their text to a parsing capability, and writes the resulting structure as
pretty-printed JSON. The grammar itself lives outside this crate; any parser
implementing [`RuleParser`] can be plugged in. The bundled binaries use
[`CommandParser`], which runs an external parser program.

Compile a single file
---------------------
```rust,no_run
use std::path::Path;
use xa_compile::{CommandParser, ParseOperation, ParserCommand, compile_file_to_path};

fn main() -> xa_compile::Result<()> {
    let parser = CommandParser::new(ParserCommand::default());
    compile_file_to_path(
        &parser,
        Path::new("rules/discount.rule"),
        Path::new("out/discount.json"),
        ParseOperation::Parse,
    )
}
```

Compile a directory
-------------------
Every `.rule` file is compiled with `parse_rule`, then every `.table` file with
`parse_table`. Outputs are written next to their sources with the suffix
appended (`discount.rule` -> `discount.rule.json`).

```rust,no_run
use std::path::Path;
use xa_compile::{CommandParser, ParserCommand, compile_directory};

fn main() -> xa_compile::Result<()> {
    let parser = CommandParser::new(ParserCommand::default());
    let report = compile_directory(&parser, Path::new("rules"), ".json", false, |job| {
        println!("> compiling {}", job.input.display());
    })?;
    println!("compiled={} errors={}", report.compiled, report.errors);
    Ok(())
}
```

Plugging in a parser
--------------------
```rust
use serde_json::{Value, json};
use xa_compile::{ParseError, RuleParser};

struct Fixed;

impl RuleParser for Fixed {
    fn parse(&self, _text: &str) -> Result<Value, ParseError> {
        Ok(json!({ "whens": {}, "items": [] }))
    }
}
```

Error handling
--------------
All public functions return `xa_compile::Result<T>`. `Error::kind()` tells read,
parse, serialize and write failures apart; each variant carries the path involved.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`parser`] — the `RuleParser` capability and the external-program parser.
- [`types`] — `SourceKind` and `ParseOperation`.
- [`io`] — source listing, reading, and atomic output writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod parser;
pub mod types;

// Curated public API surface
pub use crate::core::compile::{CompileJob, output_path_for, render};
pub use crate::core::params::{CompileParams, DEFAULT_OUTPUT_SUFFIX};
pub use error::{Error, ErrorKind, Result};
pub use parser::{CommandParser, ParseError, ParserCommand, RuleParser};
pub use types::{ParseOperation, SourceKind};

pub use api::{BatchReport, compile_directory, compile_file_to_path, iterate_sources, plan_directory};

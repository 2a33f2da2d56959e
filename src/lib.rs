#![doc = r#"
ROMANCALC — a Roman numeral expression report generator.

This crate reads text files of simple arithmetic expressions whose operands
are Roman numerals (`XIV + IX`, one per line), evaluates each line, renders
the result as capitalized English words, and writes a formatted report.
It powers the ROMANCALC CLI and can be embedded in your own Rust
applications.

Stability
---------
The public library API is experimental in initial releases. It is built on
top of a working MVP used by the CLI and is robust, but may evolve as the
crate stabilizes. Breaking changes can occur.

Add dependency
--------------
```toml
[dependencies]
romancalc = "0.1"
```

Quick start: process a file to a report
---------------------------------------
```rust,no_run
use std::path::Path;
use romancalc::{process_file_to_path, ReportOptions};

fn main() -> romancalc::Result<()> {
    let summary = process_file_to_path(
        Path::new("input.txt"),
        Path::new("output.txt"),
        &ReportOptions::default(),
    )?;
    println!("entries={} skipped={} malformed={}",
        summary.entries, summary.skipped, summary.malformed);
    Ok(())
}
```

Process in-memory text
----------------------
```rust
use romancalc::{process_text, ReportOptions};

let report = process_text("II + III\nX - IV\n", &ReportOptions::default());
assert_eq!(report.entries[0].value, 5);
assert_eq!(report.entries[0].words, "Five");
```

Conversion helpers
------------------
```rust
use romancalc::{integer_to_words, roman_to_integer};

assert_eq!(roman_to_integer("MMXXIV"), 2024);
assert_eq!(integer_to_words(1234), "One Thousand Two Hundred Thirty Four");
```

Error handling
--------------
All fallible public functions return `romancalc::Result<T>`; match on
`romancalc::Error` to handle specific cases, e.g. a missing input file.

```rust,no_run
use std::path::Path;
use romancalc::{process_file_to_path, Error, ReportOptions};

fn main() {
    let options = ReportOptions::default();
    match process_file_to_path(Path::new("missing.txt"), Path::new("out.txt"), &options) {
        Ok(_) => {}
        Err(Error::OpenInput { path, .. }) => eprintln!("no such input: {path:?}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Malformed input
---------------
Evaluation is permissive by design of the original tool: unknown numeral
characters feed a sentinel value into the conversion, unsupported operators
yield 0, and missing tokens become empty operands. Lines that fail this
crate's well-formedness check are still evaluated and written, but are
counted in the summary and warned about under the default
`MalformedPolicy::Warn`.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `Operator`, `ReportEntry`).
- [`core`] — conversion and evaluation primitives.
- [`io`] — expression reader and report/sidecar writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ReportOptions;
pub use error::{Error, Result};
pub use types::{MalformedPolicy, Operator, ReportEntry};

// Conversion and evaluation primitives
pub use core::eval::{Expression, evaluate_line};
pub use core::roman::{is_classic_numeral, roman_to_integer, symbol_value};
pub use core::words::integer_to_words;

// Readers and writers
pub use io::reader::ExpressionReader;
pub use io::writers::report::ReportWriter;
pub use io::writers::sidecar::write_summary_sidecar;

// High-level API re-exports
pub use api::{Report, ReportSummary, entry_for_line, process_file_to_path, process_text};

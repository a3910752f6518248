//! Span export to a local OTLP JSON file.
//!
//! ```text
//! tracing → tracing-opentelemetry → SDK tracer → FileSpanExporter → RotatingFile
//! ```
//!
//! Each exported batch is one line of
//! `~/.local/share/zellij/shopping-list/shopping-list-otlp.json`. The file
//! rotates at 5 MiB and keeps three timestamped backups. The verbosity comes
//! from the `trace_level` plugin option, an [`tracing_subscriber::EnvFilter`]
//! directive that defaults to `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, TRACE_FILE_NAME};

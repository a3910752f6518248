//! Tracer provider whose exporter appends OTLP JSON lines to a local file.
//!
//! Plugins run sandboxed without network access, so spans go to disk instead
//! of a collector.

use super::file_writer::RotatingFile;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::future;
use std::path::PathBuf;

/// Writes each exported batch as one line of the trace file.
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    formatter: SpanFormatter,
    stopped: bool,
}

impl FileSpanExporter {
    const fn new(file: RotatingFile, resource: Resource) -> Self {
        Self {
            file,
            formatter: SpanFormatter::new(resource),
            stopped: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("trace file exporter stopped"));
        }
        let line = self.formatter.format_batch(batch).to_string();
        self.file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.formatter = SpanFormatter::new(resource.clone());
    }
}

/// Builds a provider exporting every finished span synchronously to
/// `trace_file`.
pub fn file_tracer_provider(trace_file: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(RotatingFile::new(trace_file), resource.clone());

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

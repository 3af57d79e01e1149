//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides the tracing infrastructure for the plugin. Spans
//! emitted through the `tracing` macros are exported in OTLP JSON format to a
//! rotating file under the plugin data directory, where they can be inspected
//! offline (the WASM sandbox has no collector to ship them to).
//!
//! # Pipeline
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → JSON file
//! ```
//!
//! # Configuration
//!
//! The span filter level comes from the `trace_level` plugin configuration
//! option, defaulting to `info`. Traces land in
//! `~/.local/share/zellij/zentiment/zentiment-otlp.json`, rotated by size with
//! a small number of retained backups.
//!
//! Initialization is optional and fail-quiet: if the data directory cannot be
//! created, the plugin simply runs untraced.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: File-backed OpenTelemetry span exporter and provider
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

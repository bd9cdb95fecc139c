//! Rendering of quantizer results for stdout.

use bvhq_core::quantization::{CodeInterval, QuantizedBounds};
use clap::ValueEnum;
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One decimal field per line.
    #[default]
    Text,
    /// A single JSON object with named fields.
    Json,
}

/// A five-field record the CLI can print.
pub trait Record: Serialize {
    fn fields(&self) -> [u8; 5];
}

impl Record for QuantizedBounds {
    fn fields(&self) -> [u8; 5] {
        QuantizedBounds::fields(self)
    }
}

impl Record for CodeInterval {
    fn fields(&self) -> [u8; 5] {
        CodeInterval::fields(self)
    }
}

/// Render `record` without a trailing newline.
pub fn render<R: Record>(record: &R, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(record
            .fields()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string(record),
    }
}

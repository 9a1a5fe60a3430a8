use std::{
    fmt,
    io::{self, Stdout, Write},
    sync::Mutex,
};

use serde_json::Value;
use tracing::warn;

use super::DiagnosticSink;

/// Writes one plain line per diagnostic, e.g. `Received data: {"x":1}`.
pub struct ConsoleSink<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, line: fmt::Arguments<'_>) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Err(err) = out.write_fmt(format_args!("{line}\n")).and_then(|_| out.flush()) {
            warn!(msg = "Failed to write diagnostic line", error = %err);
        }
    }
}

impl<W: Write + Send> DiagnosticSink for ConsoleSink<W> {
    fn marker(&self, text: &str) {
        self.write_line(format_args!("{text}"));
    }

    fn payload(&self, label: &str, payload: &Value) {
        self.write_line(format_args!("{label} {payload}"));
    }
}

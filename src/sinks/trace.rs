use serde_json::Value;
use tracing::info;

use super::DiagnosticSink;

/// Sends diagnostics through the process-wide tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceSink;

impl DiagnosticSink for TraceSink {
    fn marker(&self, text: &str) {
        info!(msg = text);
    }

    fn payload(&self, label: &str, payload: &Value) {
        info!(msg = label, %payload);
    }
}

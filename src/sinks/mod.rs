use std::sync::Arc;

use mockall::automock;
use serde::Deserialize;
use serde_json::Value;

pub mod console;
pub mod trace;

pub use console::ConsoleSink;
pub use trace::TraceSink;

/// Destination for human-readable request diagnostics, kept apart from the
/// HTTP response.
#[automock]
pub trait DiagnosticSink: Send + Sync {
    /// Write a bare marker line
    fn marker(&self, text: &str);

    /// Write a request payload under a fixed label
    fn payload(&self, label: &str, payload: &Value);
}

pub type DiagnosticSinkRef = Arc<dyn DiagnosticSink + Send + Sync>;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Console,
    Trace,
}

use std::sync::Arc;

use axum::{Extension, middleware::AddExtension};
use tower::Layer;

use crate::sinks::{ConsoleSink, DiagnosticSinkRef, SinkKind, TraceSink};

#[derive(Clone)]
pub struct DiagnosticSinkLayer(pub DiagnosticSinkRef);

impl DiagnosticSinkLayer {
    pub fn console() -> Self {
        Self(Arc::new(ConsoleSink::stdout()))
    }

    pub fn trace() -> Self {
        Self(Arc::new(TraceSink))
    }

    pub fn from_kind(kind: SinkKind) -> Self {
        match kind {
            SinkKind::Console => Self::console(),
            SinkKind::Trace => Self::trace(),
        }
    }
}

impl<S> Layer<S> for DiagnosticSinkLayer {
    type Service = AddExtension<S, DiagnosticSinkRef>;

    fn layer(&self, inner: S) -> Self::Service {
        Extension(self.0.clone()).layer(inner)
    }
}

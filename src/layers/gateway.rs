use std::sync::Arc;

use axum::{Extension, middleware::AddExtension};
use tower::Layer;

use crate::{
    config::KopokopoSettings,
    kopokopo::{GatewayError, KopokopoClient, PaymentGatewayRef},
};

#[derive(Clone)]
pub struct PaymentGatewayLayer(pub PaymentGatewayRef);

impl PaymentGatewayLayer {
    pub fn kopokopo(settings: KopokopoSettings) -> Result<Self, GatewayError> {
        Ok(Self(Arc::new(KopokopoClient::new(settings)?)))
    }
}

impl<S> Layer<S> for PaymentGatewayLayer {
    type Service = AddExtension<S, PaymentGatewayRef>;

    fn layer(&self, inner: S) -> Self::Service {
        Extension(self.0.clone()).layer(inner)
    }
}

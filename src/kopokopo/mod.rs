use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use thiserror::Error;

pub mod client;
pub mod phone;

pub use client::KopokopoClient;
pub use phone::normalize_phone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StkPushRequest {
    /// MSISDN in international form, e.g. `254712345678`
    pub phone_number: String,
    /// Amount in KES, passed through as entered
    pub amount: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to Kopokopo failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Kopokopo returned a response that is not JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Kopokopo token response carried no access token")]
    MissingToken,
}

#[async_trait]
#[automock]
pub trait PaymentGateway: Send + Sync {
    /// Fetch an OAuth access token with the client credentials grant
    async fn access_token(&self) -> Result<String, GatewayError>;

    /// Ask the gateway to send an M-PESA STK prompt, returning its raw reply
    async fn initiate_stk_push(
        &self,
        token: &str,
        request: &StkPushRequest,
    ) -> Result<Value, GatewayError>;
}

pub type PaymentGatewayRef = std::sync::Arc<dyn PaymentGateway + Send + Sync>;

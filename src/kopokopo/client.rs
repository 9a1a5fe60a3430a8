use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::{GatewayError, PaymentGateway, StkPushRequest};
use crate::config::KopokopoSettings;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const JSON: &str = "application/json";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Kopokopo API client: OAuth token + incoming payment (STK push) requests.
#[derive(Debug, Clone)]
pub struct KopokopoClient {
    client: reqwest::Client,
    settings: KopokopoSettings,
}

impl KopokopoClient {
    pub fn new(settings: KopokopoSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { client, settings })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl PaymentGateway for KopokopoClient {
    async fn access_token(&self) -> Result<String, GatewayError> {
        let response: TokenResponse = self
            .client
            .post(self.url("/oauth/token"))
            .header(ACCEPT, JSON)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.settings.client_id.as_str()),
                ("client_secret", self.settings.client_secret.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(GatewayError::MissingToken)
    }

    async fn initiate_stk_push(
        &self,
        token: &str,
        request: &StkPushRequest,
    ) -> Result<Value, GatewayError> {
        let body = json!({
            "payment_channel": "M-PESA STK Push",
            "till_number": self.settings.till_number,
            "subscriber": {
                "phone_number": request.phone_number,
            },
            "amount": {
                "currency": "KES",
                "value": request.amount,
            },
            "_links": {
                "callback_url": self.settings.callback_url,
            },
        });

        let response = self
            .client
            .post(self.url("/api/v1/incoming_payments"))
            .bearer_auth(token)
            .header(ACCEPT, JSON)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        info!(
            msg = "Kopokopo incoming payment response",
            status = %status.as_u16(),
            len = bytes.len()
        );

        if bytes.trim_ascii().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

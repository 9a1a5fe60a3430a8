use axum::{Extension, Form, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::{
    kopokopo::{PaymentGatewayRef, StkPushRequest, normalize_phone},
    models::StkPushResponse,
    sinks::DiagnosticSinkRef,
};

pub const STK_PUSH_LABEL: &str = "STK push triggered:";
pub const SENT_MESSAGE: &str = "STK Push sent successfully.";
pub const FAILED_MESSAGE: &str = "STK Push failed.";
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed (no token).";

#[derive(Debug, Deserialize)]
pub struct StkPushForm {
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_amount")]
    pub amount: String,
}

fn default_amount() -> String {
    "0".to_string()
}

/// Starts an M-PESA STK push for the checkout form (`phone`, `amount`).
///
/// Gateway failures are reported in the body with `success: false`; the HTTP
/// status stays 200 so the checkout script can read the message.
#[instrument(name = "handlers.stk_push", skip_all)]
pub async fn stk_push_handler(
    Extension(sink): Extension<DiagnosticSinkRef>,
    Extension(gateway): Extension<PaymentGatewayRef>,
    Form(form): Form<StkPushForm>,
) -> Json<StkPushResponse> {
    let request = StkPushRequest {
        phone_number: normalize_phone(form.phone.trim()),
        amount: form.amount.trim().to_string(),
    };

    sink.payload(
        STK_PUSH_LABEL,
        &json!({ "phone": request.phone_number, "amount": request.amount }),
    );

    let token = match gateway.access_token().await {
        Ok(token) => token,
        Err(err) => {
            warn!(msg = "Kopokopo authentication failed", error = %err);
            return Json(StkPushResponse::failure(AUTH_FAILED_MESSAGE, None));
        }
    };

    match gateway.initiate_stk_push(&token, &request).await {
        Ok(response) if response.pointer("/data/id").is_some() => {
            info!(
                msg = "STK push accepted",
                phone = %request.phone_number,
                amount = %request.amount
            );
            Json(StkPushResponse::success(SENT_MESSAGE))
        }
        Ok(response) => {
            warn!(msg = "STK push rejected", %response);
            Json(StkPushResponse::failure(FAILED_MESSAGE, Some(response)))
        }
        Err(err) => {
            warn!(msg = "STK push request failed", error = %err);
            Json(StkPushResponse::failure(FAILED_MESSAGE, None))
        }
    }
}

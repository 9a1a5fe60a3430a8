use std::collections::BTreeMap;

use axum::{Extension, Json, body::Bytes, extract::Query};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::{models::CallbackResponse, sinks::DiagnosticSinkRef};

pub const CALLBACK_LABEL: &str = "Kopokopo Callback Data:";
pub const CALLBACK_MESSAGE: &str = "Kopokopo callback received.";

/// Payment result notifications from Kopokopo.
///
/// Query parameters and a JSON object body are merged (body keys win) and
/// written to the sink. The reply is always the same success document, even
/// when the body is not a JSON object.
#[instrument(name = "handlers.kopokopo_callback", skip_all)]
pub async fn kopokopo_callback_handler(
    Extension(sink): Extension<DiagnosticSinkRef>,
    Query(query): Query<BTreeMap<String, String>>,
    body: Bytes,
) -> Json<CallbackResponse> {
    let mut params: Map<String, Value> = query
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();

    if let Ok(fields) = serde_json::from_slice::<Map<String, Value>>(&body) {
        params.extend(fields);
    }

    sink.payload(CALLBACK_LABEL, &Value::Object(params));

    Json(CallbackResponse {
        status: "success".to_string(),
        message: CALLBACK_MESSAGE.to_string(),
    })
}

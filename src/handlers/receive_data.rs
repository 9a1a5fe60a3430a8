use axum::{Extension, Json, body::Bytes};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::{
    errors::ApiError, models::MessageResponse, sinks::DiagnosticSinkRef, utils::body_to_json,
};

pub const RECEIVED_LABEL: &str = "Received data:";
pub const GET_MARKER: &str = "get request";
pub const GET_DATA_LABEL: &str = "data";

pub const RECEIVED_MESSAGE: &str = "Data received successfully";
pub const PROMPT_MESSAGE: &str = "Send a POST request with data";

/// Accepts any JSON payload and acknowledges it.
///
/// The payload is forwarded to the sink untouched and never decides the
/// response. A blank body counts as `{}`; only unparseable JSON is rejected.
#[instrument(name = "handlers.receive_data", skip_all)]
pub async fn receive_data_handler(
    Extension(sink): Extension<DiagnosticSinkRef>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let payload = body_to_json(&body)?;
    sink.payload(RECEIVED_LABEL, &payload);

    Ok(Json(MessageResponse::new(RECEIVED_MESSAGE)))
}

/// GET (and HEAD) on the same route. Any request body is ignored.
#[instrument(name = "handlers.receive_data_prompt", skip_all)]
pub async fn prompt_handler(
    Extension(sink): Extension<DiagnosticSinkRef>,
) -> Json<MessageResponse> {
    sink.marker(GET_MARKER);
    sink.payload(GET_DATA_LABEL, &Value::Object(Map::new()));

    Json(MessageResponse::new(PROMPT_MESSAGE))
}

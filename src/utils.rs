use axum::http::Extensions;
use serde_json::{Map, Value};
use tower_http::request_id::RequestId;

pub fn get_request_id(ext: &Extensions) -> String {
    ext.get::<RequestId>()
        .map(request_id_to_string)
        .unwrap_or_default()
}

pub fn request_id_to_string(req_id: &RequestId) -> String {
    req_id
        .header_value()
        .to_str()
        .ok()
        .unwrap_or_default()
        .to_string()
}

/// Parses a raw request body; a blank body is the empty object.
pub fn body_to_json(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.trim_ascii().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(body)
}

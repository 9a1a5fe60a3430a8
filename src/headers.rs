use axum::http::{
    HeaderName,
    header::{AUTHORIZATION, COOKIE},
};

pub const HEADER_KOPOKOPO_SIGNATURE: HeaderName = HeaderName::from_static("x-kopokopo-signature");

/// Request headers masked in trace logs.
pub fn sensitive_headers() -> [HeaderName; 3] {
    [AUTHORIZATION, COOKIE, HEADER_KOPOKOPO_SIGNATURE]
}

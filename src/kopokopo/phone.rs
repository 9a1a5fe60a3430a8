const COUNTRY_CODE: &str = "254";

/// Rewrites a local `07XXXXXXXX` number to `2547XXXXXXXX`. Anything not
/// starting with `0` is returned unchanged.
pub fn normalize_phone(phone: &str) -> String {
    match phone.strip_prefix('0') {
        Some(rest) => format!("{COUNTRY_CODE}{rest}"),
        None => phone.to_string(),
    }
}

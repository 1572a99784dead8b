//! Request payload validation.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::Error;

/// A validated request body: a flat JSON object.
pub type Payload = Map<String, Value>;

/// Validate a request body against a set of required field names.
///
/// Returns the parsed object unchanged on success. All missing fields are
/// reported together in the error message, not just the first one found.
/// Every failure path logs a warning carrying the caller's address.
pub fn validate_payload(
    remote: SocketAddr,
    headers: &HeaderMap,
    body: &Bytes,
    required: &[&str],
) -> Result<Payload, Error> {
    if !is_json_content_type(headers) {
        warn!(
            remote = %remote,
            content_type = ?headers.get(header::CONTENT_TYPE),
            "Rejected request with non-JSON content type"
        );
        return Err(Error::client(
            "Request content-type must be application/json",
        ));
    }

    let Ok(Value::Object(data)) = serde_json::from_slice::<Value>(body) else {
        warn!(remote = %remote, "Rejected request with invalid JSON body");
        return Err(Error::client("Invalid JSON body"));
    };

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| !data.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        let fields = missing.join(", ");
        warn!(remote = %remote, missing = %fields, "Rejected request with missing required fields");
        return Err(Error::client(format!("Missing required fields: {fields}")));
    }

    Ok(data)
}

/// Check whether the declared content type is JSON, ignoring parameters
/// such as `charset`.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            let mime = value.split(';').next().unwrap_or("").trim();
            mime.eq_ignore_ascii_case("application/json")
        })
}

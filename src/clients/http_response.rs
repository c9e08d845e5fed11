//! HTTP response types for the Partner Center SDK.
//!
//! This module provides the [`TransportResponse`] returned by a transport and
//! the lenient parsing of error payloads into an [`ErrorDetails`].

use std::collections::HashMap;

use serde_json::Value;

/// A raw response returned by a [`Transport`](crate::clients::Transport).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lower-case name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response with no headers.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns `true` if the body carries no value: empty, whitespace-only,
    /// or the JSON literal `null`.
    #[must_use]
    pub fn is_empty_body(&self) -> bool {
        std::str::from_utf8(&self.body).is_ok_and(|text| matches!(text.trim(), "" | "null"))
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Extracts error details from a non-success response.
    #[must_use]
    pub fn error_details(&self) -> ErrorDetails {
        ErrorDetails::parse(self.status, &self.body)
    }
}

/// Machine code and message extracted from an error payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorDetails {
    /// The machine-readable error code, if the payload supplied one.
    pub code: Option<String>,
    /// The human-readable message.
    pub message: String,
}

impl ErrorDetails {
    /// Parses an error body.
    ///
    /// Accepted shapes:
    /// - `{"code": "NotFound", "message": "..."}`
    /// - `{"code": 600008, "description": "..."}` (numeric codes are stringified)
    /// - `{"errorCode": "...", "errorMessage": "..."}`
    /// - `{"error": {"code": "...", "message": "..."}}`
    ///
    /// Without a message the raw body text is used, and without a body the
    /// canonical reason phrase of the status.
    #[must_use]
    pub fn parse(status: u16, body: &[u8]) -> Self {
        let parsed: Option<Value> = serde_json::from_slice(body).ok();
        let payload = parsed
            .as_ref()
            .map(|v| v.get("error").filter(|e| e.is_object()).unwrap_or(v));

        let code = payload.and_then(|p| first_scalar(p, &["code", "errorCode"]));
        let message = payload
            .and_then(|p| first_scalar(p, &["message", "description", "errorMessage"]))
            .or_else(|| {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (!text.is_empty()).then_some(text)
            })
            .unwrap_or_else(|| reason_phrase(status).to_string());

        Self { code, message }
    }
}

/// Returns the first key present as a string or number.
fn first_scalar(payload: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match payload.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

const fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        412 => "Precondition Failed",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Request failed",
    }
}

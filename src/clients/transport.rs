//! The transport boundary and its default `reqwest` implementation.
//!
//! A [`Transport`] sends one fully resolved request and returns the raw
//! status and body. TLS, proxies, connection reuse and timeouts belong here,
//! not in the [`ServiceClient`](crate::clients::ServiceClient).

use std::collections::HashMap;
use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::{TransportError, TransportErrorKind};
use crate::clients::http_request::{TransportRequest, Verb};
use crate::clients::http_response::TransportResponse;

/// Sends resolved requests to the remote service.
///
/// Implementations must be safe for concurrent use: a single transport is
/// shared by every resource handle of a [`PartnerClient`](crate::PartnerClient).
///
/// Cancellation is cooperative: dropping the returned future abandons the
/// call. A transport that enforces a deadline reports it as
/// [`TransportErrorKind::Timeout`].
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use partner_center::clients::{Transport, TransportError, TransportRequest, TransportResponse};
///
/// #[derive(Debug)]
/// struct AlwaysEmpty;
///
/// #[async_trait]
/// impl Transport for AlwaysEmpty {
///     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportError> {
///         Ok(TransportResponse::new(204, Vec::new()))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the service could not be reached or the
    /// response could not be read. Non-success statuses are *not* errors at
    /// this layer.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// The default transport, backed by a `reqwest` client with rustls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport whose requests fail with
    /// [`TransportErrorKind::Timeout`] after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be created
    /// (e.g., TLS initialization failure).
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::new(TransportErrorKind::Request, e.to_string()))?;

        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client, keeping its settings.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Parses response headers into a `HashMap` keyed by lower-case name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut req_builder = match request.verb {
            Verb::Get => self.client.get(&request.url),
            Verb::Post => self.client.post(&request.url),
            Verb::Patch => self.client.patch(&request.url),
            Verb::Put => self.client.put(&request.url),
            Verb::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::trace!(status, bytes = body.len(), "received response");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_is_object_safe() {
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let shared: std::sync::Arc<dyn Transport> = std::sync::Arc::new(transport);
        assert!(format!("{shared:?}").contains("ReqwestTransport"));
    }

    #[test]
    fn test_parse_response_headers_groups_repeated_names() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("X-Multi", "a".parse().unwrap());
        headers.append("X-Multi", "b".parse().unwrap());
        headers.insert("MS-RequestId", "req-1".parse().unwrap());

        let parsed = ReqwestTransport::parse_response_headers(&headers);
        assert_eq!(
            parsed.get("x-multi"),
            Some(&vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(parsed.get("ms-requestid"), Some(&vec!["req-1".to_string()]));
    }
}

//! The generic operation invoker.
//!
//! [`ServiceClient`] turns a logical operation name plus identifier
//! components into one HTTP call, and the response into a typed value or a
//! [`PartnerError`].

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::clients::http_request::{TransportRequest, Verb};
use crate::clients::http_response::TransportResponse;
use crate::clients::transport::Transport;
use crate::clients::RemoteError;
use crate::config::PartnerConfig;
use crate::context::check_component;
use crate::error::{InvalidArgumentError, PartnerError};
use crate::registry::OperationRegistry;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const CLIENT_NAME: &str = "Partner Center Rust SDK";

/// Invokes registered operations through a [`Transport`].
///
/// The client handles:
/// - Descriptor lookup and positional path substitution
/// - Default headers (locale, correlation and request ids, bearer token)
/// - JSON body serialization and response deserialization
/// - Mapping non-2xx responses to [`RemoteError`]
///
/// It never retries.
///
/// # Thread Safety
///
/// `ServiceClient` is `Send + Sync` and is shared by every resource handle
/// of a [`PartnerClient`](crate::PartnerClient).
#[derive(Debug)]
pub struct ServiceClient {
    transport: Arc<dyn Transport>,
    registry: Arc<OperationRegistry>,
    base_url: String,
    correlation_id: Uuid,
    default_headers: HashMap<String, String>,
}

// Verify ServiceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceClient>();
};

impl ServiceClient {
    /// Creates a client for the given configuration.
    #[must_use]
    pub fn new(
        config: &PartnerConfig,
        transport: Arc<dyn Transport>,
        registry: Arc<OperationRegistry>,
    ) -> Self {
        let correlation_id = Uuid::new_v4();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}{CLIENT_NAME} v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("X-Locale".to_string(), config.locale().as_ref().to_string());
        default_headers.insert("MS-CorrelationId".to_string(), correlation_id.to_string());
        default_headers.insert("MS-PartnerCenter-Client".to_string(), CLIENT_NAME.to_string());
        default_headers.insert("MS-SdkVersion".to_string(), SDK_VERSION.to_string());

        if let Some(token) = config.access_token() {
            default_headers.insert("Authorization".to_string(), token.bearer());
        }
        if let Some(application) = config.application_name() {
            default_headers.insert(
                "MS-PartnerCenter-Application".to_string(),
                application.to_string(),
            );
        }

        let base_url = config.base_url();
        tracing::debug!(%base_url, %correlation_id, "created service client");

        Self {
            transport,
            registry,
            base_url,
            correlation_id,
            default_headers,
        }
    }

    /// Returns the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the correlation id sent with every request of this client.
    #[must_use]
    pub const fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Returns the default headers.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the registry operations are resolved against.
    #[must_use]
    pub const fn registry(&self) -> &Arc<OperationRegistry> {
        &self.registry
    }

    /// Invokes a registered operation.
    ///
    /// `components` fill the template's placeholders in order. A successful
    /// response with an empty or `null` body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// - [`PartnerError::Registry`] for an unknown operation or a component
    ///   count that does not match the template
    /// - [`PartnerError::InvalidArgument`] when a PATCH or PUT has no payload,
    ///   or a component is blank or a dot segment (`.`, `..`)
    /// - [`PartnerError::Remote`] for non-2xx responses
    /// - [`PartnerError::Transport`] when the service cannot be reached
    /// - [`PartnerError::Deserialization`] when the body does not match `T`
    pub async fn invoke<B, T>(
        &self,
        operation: &str,
        components: &[&str],
        body: Option<&B>,
    ) -> Result<T, PartnerError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let response = self.dispatch(operation, components, body).await?;
        if response.is_empty_body() {
            return Ok(T::default());
        }
        decode(operation, &response)
    }

    /// Invokes a registered operation whose response must not be empty.
    ///
    /// # Errors
    ///
    /// As [`invoke`](Self::invoke), plus [`PartnerError::EmptyResponse`] for
    /// an empty successful body.
    pub async fn invoke_mandatory<B, T>(
        &self,
        operation: &str,
        components: &[&str],
        body: Option<&B>,
    ) -> Result<T, PartnerError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(operation, components, body).await?;
        if response.is_empty_body() {
            return Err(PartnerError::EmptyResponse {
                operation: operation.to_string(),
            });
        }
        decode(operation, &response)
    }

    /// Sends a request whose verb and path are already known.
    ///
    /// `path` is relative to the base URL and must already be escaped. It is
    /// used for continuation links returned by the service.
    ///
    /// # Errors
    ///
    /// As [`invoke`](Self::invoke), except registry errors.
    pub async fn execute<B, T>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, PartnerError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let operation = format!("{verb} {path}");
        let response = self.send(&operation, verb, path, body).await?;
        if response.is_empty_body() {
            return Ok(T::default());
        }
        decode(&operation, &response)
    }

    async fn dispatch<B>(
        &self,
        operation: &str,
        components: &[&str],
        body: Option<&B>,
    ) -> Result<TransportResponse, PartnerError>
    where
        B: Serialize + ?Sized,
    {
        let descriptor = self.registry.descriptor_for(operation)?;
        for (position, component) in components.iter().enumerate() {
            check_component(position, None, component)?;
        }
        let path = descriptor.template.resolve(components)?;
        self.send(operation, descriptor.verb, &path, body).await
    }

    async fn send<B>(
        &self,
        operation: &str,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<TransportResponse, PartnerError>
    where
        B: Serialize + ?Sized,
    {
        if verb.requires_body() && body.is_none() {
            return Err(InvalidArgumentError::MissingPayload {
                operation: operation.to_string(),
                verb: verb.to_string(),
            }
            .into());
        }

        let request_id = Uuid::new_v4().to_string();
        let url = self.url_for(path);
        let mut request = TransportRequest::new(verb, url)
            .headers(&self.default_headers)
            .header("MS-RequestId", request_id.clone());

        match body {
            Some(body) if verb.carries_body() => {
                let bytes =
                    serde_json::to_vec(body).map_err(|source| PartnerError::Serialization {
                        operation: operation.to_string(),
                        source,
                    })?;
                request = request
                    .header("Content-Type", "application/json")
                    .body(bytes);
            }
            Some(_) => {
                tracing::debug!(operation, %verb, "dropping request body for bodiless verb");
            }
            None => {}
        }

        tracing::debug!(operation, %verb, path, request_id = %request_id, "sending request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(operation, %verb, path, %error, "transport failure");
                return Err(error.into());
            }
        };

        if response.is_ok() {
            return Ok(response);
        }

        let details = response.error_details();
        let error = RemoteError {
            status: response.status,
            code: details.code,
            message: details.message,
            operation: operation.to_string(),
            path: path.to_string(),
            request_id: Some(request_id),
        };
        tracing::debug!(operation, status = error.status, code = ?error.code, "remote failure");
        Err(error.into())
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn decode<T: DeserializeOwned>(
    operation: &str,
    response: &TransportResponse,
) -> Result<T, PartnerError> {
    serde_json::from_slice(&response.body).map_err(|source| PartnerError::Deserialization {
        operation: operation.to_string(),
        source,
    })
}

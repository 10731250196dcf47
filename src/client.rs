//! Module containing the main Secupay API client.

use crate::{
    authenticator::{self, ClientIdentity},
    common::{
        DEFAULT_BASE_PATH, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, IDEMPOTENCY_KEY_HEADER,
        MAC_VALUE_HEADER, SDK_LANGUAGE, SDK_LANGUAGE_HEADER, SDK_MINIMUM_RUST_VERSION,
        SDK_LANGUAGE_VERSION_HEADER, SDK_PROVIDER, SDK_PROVIDER_HEADER, SDK_VERSION,
        SDK_VERSION_HEADER,
    },
    config::ClientConfig,
    error::{ApiError, ErrorBody, VersioningError},
    request::ApiCall,
    response::{ApiResponse, Payload},
    serializer,
    transport::{HttpRequest, ReqwestTransport, Transport},
    Error,
};
use anyhow::anyhow;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use std::{
    fmt::{Debug, Formatter},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};
use uuid::Uuid;

/// Client for the Secupay web service APIs.
///
/// Every call is signed with the MAC headers of the configured user and carries a fresh
/// `Idempotency-Key`. Calls are never retried automatically.
///
/// Cloning a client is cheap: all the clones share the same configuration and connection pool.
#[derive(Clone)]
pub struct SecupayClient {
    inner: Arc<SecupayClientInner>,
}

struct SecupayClientInner {
    transport: Arc<dyn Transport>,
    identity: ClientIdentity,
    base_path: String,
    headers: HeaderMap,
    timeout: Duration,
}

impl Debug for SecupayClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecupayClient")
            .field("identity", &self.inner.identity)
            .field("base_path", &self.inner.base_path)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl SecupayClient {
    /// Builds a new [`SecupayClient`](crate::client::SecupayClient) with the default configuration.
    pub fn new(user_id: u64, application_key: impl Into<String>) -> Result<SecupayClient, Error> {
        SecupayClientBuilder::new(user_id, application_key).build()
    }

    /// Returns a new builder to configure a new [`SecupayClient`](crate::client::SecupayClient).
    pub fn builder(user_id: u64, application_key: impl Into<String>) -> SecupayClientBuilder {
        SecupayClientBuilder::new(user_id, application_key)
    }

    /// Builds a new [`SecupayClient`](crate::client::SecupayClient) from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<SecupayClient, Error> {
        SecupayClientBuilder::from_config(config).build()
    }

    pub fn user_id(&self) -> u64 {
        self.inner.identity.user_id()
    }

    pub fn base_path(&self) -> &str {
        &self.inner.base_path
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Performs a single authenticated call.
    ///
    /// On success the payload is returned undecoded, see [`ApiResponse::into_model`].
    /// A `409 Conflict` fails with [`Error::VersioningError`], any other non-2xx status
    /// with [`Error::ApiError`].
    #[tracing::instrument(
        name = "Call API",
        skip(self, call),
        fields(method = %call.method, resource_path = %call.resource_path)
    )]
    pub async fn call_api(&self, call: ApiCall) -> Result<ApiResponse<Payload>, Error> {
        if call.resource_path.trim().is_empty() {
            return Err(Error::ValidationError(
                "The resource path cannot be empty".to_string(),
            ));
        }

        let url = call.build_url(&self.inner.base_path)?;
        let ApiCall {
            resource_path,
            method,
            headers: call_headers,
            body,
            response_type,
            timeout,
            ..
        } = call;

        // Client headers, then caller headers, then the per-call token and authentication
        let mut headers = self.inner.headers.clone();
        for (name, value) in call_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let idempotency_key = Uuid::new_v4().to_string().to_uppercase();
        tracing::debug!(idempotency_key = %idempotency_key, "Prepared request");
        headers.insert(
            IDEMPOTENCY_KEY_HEADER,
            HeaderValue::from_str(&idempotency_key).map_err(|e| Error::Other(e.into()))?,
        );

        let auth = authenticator::sign_now(&self.inner.identity, &method, url.path())?;
        for (name, value) in auth.to_header_pairs() {
            let mut value = HeaderValue::from_str(&value)
                .map_err(|e| Error::Other(anyhow!("Invalid {} header: {}", name, e)))?;
            if name == MAC_VALUE_HEADER {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }

        let body = body.map(serializer::serialize_body).transpose()?;

        let res = self
            .inner
            .transport
            .send(HttpRequest {
                method,
                url: url.clone(),
                headers,
                body,
                timeout: timeout.unwrap_or(self.inner.timeout),
            })
            .await?;

        if (200..300).contains(&res.status) {
            return Ok(ApiResponse {
                status: res.status,
                headers: res.headers,
                data: Payload::from_body(res.body, response_type),
                response_type,
            });
        }

        tracing::debug!("Failed HTTP request. Status code: {}", res.status);

        if res.status == 409 {
            return Err(VersioningError::new(resource_path).into());
        }

        let message = format!(
            "Error {} connecting to the API ({}): {}",
            res.status,
            url,
            String::from_utf8_lossy(&res.body)
        );

        Err(ApiError {
            status: res.status,
            body: ErrorBody::decode(res.status, &res.body),
            headers: res.headers,
            message,
        }
        .into())
    }
}

/// Builder for a [`SecupayClient`](crate::client::SecupayClient).
pub struct SecupayClientBuilder {
    user_id: u64,
    application_key: SecretString,
    base_path: String,
    timeout: Duration,
    user_agent: String,
    default_headers: Vec<(String, String)>,
    certificate_authority: Option<PathBuf>,
    certificate_authority_check: bool,
    debug: bool,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl Debug for SecupayClientBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecupayClientBuilder")
            .field("user_id", &self.user_id)
            .field("base_path", &self.base_path)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("certificate_authority", &self.certificate_authority)
            .field("certificate_authority_check", &self.certificate_authority_check)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl SecupayClientBuilder {
    /// Creates a new builder to configure a [`SecupayClient`](crate::client::SecupayClient).
    pub fn new(user_id: u64, application_key: impl Into<String>) -> Self {
        Self {
            user_id,
            application_key: SecretString::new(application_key.into()),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: Vec::new(),
            certificate_authority: None,
            certificate_authority_check: true,
            debug: false,
            http_client: None,
            transport: None,
        }
    }

    /// Creates a new builder initialized from a [`ClientConfig`](crate::config::ClientConfig).
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = Self::new(config.user_id, config.application_key.expose_secret().clone())
            .with_base_path(&config.base_path)
            .with_timeout(config.timeout())
            .with_user_agent(&config.user_agent)
            .with_certificate_authority_check(config.certificate_authority_check)
            .with_debugging(config.debug);

        if let Some(ref path) = config.certificate_authority {
            builder = builder.with_certificate_authority(path.clone());
        }
        for (name, value) in &config.default_headers {
            builder = builder.with_default_header(name, value);
        }

        builder
    }

    /// Consumes the builder and builds a new [`SecupayClient`](crate::client::SecupayClient).
    pub fn build(self) -> Result<SecupayClient, Error> {
        let identity = ClientIdentity::new(self.user_id, self.application_key.expose_secret().clone())?;

        if self.timeout.is_zero() {
            return Err(Error::ValidationError(
                "The timeout must be greater than zero".to_string(),
            ));
        }

        let base_path = self.base_path.trim().trim_end_matches('/').to_string();
        if base_path.is_empty() {
            return Err(Error::ValidationError(
                "The base path cannot be empty".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in [
            (SDK_VERSION_HEADER, SDK_VERSION),
            (SDK_LANGUAGE_HEADER, SDK_LANGUAGE),
            (SDK_PROVIDER_HEADER, SDK_PROVIDER),
            (SDK_LANGUAGE_VERSION_HEADER, SDK_MINIMUM_RUST_VERSION),
        ] {
            headers.insert(name, HeaderValue::from_static(value));
        }
        headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), &self.user_agent)?);
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                Error::ValidationError(format!("Invalid header name '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value(name, value)?);
        }

        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client, self.debug)),
            (None, None) => Arc::new(ReqwestTransport::with_tls_settings(
                self.certificate_authority.as_deref(),
                self.certificate_authority_check,
                self.debug,
            )?),
        };

        Ok(SecupayClient {
            inner: Arc::new(SecupayClientInner {
                transport,
                identity,
                base_path,
                headers,
                timeout: self.timeout,
            }),
        })
    }

    /// Sets the base URL of the API. A trailing `/` is ignored.
    ///
    /// Defaults to: `https://app-wallee.com:443/api`
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = base_path.to_string();
        self
    }

    /// Sets the default timeout of every call.
    ///
    /// Defaults to 25 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Adds a header sent with every request. Headers set on a single call take precedence.
    pub fn with_default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Trusts an additional PEM encoded root certificate.
    ///
    /// Ignored when a custom HTTP client or transport is set.
    pub fn with_certificate_authority(mut self, path: impl Into<PathBuf>) -> Self {
        self.certificate_authority = Some(path.into());
        self
    }

    /// Disables the validation of server certificates when `false`. Only use it for testing.
    pub fn with_certificate_authority_check(mut self, check: bool) -> Self {
        self.certificate_authority_check = check;
        self
    }

    /// Logs every request and response at `DEBUG` level.
    pub fn with_debugging(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replaces the HTTP transport entirely.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::ValidationError(format!("Invalid value for header {}: {}", name, e)))
}

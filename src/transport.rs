//! HTTP exchange with the Secupay servers.

use crate::{middlewares::debug_logging::DebugLoggingMiddleware, Error};
use async_trait::async_trait;
use reqwest::{header::HeaderMap, Method, Url};
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use std::{
    fmt::{Debug, Formatter},
    path::Path,
    time::Duration,
};

/// Fully prepared request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

/// Response as received from the server, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Performs a single HTTP exchange.
///
/// Implementations must only fail when no response could be obtained (connection, TLS, timeout);
/// non-2xx responses are returned as regular [`HttpResponse`]s.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// Default transport, backed by `reqwest` with tracing middlewares.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Wraps an existing reqwest [`Client`](reqwest::Client) with the tracing middlewares.
    pub fn new(client: reqwest::Client, debug: bool) -> Self {
        let mut builder =
            reqwest_middleware::ClientBuilder::new(client).with(TracingMiddleware::default());

        if debug {
            builder = builder.with(DebugLoggingMiddleware);
        }

        Self {
            client: builder.build(),
        }
    }

    /// Builds a new reqwest client honouring the TLS settings.
    ///
    /// `certificate_authority` is the path to an additional PEM encoded root certificate.
    pub fn with_tls_settings(
        certificate_authority: Option<&Path>,
        certificate_authority_check: bool,
        debug: bool,
    ) -> Result<Self, Error> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(!certificate_authority_check);

        if let Some(path) = certificate_authority {
            let pem = std::fs::read(path).map_err(|e| {
                Error::ValidationError(format!(
                    "Cannot read certificate authority file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let certificate = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                Error::ValidationError(format!(
                    "Invalid certificate authority file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        let client = builder.build()?;
        Ok(Self::new(client, debug))
    }
}

impl Debug for ReqwestTransport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut req = reqwest::Request::new(request.method, request.url);
        *req.headers_mut() = request.headers;
        *req.timeout_mut() = Some(request.timeout);
        if let Some(body) = request.body {
            *req.body_mut() = Some(body.into());
        }

        let res = self.client.execute(req).await?;

        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let body = res.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which logs every outgoing request and the status of its response
/// at `DEBUG` level. Sensitive header values are redacted.
#[derive(Debug, Clone, Copy)]
pub struct DebugLoggingMiddleware;

#[async_trait]
impl Middleware for DebugLoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let body = req
            .body()
            .and_then(|b| b.as_bytes())
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default();
        tracing::debug!(
            method = %req.method(),
            url = %req.url(),
            headers = %format_headers(req.headers()),
            body = %body,
            "Sending HTTP request"
        );

        let res = next.run(req, extensions).await;

        match res {
            Ok(ref response) => tracing::debug!(
                status = response.status().as_u16(),
                headers = %format_headers(response.headers()),
                "Received HTTP response"
            ),
            Err(ref e) => tracing::debug!("HTTP request failed: {}", e),
        }

        res
    }
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if value.is_sensitive() {
                "<redacted>"
            } else {
                value.to_str().unwrap_or("<binary>")
            };
            format!("{}: {}", name, value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

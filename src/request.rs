use crate::{
    serializer::{self, RequestBody, ResponseType},
    Error,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE},
    Method, Url,
};
use serde::Serialize;
use std::time::Duration;

/// Description of a single call to the API, independent of authentication and transport.
#[derive(Debug, Clone)]
pub struct ApiCall {
    pub(crate) resource_path: String,
    pub(crate) method: Method,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<RequestBody>,
    pub(crate) response_type: ResponseType,
    pub(crate) timeout: Option<Duration>,
}

impl ApiCall {
    pub fn new(method: Method, resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            method,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            response_type: ResponseType::Empty,
            timeout: None,
        }
    }

    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Query parameters in insertion order.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// Adds a query parameter.
    ///
    /// Setting the same name twice replaces the previous value, keeping its position.
    pub fn query<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> Result<Self, Error> {
        let value = serializer::to_query_value(value)?;

        match self.query.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.query.push((name.to_string(), value)),
        }

        Ok(self)
    }

    /// Adds a query parameter only if a value is present.
    pub fn query_opt<T: Serialize>(self, name: &str, value: Option<&T>) -> Result<Self, Error> {
        match value {
            Some(value) => self.query(name, value),
            None => Ok(self),
        }
    }

    /// Adds an extra header to the request.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::ValidationError(format!("Invalid header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::ValidationError(format!("Invalid value for header {}: {}", name, e)))?;

        self.headers.insert(name, value);
        Ok(self)
    }

    /// Negotiates the `Accept` header from the content types the operation produces.
    pub fn accept(mut self, candidates: &[&str]) -> Result<Self, Error> {
        if let Some(accept) = serializer::select_header_accept(candidates) {
            self.headers.insert(ACCEPT, negotiated_value(ACCEPT, &accept)?);
        }
        Ok(self)
    }

    /// Negotiates the `Content-Type` header from the content types the operation consumes.
    pub fn content_type(mut self, candidates: &[&str]) -> Result<Self, Error> {
        let content_type = serializer::select_header_content_type(candidates);
        self.headers
            .insert(CONTENT_TYPE, negotiated_value(CONTENT_TYPE, &content_type)?);
        Ok(self)
    }

    /// Serializes `body` as the JSON request body.
    pub fn json_body<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, Error> {
        Ok(self.body(RequestBody::json(body)?))
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    /// Overrides the client timeout for this call only.
    pub fn timeout(mut self, timeout: Duration) -> Result<Self, Error> {
        if timeout.is_zero() {
            return Err(Error::ValidationError(
                "The timeout must be greater than zero".to_string(),
            ));
        }

        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Builds the full request URL: base path, resource path and the URL-encoded query string.
    pub fn build_url(&self, base_path: &str) -> Result<Url, Error> {
        let mut url = format!("{}{}", base_path, self.resource_path);

        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(name, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(name),
                        urlencoding::encode(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        Url::parse(&url).map_err(|e| Error::ValidationError(format!("Invalid URL '{}': {}", url, e)))
    }
}

fn negotiated_value(name: HeaderName, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::ValidationError(format!("Invalid value for header {}: {}", name, e)))
}

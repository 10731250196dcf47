//! Clients for the various Secupay APIs.
//!
//! Every operation is described by an [`Operation`] constant; the typed API clients only map
//! their arguments to query parameters and bodies.

use crate::{request::ApiCall, serializer::ResponseType, Error};
use reqwest::Method;

pub mod shopify_subscription_suspension;
pub mod transactions;

pub(crate) static JSON_UTF8: &[&str] = &["application/json;charset=utf-8"];
pub(crate) static NO_CONTENT_TYPES: &[&str] = &[];

/// Static description of a single API operation.
#[derive(Debug, Clone)]
pub struct Operation {
    pub name: &'static str,
    pub path: &'static str,
    pub method: Method,
    /// Content types the operation produces.
    pub accept: &'static [&'static str],
    /// Content types the operation consumes.
    pub content_type: &'static [&'static str],
    pub response_type: ResponseType,
}

impl Operation {
    /// Starts a new call of this operation, with negotiated `Accept` and `Content-Type` headers.
    pub fn request(&self) -> Result<ApiCall, Error> {
        Ok(ApiCall::new(self.method.clone(), self.path)
            .accept(self.accept)?
            .content_type(self.content_type)?
            .response_type(self.response_type))
    }
}

use crate::{
    serializer::{self, ResponseType},
    Error,
};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of a successful response as received from the server.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    /// Binary content returned verbatim.
    Bytes(Vec<u8>),
    /// Text which is either expected verbatim or could not be parsed as JSON.
    Text(String),
    Json(Value),
}

impl Payload {
    /// Builds a payload from the raw response body according to the expected response type.
    ///
    /// Raw response types are returned verbatim. Everything else is parsed as JSON, falling back
    /// to the raw text when parsing fails.
    pub(crate) fn from_body(body: Vec<u8>, response_type: ResponseType) -> Self {
        if body.is_empty() {
            return Payload::Empty;
        }

        match response_type {
            ResponseType::File => Payload::Bytes(body),
            ResponseType::Text => match String::from_utf8(body) {
                Ok(text) => Payload::Text(text),
                Err(e) => Payload::Bytes(e.into_bytes()),
            },
            _ => match serde_json::from_slice(&body) {
                Ok(value) => Payload::Json(value),
                Err(_) => match String::from_utf8(body) {
                    Ok(text) => Payload::Text(text),
                    Err(e) => Payload::Bytes(e.into_bytes()),
                },
            },
        }
    }
}

/// Successful (2xx) response returned by [`SecupayClient::call_api`](crate::client::SecupayClient::call_api).
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub data: T,
    pub(crate) response_type: ResponseType,
}

impl<T> ApiResponse<T> {
    /// The response type the payload was interpreted with.
    pub fn response_type(&self) -> ResponseType {
        self.response_type
    }
}

impl ApiResponse<Payload> {
    /// Decodes the payload into a typed model, keeping status and headers.
    pub fn into_model<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, Error> {
        let data = serializer::deserialize(self.data, self.response_type)?;

        Ok(ApiResponse {
            status: self.status,
            headers: self.headers,
            data,
            response_type: self.response_type,
        })
    }

    /// Decodes the payload into a typed model, discarding status and headers.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, Error> {
        serializer::deserialize(self.data, self.response_type)
    }
}

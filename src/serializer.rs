//! Conversion between Rust values and the wire representation used by the API.

use crate::{common::APPLICATION_JSON, response::Payload, Error};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Expected shape of a response body.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ResponseType {
    /// No content is expected.
    Empty,
    /// Binary download, returned verbatim.
    File,
    /// Plain string, returned verbatim.
    Text,
    /// JSON integer.
    Int,
    /// JSON object of the named model.
    Model(&'static str),
    /// JSON array whose elements are the named model.
    ModelArray(&'static str),
}

impl ResponseType {
    /// Raw response types bypass JSON decoding.
    pub fn is_raw(&self) -> bool {
        matches!(self, ResponseType::File | ResponseType::Text)
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Text(String),
    Bytes(Vec<u8>),
}

impl RequestBody {
    /// Serializes `value` into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| Error::ValidationError(format!("Cannot serialize request body: {}", e)))
    }
}

/// Renders a scalar (or a list of scalars) to its query string representation.
///
/// Strings are used verbatim, enumerations through their wire value, lists are joined with commas
/// and `null` becomes the empty string.
pub fn to_query_value<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let value = serde_json::to_value(value)
        .map_err(|e| Error::ValidationError(format!("Cannot encode query value: {}", e)))?;

    Ok(scalar_to_string(&value))
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Renders a request body to bytes. Text and binary bodies are passed through unchanged.
pub fn serialize_body(body: RequestBody) -> Result<Vec<u8>, Error> {
    match body {
        RequestBody::Json(value) => serde_json::to_vec(&value)
            .map_err(|e| Error::ValidationError(format!("Cannot serialize request body: {}", e))),
        RequestBody::Text(text) => Ok(text.into_bytes()),
        RequestBody::Bytes(bytes) => Ok(bytes),
    }
}

/// Decodes a response payload into `T`.
///
/// Arrays are decoded element by element as `Vec<T>`. For [`ResponseType::Int`] numeric text is
/// accepted as well. Raw payloads can always be read as `String`.
pub fn deserialize<T: DeserializeOwned>(
    payload: Payload,
    response_type: ResponseType,
) -> Result<T, Error> {
    let value = match payload {
        Payload::Json(value) => value,
        Payload::Text(text) => match response_type {
            ResponseType::Int => text
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or(Value::String(text)),
            _ => Value::String(text),
        },
        Payload::Bytes(bytes) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
        Payload::Empty => match response_type {
            ResponseType::Text | ResponseType::File => Value::String(String::new()),
            _ => Value::Null,
        },
    };

    serde_json::from_value(value).map_err(Error::DeserializationError)
}

/// Chooses the `Accept` header value. Returns `None` if there is no candidate.
pub fn select_header_accept(candidates: &[&str]) -> Option<String> {
    match candidates.first() {
        None => None,
        Some(first) if first.is_empty() => None,
        Some(_) => Some(prefer_json(candidates)),
    }
}

/// Chooses the `Content-Type` header value. Defaults to `application/json`.
pub fn select_header_content_type(candidates: &[&str]) -> String {
    match candidates.first() {
        None => APPLICATION_JSON.to_string(),
        Some(first) if first.is_empty() => APPLICATION_JSON.to_string(),
        Some(_) => prefer_json(candidates),
    }
}

fn prefer_json(candidates: &[&str]) -> String {
    if candidates
        .iter()
        .any(|c| c.to_ascii_lowercase().contains(APPLICATION_JSON))
    {
        APPLICATION_JSON.to_string()
    } else {
        candidates.join(",")
    }
}

//! MAC authentication of outgoing requests.
//!
//! Every request carries four `x-mac-*` headers. The signature is an HMAC-SHA512 over the
//! canonical string `version|userId|timestamp|method|path`, keyed with the base64-decoded
//! application key. Query string and body are not covered by the signature.

use crate::{
    common::{MAC_TIMESTAMP_HEADER, MAC_USER_ID_HEADER, MAC_VALUE_HEADER, MAC_VERSION_HEADER},
    Error,
};
use anyhow::anyhow;
use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD as BASE64},
        DecodePaddingMode,
    },
    Engine,
};
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;
use std::fmt::{Debug, Formatter};

type HmacSha512 = Hmac<Sha512>;

/// Decoder for application keys: padding is optional and trailing bits are ignored.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Version of the MAC protocol.
pub const MAC_VERSION: u8 = 1;

/// Identity of the application user on whose behalf requests are sent.
pub struct ClientIdentity {
    user_id: u64,
    application_key: SecretString,
}

impl ClientIdentity {
    /// Creates a new identity from the user id and the base64-encoded application key.
    ///
    /// Fails if the application key is empty.
    pub fn new(user_id: u64, application_key: impl Into<String>) -> Result<Self, Error> {
        let application_key = application_key.into();
        if application_key.trim().is_empty() {
            return Err(Error::ValidationError(
                "The application key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            application_key: SecretString::new(application_key),
        })
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Raw bytes of the application key.
    ///
    /// Missing padding is tolerated. Keys which are not base64 at all are used verbatim: the
    /// server is the only judge of whether the resulting signature is acceptable.
    fn decoded_key(&self) -> Vec<u8> {
        let key = self.application_key.expose_secret().trim();
        LENIENT_BASE64.decode(key).unwrap_or_else(|e| {
            tracing::warn!("Application key is not valid base64 ({}), using it verbatim", e);
            key.as_bytes().to_vec()
        })
    }
}

impl Debug for ClientIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

/// Authentication headers computed for a single request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AuthHeaders {
    pub version: u8,
    pub user_id: u64,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Base64-encoded HMAC-SHA512 signature.
    pub signature: String,
}

impl AuthHeaders {
    /// Header name/value pairs to attach to the outgoing request.
    pub fn to_header_pairs(&self) -> [(&'static str, String); 4] {
        [
            (MAC_VERSION_HEADER, self.version.to_string()),
            (MAC_USER_ID_HEADER, self.user_id.to_string()),
            (MAC_TIMESTAMP_HEADER, self.timestamp.to_string()),
            (MAC_VALUE_HEADER, self.signature.clone()),
        ]
    }
}

/// Builds the string covered by the signature.
pub fn canonical_string(user_id: u64, timestamp: i64, method: &Method, path: &str) -> String {
    [
        MAC_VERSION.to_string(),
        user_id.to_string(),
        timestamp.to_string(),
        method.as_str().to_string(),
        path.to_string(),
    ]
    .join("|")
}

/// Signs a request for `method` and `path` at the given unix `timestamp`.
///
/// Deterministic for fixed inputs.
pub fn sign(
    identity: &ClientIdentity,
    method: &Method,
    path: &str,
    timestamp: i64,
) -> Result<AuthHeaders, Error> {
    let canonical = canonical_string(identity.user_id, timestamp, method, path);

    let mut mac = HmacSha512::new_from_slice(&identity.decoded_key())
        .map_err(|e| Error::Other(anyhow!("Cannot initialize HMAC: {}", e)))?;
    mac.update(canonical.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    Ok(AuthHeaders {
        version: MAC_VERSION,
        user_id: identity.user_id,
        timestamp,
        signature,
    })
}

/// Signs a request using the current wall-clock time.
pub(crate) fn sign_now(
    identity: &ClientIdentity,
    method: &Method,
    path: &str,
) -> Result<AuthHeaders, Error> {
    sign(identity, method, path, Utc::now().timestamp())
}

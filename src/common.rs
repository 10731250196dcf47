use std::time::Duration;

// Defaults
pub static DEFAULT_BASE_PATH: &str = "https://app-wallee.com:443/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);
pub static DEFAULT_USER_AGENT: &str = concat!("Rust-Client/", env!("CARGO_PKG_VERSION"), "/rust");

// SDK metadata sent with every request
pub static SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
pub static SDK_LANGUAGE: &str = "rust";
pub static SDK_PROVIDER: &str = "Secupay";
// The crate's minimum supported Rust version (`rust-version`), not the compiler used for the build
pub static SDK_MINIMUM_RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

// Header names
pub static IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";
pub static SDK_VERSION_HEADER: &str = "x-meta-sdk-version";
pub static SDK_LANGUAGE_HEADER: &str = "x-meta-sdk-language";
pub static SDK_PROVIDER_HEADER: &str = "x-meta-sdk-provider";
pub static SDK_LANGUAGE_VERSION_HEADER: &str = "x-meta-sdk-language-version";
pub static MAC_VERSION_HEADER: &str = "x-mac-version";
pub static MAC_USER_ID_HEADER: &str = "x-mac-userid";
pub static MAC_TIMESTAMP_HEADER: &str = "x-mac-timestamp";
pub static MAC_VALUE_HEADER: &str = "x-mac-value";

// Content types
pub static APPLICATION_JSON: &str = "application/json";

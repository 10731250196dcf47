//! File and environment based configuration of a [`SecupayClient`](crate::client::SecupayClient).

use crate::{
    common::{DEFAULT_BASE_PATH, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT},
    Error,
};
use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use std::{collections::HashMap, path::Path, path::PathBuf, time::Duration};

/// Prefix of the environment variables overriding the configuration, e.g. `SECUPAY_USER_ID`.
pub static ENV_PREFIX: &str = "SECUPAY";

/// Settings of a [`SecupayClient`](crate::client::SecupayClient).
#[derive(Deserialize, Debug, Clone)]
pub struct ClientConfig {
    pub user_id: u64,
    /// Base64 encoded application key.
    pub application_key: SecretString,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Path to an additional PEM encoded root certificate.
    #[serde(default)]
    pub certificate_authority: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub certificate_authority_check: bool,
    /// Logs every request and response at `DEBUG` level.
    #[serde(default)]
    pub debug: bool,
    /// Extra headers sent with every request.
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_true() -> bool {
    true
}

impl ClientConfig {
    /// Loads the configuration from an optional file, overridden by `SECUPAY_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: ClientConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.timeout_secs == 0 {
            return Err(Error::ValidationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.base_path.trim().is_empty() {
            return Err(Error::ValidationError(
                "base_path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

use std::fmt::{Debug, Formatter};

use restsign_core::utils::Redact;
use restsign_core::{Error, Result};

/// Credential for game rest services.
///
/// All four values are required and immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    client_id: String,
    app_id: String,
    api_key: String,
    api_secret: String,
}

impl Credential {
    /// Create a new credential.
    ///
    /// Every argument accepts either `&str` or `Option<&str>`. `None` and
    /// empty strings are rejected with [`restsign_core::ErrorKind::MissingCredential`]
    /// naming the first offending field.
    pub fn new<'a>(
        client_id: impl Into<Option<&'a str>>,
        app_id: impl Into<Option<&'a str>>,
        api_key: impl Into<Option<&'a str>>,
        api_secret: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        Ok(Self {
            client_id: required(client_id.into(), "client_id")?,
            app_id: required(app_id.into(), "app_id")?,
            api_key: required(api_key.into(), "api_key")?,
            api_secret: required(api_secret.into(), "api_secret")?,
        })
    }

    /// Client id of the game client.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Application id registered for the game.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Public api key, sent in clear inside the authorization value.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Api secret used as the HMAC key.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::missing_credential(field)),
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_id", &self.client_id)
            .field("app_id", &self.app_id)
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

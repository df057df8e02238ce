use std::fmt::{Debug, Formatter};

use restsign_core::time::parse_date;
use restsign_core::utils::Redact;
use restsign_core::{Env, Error, Result};

use crate::constants::*;
use crate::{Credential, Signer};

/// Config carries all the configuration for game rest services.
#[derive(Clone, Default)]
pub struct Config {
    /// `client_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RESTSIGN_CLIENT_ID`]
    pub client_id: Option<String>,
    /// `app_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RESTSIGN_APP_ID`]
    pub app_id: Option<String>,
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RESTSIGN_API_KEY`]
    pub api_key: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RESTSIGN_API_SECRET`]
    pub api_secret: Option<String>,
    /// `service_name` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RESTSIGN_SERVICE_NAME`]
    pub service_name: Option<String>,
    /// `scope_date` as `YYYYMMDD`, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RESTSIGN_SCOPE_DATE`]
    ///
    /// Required by [`Config::signer`].
    pub scope_date: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set client_id
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set app_id
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set api_secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Set service_name
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    /// Set scope_date
    pub fn with_scope_date(mut self, scope_date: impl Into<String>) -> Self {
        self.scope_date = Some(scope_date.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        if let Some(v) = env.var(RESTSIGN_CLIENT_ID) {
            self.client_id.get_or_insert(v);
        }
        if let Some(v) = env.var(RESTSIGN_APP_ID) {
            self.app_id.get_or_insert(v);
        }
        if let Some(v) = env.var(RESTSIGN_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = env.var(RESTSIGN_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }
        if let Some(v) = env.var(RESTSIGN_SERVICE_NAME) {
            self.service_name.get_or_insert(v);
        }
        if let Some(v) = env.var(RESTSIGN_SCOPE_DATE) {
            self.scope_date.get_or_insert(v);
        }

        self
    }

    /// Build the credential out of this config.
    pub fn credential(&self) -> Result<Credential> {
        Credential::new(
            self.client_id.as_deref(),
            self.app_id.as_deref(),
            self.api_key.as_deref(),
            self.api_secret.as_deref(),
        )
    }

    /// Build a signer with the configured credential, scope date and
    /// service name.
    ///
    /// Fails with `ConfigInvalid` if the scope date is unset or malformed.
    pub fn signer(&self) -> Result<Signer> {
        let credential = self.credential()?;
        let date = self.scope_date.as_deref().ok_or_else(|| {
            Error::config_invalid(format!(
                "scope_date is required, set it or {RESTSIGN_SCOPE_DATE}"
            ))
        })?;
        let mut signer = Signer::from_credential(credential, parse_date(date)?);

        if let Some(name) = &self.service_name {
            signer.set_service_name(name.as_str())?;
        }

        Ok(signer)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("app_id", &self.app_id)
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("api_secret", &self.api_secret.as_ref().map(Redact::from))
            .field("service_name", &self.service_name)
            .field("scope_date", &self.scope_date)
            .finish()
    }
}

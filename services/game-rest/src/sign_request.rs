use http::request::Parts;
use http::uri::Authority;
use http::{header, HeaderValue};
use log::debug;
use restsign_core::time::DateTime;
use restsign_core::{Error, Result};

use crate::{Credential, Signer};

/// RequestSigner applies the game rest signature to `http::request::Parts`.
///
/// Every header present on the request is signed in iteration order, so the
/// request must carry all of its headers before signing. A `host` header is
/// derived from the uri authority when the request has none, userinfo
/// excluded.
#[derive(Debug)]
pub struct RequestSigner {
    service: String,

    time: DateTime,
}

impl RequestSigner {
    /// Create a new request signer for the given service, taking the
    /// credential scope date from `time`.
    pub fn new(service: &str, time: DateTime) -> Self {
        Self {
            service: service.into(),

            time,
        }
    }

    /// Build the signer holding every fact of this request.
    pub fn build_signer(
        &self,
        parts: &Parts,
        body: &[u8],
        credential: &Credential,
    ) -> Result<Signer> {
        let mut signer = Signer::from_credential(credential.clone(), self.time);

        let url = parts
            .uri
            .path_and_query()
            .map(|v| v.as_str())
            .unwrap_or("/");
        signer.set_url(parts.method.as_str(), url)?;
        signer.set_body_bytes(body);
        signer.set_service_name(self.service.as_str())?;

        if !parts.headers.contains_key(header::HOST) {
            let authority = parts.uri.authority().ok_or_else(|| {
                Error::invalid_argument("host", "request without host is invalid for signing")
            })?;
            signer.add_header(header::HOST.as_str(), host_value(authority).as_str())?;
        }
        for (name, value) in parts.headers.iter() {
            if name == header::AUTHORIZATION {
                continue;
            }
            signer.add_header(name.as_str(), value.to_str()?)?;
        }

        Ok(signer)
    }

    /// Sign the request in place by inserting the `authorization` header.
    pub fn sign_request(
        &self,
        parts: &mut Parts,
        body: &[u8],
        credential: &Credential,
    ) -> Result<()> {
        let signer = self.build_signer(parts, body, credential)?;

        if !parts.headers.contains_key(header::HOST) {
            // Authority presence was checked while building the signer.
            if let Some(authority) = parts.uri.authority() {
                let value = HeaderValue::from_str(&host_value(authority))?;
                parts.headers.insert(header::HOST, value);
            }
        }

        let mut authorization = HeaderValue::from_str(&signer.create_signature_header())?;
        // Set value sensitive to avoid leaking.
        authorization.set_sensitive(true);
        parts.headers.insert(header::AUTHORIZATION, authorization);
        debug!(
            "signed {} {} for service {}",
            parts.method,
            parts.uri.path(),
            self.service
        );

        Ok(())
    }
}

/// Host header value of the authority: host and port, never userinfo.
fn host_value(authority: &Authority) -> String {
    match authority.port() {
        Some(port) => format!("{}:{}", authority.host(), port.as_str()),
        None => authority.host().to_string(),
    }
}

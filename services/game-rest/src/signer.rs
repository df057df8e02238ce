use log::debug;
use restsign_core::hash::{base64_url_hmac_sha256, hex_sha256};
use restsign_core::time::{format_date, DateTime};
use restsign_core::utils::Redact;
use restsign_core::{Error, Result};

use crate::canonical;
use crate::constants::{ALGORITHM, HOST_SEPARATOR, QUERY_SEPARATOR, SCHEME_SEPARATOR};
use crate::{Credential, RequestDescriptor};

/// Signer builds the authorization value for one outgoing request.
///
/// Create one signer per request attempt: register the url, body, service
/// name and every header that goes on the wire, then call
/// [`Signer::create_signature_header`].
///
/// The credential scope date is taken from the time given at construction;
/// there is no implicit clock.
///
/// Mutators validate eagerly and fail fast. Derived artifacts never fail:
/// unset parts read as empty strings. Reading does not seal the signer, later
/// mutations change later reads.
///
/// ```
/// use restsign_core::time::parse_date;
/// use restsign_game_rest::Signer;
///
/// # fn main() -> restsign_core::Result<()> {
/// let mut signer = Signer::new("client", "app", "key", "secret", parse_date("20160619")?)?;
/// signer.set_url("GET", "/v1/scoreboard/top")?;
/// signer.set_service_name("scoreboard")?;
/// signer.add_header("host", "localhost")?;
/// signer.set_body(None);
///
/// let authorization = signer.create_signature_header();
/// assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credentials=key/20160619/scoreboard "));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Signer {
    credential: Credential,
    time: DateTime,
    request: RequestDescriptor,
}

impl Signer {
    /// Create a signer from the four credential values and the time the
    /// credential scope date is taken from.
    ///
    /// Fails with `MissingCredential` naming the field if any credential
    /// value is `None` or empty.
    pub fn new<'a>(
        client_id: impl Into<Option<&'a str>>,
        app_id: impl Into<Option<&'a str>>,
        api_key: impl Into<Option<&'a str>>,
        api_secret: impl Into<Option<&'a str>>,
        time: DateTime,
    ) -> Result<Self> {
        let credential = Credential::new(client_id, app_id, api_key, api_secret)?;
        Ok(Self::from_credential(credential, time))
    }

    /// Create a signer from an already validated credential and the time
    /// the credential scope date is taken from.
    pub fn from_credential(credential: Credential, time: DateTime) -> Self {
        Self {
            credential,
            time,
            request: RequestDescriptor::default(),
        }
    }

    /// The credential this signer signs with.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Request facts registered so far.
    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    /// Set the target service name. Later calls overwrite it.
    pub fn set_service_name<'a>(&mut self, name: impl Into<Option<&'a str>>) -> Result<()> {
        let name = match name.into() {
            Some(v) if !v.is_empty() => v,
            _ => {
                return Err(Error::invalid_argument(
                    "name",
                    "service name must not be null or empty",
                ))
            }
        };

        self.request.set_service_name(name.to_string());
        Ok(())
    }

    /// Set method and url.
    ///
    /// The url carries path and query only: anything with a scheme separator
    /// or a `.` is rejected as `MalformedUrl`, as is more than one `?`.
    /// A missing url is treated as empty.
    pub fn set_url<'a>(
        &mut self,
        method: impl Into<Option<&'a str>>,
        url: impl Into<Option<&'a str>>,
    ) -> Result<()> {
        let method = match method.into() {
            Some(v) if !v.is_empty() => v,
            _ => {
                return Err(Error::invalid_argument(
                    "method",
                    "method must not be null or empty",
                ))
            }
        };
        let url = url.into().unwrap_or_default();

        if url.contains(SCHEME_SEPARATOR) {
            return Err(Error::malformed_url(format!(
                "url must not contain protocol part: {url}"
            )));
        }
        if url.contains(HOST_SEPARATOR) {
            return Err(Error::malformed_url(format!(
                "url must not contain domain part: {url}"
            )));
        }

        let pieces = url.split(QUERY_SEPARATOR).collect::<Vec<_>>();
        let (path, query) = match pieces.as_slice() {
            [path] => (*path, ""),
            [path, query] => (*path, *query),
            _ => {
                return Err(Error::malformed_url(format!(
                    "url must not contain more than one query part: {url}"
                )))
            }
        };

        self.request.set_url(
            method.to_uppercase(),
            canonical::normalize_path(path),
            query.to_string(),
        );
        Ok(())
    }

    /// Add a header to sign.
    ///
    /// Empty values are allowed, `None` is not. The value is normalized
    /// before it is stored. Adding the same name twice appends it twice to
    /// the signed header names while the canonical headers keep one entry
    /// holding the latest value.
    pub fn add_header<'a>(
        &mut self,
        name: impl Into<Option<&'a str>>,
        value: impl Into<Option<&'a str>>,
    ) -> Result<()> {
        let name = name
            .into()
            .ok_or_else(|| Error::invalid_argument("name", "header name must not be null"))?;
        let value = value
            .into()
            .ok_or_else(|| Error::invalid_argument("value", "header value must not be null"))?;

        self.request
            .push_header(name, canonical::normalize_header_value(value));
        Ok(())
    }

    /// Set the request body. A missing body is hashed as the empty string.
    pub fn set_body<'a>(&mut self, body: impl Into<Option<&'a str>>) {
        self.set_body_bytes(body.into().unwrap_or_default().as_bytes())
    }

    /// Set the raw request body bytes.
    pub fn set_body_bytes(&mut self, body: &[u8]) {
        self.request.set_payload_hash(hex_sha256(body));
    }

    /// Scope date, formatted as `YYYYMMDD`.
    pub fn date(&self) -> String {
        format_date(self.time)
    }

    /// Lowercased, trimmed path; empty if no url was set.
    pub fn canonical_path(&self) -> String {
        canonical::canonical_path(&self.request)
    }

    /// Query tokens sorted as whole strings; empty if no url was set.
    pub fn canonical_query(&self) -> String {
        canonical::canonical_query(&self.request)
    }

    /// `name:value\n` per header in insertion order, plus a final `\n`.
    pub fn canonical_headers(&self) -> String {
        canonical::canonical_headers(&self.request)
    }

    /// Header names in insertion order joined with `;`.
    pub fn signed_header_names(&self) -> String {
        canonical::signed_header_names(&self.request)
    }

    /// Hex encoded SHA256 of the body.
    pub fn payload_hash(&self) -> &str {
        self.request.payload_hash()
    }

    /// The six line canonical request.
    pub fn canonical_request(&self) -> String {
        canonical::canonical_request(&self.request)
    }

    /// Hex encoded SHA256 of the lowercased canonical request.
    pub fn hashed_canonical_request(&self) -> String {
        canonical::hashed_canonical_request(&self.request)
    }

    /// Request date slot of the string to sign, always empty.
    pub fn request_date(&self) -> &'static str {
        canonical::REQUEST_DATE
    }

    /// `<date>/<service>`
    pub fn credential_scope(&self) -> String {
        canonical::credential_scope(&self.date(), self.request.service_name())
    }

    /// `<api key>/<date>/<service>`
    pub fn credentials(&self) -> String {
        format!(
            "{}/{}/{}",
            self.credential.api_key(),
            self.date(),
            self.request.service_name()
        )
    }

    /// The string to sign.
    pub fn string_to_sign(&self) -> String {
        canonical::string_to_sign(&self.request, &self.date())
    }

    /// Url safe base64 of HMAC-SHA256 over the string to sign, keyed by
    /// the api secret. Padding is kept.
    pub fn signature(&self) -> String {
        base64_url_hmac_sha256(
            self.credential.api_secret().as_bytes(),
            self.string_to_sign().as_bytes(),
        )
    }

    /// Build the authorization value:
    ///
    /// ```text
    /// AWS4-HMAC-SHA256 Credentials=<api key>/<date>/<service> SignedHeaders=<h1;h2> Signature=<signature>
    /// ```
    pub fn create_signature_header(&self) -> String {
        let canonical_request = self.canonical_request();
        debug!("calculated canonical request: {canonical_request:?}");
        let string_to_sign = self.string_to_sign();
        debug!("calculated string to sign: {string_to_sign:?}");

        let signature = self.signature();
        debug!(
            "calculated signature for {}/{}/{}: {}",
            Redact::from(self.credential.api_key()),
            self.date(),
            self.request.service_name(),
            Redact::from(&signature)
        );

        format!(
            "{ALGORITHM} Credentials={} SignedHeaders={} Signature={}",
            self.credentials(),
            self.signed_header_names(),
            signature
        )
    }
}

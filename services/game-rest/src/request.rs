use restsign_core::hash::EMPTY_STRING_SHA256;

/// Request facts collected for signing.
///
/// The descriptor is filled by [`crate::Signer`], which validates every input
/// before it lands here. All canonical artifacts are pure functions of a
/// descriptor, see [`crate::canonical`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Option<String>,
    path: Option<String>,
    query: Option<String>,
    /// Header name to normalized value, in insertion order.
    headers: Vec<(String, String)>,
    /// One entry per `add_header` call, duplicates included.
    signed_headers: Vec<String>,
    service_name: Option<String>,
    payload_hash: Option<String>,
}

impl RequestDescriptor {
    /// Uppercase HTTP method, empty if no url was registered.
    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or_default()
    }

    /// Path part of the registered url.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Raw query part of the registered url, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Headers with their normalized values, in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Header names in the order they were added.
    pub fn signed_headers(&self) -> &[String] {
        &self.signed_headers
    }

    /// Target service name, empty if unset.
    pub fn service_name(&self) -> &str {
        self.service_name.as_deref().unwrap_or_default()
    }

    /// Hex encoded SHA256 of the body.
    ///
    /// Falls back to the digest of the empty string when no body was set.
    pub fn payload_hash(&self) -> &str {
        self.payload_hash.as_deref().unwrap_or(EMPTY_STRING_SHA256)
    }

    pub(crate) fn set_url(&mut self, method: String, path: String, query: String) {
        self.method = Some(method);
        self.path = Some(path);
        self.query = Some(query);
    }

    pub(crate) fn push_header(&mut self, name: &str, value: String) {
        self.signed_headers.push(name.to_string());

        match self.headers.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    pub(crate) fn set_service_name(&mut self, name: String) {
        self.service_name = Some(name);
    }

    pub(crate) fn set_payload_hash(&mut self, hash: String) {
        self.payload_hash = Some(hash);
    }
}

//! Canonicalization of request facts.
//!
//! Everything here is a pure function: string transforms on single request
//! parts, and descriptor level functions that assemble them into the
//! canonical request and the string to sign.

use restsign_core::hash::hex_sha256;

use crate::constants::ALGORITHM;
use crate::RequestDescriptor;

/// Normalize a path: trim surrounding whitespace and lowercase it.
pub fn normalize_path(path: &str) -> String {
    path.trim().to_lowercase()
}

/// Normalize a header value: lowercase, trim and collapse every whitespace
/// run into a single space.
pub fn normalize_header_value(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort `&` separated query tokens as whole strings and join them back.
///
/// ```shell
/// "b=val&a=val2" => "a=val2&b=val"
/// ```
///
/// Tokens are compared byte-wise, keys are not split from values and
/// nothing is decoded or re-encoded.
pub fn sort_query(query: &str) -> String {
    let mut tokens = query.split('&').collect::<Vec<_>>();
    tokens.sort_unstable();

    tokens.join("&")
}

/// Format headers as the canonical headers block.
///
/// ```shell
/// [(a, b), (c, d)] => "a:b\nc:d\n\n"
/// ```
///
/// Insertion order is kept; the block always ends with an empty line.
pub fn format_headers(headers: &[(String, String)]) -> String {
    let mut s = String::with_capacity(64);

    for (name, value) in headers {
        s.push_str(name);
        s.push(':');
        s.push_str(value);
        s.push('\n');
    }
    s.push('\n');

    s
}

/// Join signed header names with `;`, without a trailing separator.
pub fn join_signed_headers(names: &[String]) -> String {
    names.join(";")
}

/// Canonical path of the request, empty if no url was registered.
pub fn canonical_path(req: &RequestDescriptor) -> String {
    req.path().map(normalize_path).unwrap_or_default()
}

/// Canonical query of the request, empty if no url was registered.
pub fn canonical_query(req: &RequestDescriptor) -> String {
    req.query().map(sort_query).unwrap_or_default()
}

/// Canonical headers block of the request.
pub fn canonical_headers(req: &RequestDescriptor) -> String {
    format_headers(req.headers())
}

/// Signed header names of the request.
pub fn signed_header_names(req: &RequestDescriptor) -> String {
    join_signed_headers(req.signed_headers())
}

/// Build the canonical request.
///
/// ```text
/// GET
/// /v1/servicename/action/parameter
/// arg1=1&arg2=2&arg3=3
/// host:localhost
/// x-date:20160501
///
///
/// host;x-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
///
/// The headers block ends with an empty line, so a blank line always sits
/// in front of the signed header names.
pub fn canonical_request(req: &RequestDescriptor) -> String {
    [
        req.method().to_string(),
        canonical_path(req),
        canonical_query(req),
        canonical_headers(req),
        signed_header_names(req),
        req.payload_hash().to_string(),
    ]
    .join("\n")
}

/// Hex encoded SHA256 of the lowercased canonical request.
///
/// The whole canonical request is case folded before hashing, the method
/// included.
pub fn hashed_canonical_request(req: &RequestDescriptor) -> String {
    hex_sha256(canonical_request(req).to_lowercase().as_bytes())
}

/// Credential scope: `<date>/<service>`.
pub fn credential_scope(date: &str, service: &str) -> String {
    format!("{date}/{service}")
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// <request date, always empty>
/// 20160619/scoreboard
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(req: &RequestDescriptor, date: &str) -> String {
    format!(
        "{ALGORITHM}\n{}\n{}\n{}",
        REQUEST_DATE,
        credential_scope(date, req.service_name()),
        hashed_canonical_request(req)
    )
}

/// The request date slot of the string to sign is never populated.
pub const REQUEST_DATE: &str = "";

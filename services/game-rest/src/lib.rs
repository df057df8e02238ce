//! Signer for game REST services.
//!
//! Requests are signed with an HMAC-SHA256 scheme modeled on AWS SigV4:
//! a canonical request is built from method, path, query, headers and body
//! digest, hashed, wrapped into a string to sign with a `<date>/<service>`
//! credential scope and keyed with the api secret. The result goes into the
//! `Authorization` header:
//!
//! ```text
//! AWS4-HMAC-SHA256 Credentials=<api key>/<date>/<service> SignedHeaders=<h1;h2> Signature=<base64url>
//! ```
//!
//! Use [`Signer`] to register request facts by hand, or [`RequestSigner`]
//! to sign `http::request::Parts` directly.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{
    RESTSIGN_API_KEY, RESTSIGN_API_SECRET, RESTSIGN_APP_ID, RESTSIGN_CLIENT_ID,
    RESTSIGN_SCOPE_DATE, RESTSIGN_SERVICE_NAME,
};

pub mod canonical;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod request;
pub use request::RequestDescriptor;

mod signer;
pub use signer::Signer;

mod sign_request;
pub use sign_request::RequestSigner;

/// Algorithm tag at the head of every authorization value.
pub const ALGORITHM: &str = constants::ALGORITHM;

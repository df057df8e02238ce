//! Core components for signing game REST API requests.
//!
//! This crate provides the building blocks shared by the restsign service
//! crates:
//!
//! - [`Error`] and [`ErrorKind`]: the validation taxonomy every signer reports.
//! - [`hash`]: SHA-256 digests, HMAC-SHA256 and url safe base64.
//! - [`time`]: date helpers used to build credential scopes.
//! - [`Env`]: environment access, with [`OsEnv`] and [`StaticEnv`].
//! - [`utils`]: data redaction for logs and debug output.
//!
//! ## Example
//!
//! ```
//! use restsign_core::hash::{base64_url_hmac_sha256, hex_sha256};
//!
//! let payload_hash = hex_sha256(b"");
//! assert_eq!(payload_hash.len(), 64);
//!
//! let signature = base64_url_hmac_sha256(b"secret", payload_hash.as_bytes());
//! assert!(!signature.contains('+') && !signature.contains('/'));
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

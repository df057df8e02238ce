use std::fmt;
use thiserror::Error;

/// The error type for restsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    field: Option<&'static str>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A credential value is missing or empty.
    MissingCredential,

    /// An argument passed to a signer mutator is missing or empty.
    InvalidArgument,

    /// The url carries a scheme, a host or more than one query part.
    MalformedUrl,

    /// Configuration error (unparseable values)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the name of the offending field or argument.
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the name of the field or argument this error is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    /// Check if this error was raised while validating caller input.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingCredential | ErrorKind::InvalidArgument | ErrorKind::MalformedUrl
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a missing credential error naming the field.
    pub fn missing_credential(field: &'static str) -> Self {
        Self::new(
            ErrorKind::MissingCredential,
            format!("credential `{field}` is missing or empty"),
        )
        .with_field(field)
    }

    /// Create an invalid argument error naming the argument.
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message).with_field(argument)
    }

    /// Create a malformed url error
    pub fn malformed_url(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedUrl, message).with_field("url")
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingCredential => write!(f, "missing credential"),
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::MalformedUrl => write!(f, "malformed url"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::new(ErrorKind::InvalidArgument, err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::new(ErrorKind::InvalidArgument, err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

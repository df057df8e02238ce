//! Utility functions and types.

use std::fmt;

/// Redacts a secret so it can be logged or debug printed.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 characters is fully replaced by `***`.
/// - Otherwise only the first three and last three characters are kept.
///
/// Keeping both ends lets users tell two keys apart without leaking them.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Redact<'_> {
    fn write_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self.0.chars().count();
        if length == 0 {
            return f.write_str("EMPTY");
        }
        if length < 12 {
            return f.write_str("***");
        }

        let head: String = self.0.chars().take(3).collect();
        let tail: String = self.0.chars().skip(length - 3).collect();
        write!(f, "{head}***{tail}")
    }
}

impl fmt::Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Display for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

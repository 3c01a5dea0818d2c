//! Greeting value object.

use std::fmt;

/// Text returned by the remote greeting service.
///
/// Opaque: never trimmed, escaped or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    text: String,
}

impl Greeting {
    /// Wraps greeting text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns greeting as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

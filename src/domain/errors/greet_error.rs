//! Remote greeting call error types.

use thiserror::Error;

/// Failure of a call to the remote greeting service.
///
/// Every variant is a remote call failure; the variant only records the cause.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum GreetError {
    #[error("network error during greeting call: {message}")]
    Network { message: String },

    #[error("greeting call timed out")]
    Timeout,

    #[error("greeting service reported a fault: {message}")]
    RemoteFault {
        status: Option<u16>,
        message: String,
    },

    #[error("malformed greeting response: {message}")]
    InvalidResponse { message: String },

    #[error("unexpected greeting failure: {message}")]
    Unexpected { message: String },
}

impl GreetError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates remote fault error.
    #[must_use]
    pub fn remote_fault(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::RemoteFault {
            status,
            message: message.into(),
        }
    }

    /// Creates invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout)
    }

    /// Returns a short message suitable for the status line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { message } => format!("Network error: {message}"),
            Self::Timeout => "The greeting service did not answer in time.".to_string(),
            Self::RemoteFault {
                status: Some(status),
                message,
            } => format!("Service error ({status}): {message}"),
            Self::RemoteFault {
                status: None,
                message,
            } => format!("Service error: {message}"),
            Self::InvalidResponse { .. } | Self::Unexpected { .. } => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failures_are_network_errors() {
        assert!(GreetError::network("refused").is_network_error());
        assert!(GreetError::Timeout.is_network_error());
    }

    #[test]
    fn test_remote_fault_is_not_network_error() {
        let error = GreetError::remote_fault(Some(400), "bad name");
        assert!(!error.is_network_error());
        assert_eq!(error.user_message(), "Service error (400): bad name");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GreetError::invalid_response("missing field").to_string(),
            "malformed greeting response: missing field"
        );
    }
}

use thiserror::Error;

/// Machine-readable error taxonomy surfaced at the service boundary.
///
/// Codes are independent of transport status codes; the HTTP layer decides
/// how each one maps to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unexpected store or infrastructure failure.
    Internal,
    /// No row for the given key.
    CredentialNotFound,
    /// Credential check failed, for any reason.
    AuthFailed,
    /// Registration conflict.
    EmailAlreadyExists,
}

impl ErrorCode {
    /// The wire-level code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Internal => "internal",
            ErrorCode::CredentialNotFound => "credential_not_found",
            ErrorCode::AuthFailed => "auth_failed",
            ErrorCode::EmailAlreadyExists => "email_already_exists",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error: a code, a human-readable message, and an optional wrapped
/// cause.
///
/// Higher layers may wrap a lower-level error for diagnostic logging while
/// exposing only the outer code and message to the caller; the cause stays
/// reachable through `std::error::Error::source`.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct CredentialError {
    code: ErrorCode,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl CredentialError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Wraps `source` into a new error with the provided code and message.
    pub fn wrap(
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_code_and_message_only() {
        let err = CredentialError::new(ErrorCode::CredentialNotFound, "Credential not found");
        assert_eq!(err.to_string(), "credential_not_found: Credential not found");
    }

    #[test]
    fn wrapped_cause_is_reachable_through_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = CredentialError::wrap(io, ErrorCode::Internal, "Register failed");

        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.to_string(), "internal: Register failed");

        let source = std::error::Error::source(&err).expect("source must be retained");
        assert!(source.to_string().contains("connection refused"));
    }

    #[test]
    fn codes_match_the_wire_taxonomy() {
        assert_eq!(ErrorCode::Internal.as_str(), "internal");
        assert_eq!(ErrorCode::CredentialNotFound.as_str(), "credential_not_found");
        assert_eq!(ErrorCode::AuthFailed.as_str(), "auth_failed");
        assert_eq!(ErrorCode::EmailAlreadyExists.as_str(), "email_already_exists");
    }
}

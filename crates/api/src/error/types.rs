//! Error type definitions for signature-scheme operations

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Primary error type for nhdss operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Domain parameters could not be generated within the attempt budget
    #[error("domain generation failed in {context}: {message}")]
    DomainGeneration {
        context: &'static str,
        message: String,
    },

    /// A modular inverse does not exist
    #[error("no modular inverse exists in {context}")]
    NoInverse { context: &'static str },

    /// Signing kept hitting degenerate nonces
    #[error("signing exhausted in {context} after {attempts} attempts")]
    SigningExhausted {
        context: &'static str,
        attempts: usize,
    },

    /// Malformed, out-of-range or out-of-order input
    #[error("invalid input in {context}: {message}")]
    InvalidInput {
        context: &'static str,
        message: String,
    },

    /// Unknown session token
    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for nhdss operations
pub type Result<T> = core::result::Result<T, Error>;

/// Stable, machine-readable error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    DomainGeneration,
    NoInverse,
    SigningExhausted,
    InvalidInput,
    SessionNotFound,
    Other,
}

impl ErrorKind {
    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DomainGeneration => "domain_generation",
            Self::NoInverse => "no_inverse",
            Self::SigningExhausted => "signing_exhausted",
            Self::InvalidInput => "invalid_input",
            Self::SessionNotFound => "session_not_found",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Shorthand to create an `InvalidInput` error
    pub fn invalid_input(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `Other` error
    pub fn other(context: &'static str, message: impl Into<String>) -> Self {
        Self::Other {
            context,
            message: message.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DomainGeneration { .. } => ErrorKind::DomainGeneration,
            Self::NoInverse { .. } => ErrorKind::NoInverse,
            Self::SigningExhausted { .. } => ErrorKind::SigningExhausted,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::SessionNotFound { .. } => ErrorKind::SessionNotFound,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DomainGeneration { message, .. } => Self::DomainGeneration { context, message },
            Self::NoInverse { .. } => Self::NoInverse { context },
            Self::SigningExhausted { attempts, .. } => Self::SigningExhausted { context, attempts },
            Self::InvalidInput { message, .. } => Self::InvalidInput { context, message },
            Self::SessionNotFound { id } => Self::SessionNotFound { id },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_snake_case() {
        let err = Error::SigningExhausted {
            context: "sign",
            attempts: 100,
        };
        assert_eq!(err.kind(), ErrorKind::SigningExhausted);
        assert_eq!(err.kind().to_string(), "signing_exhausted");
        assert_eq!(
            Error::SessionNotFound { id: "ff_00".into() }.kind().as_str(),
            "session_not_found"
        );
    }

    #[test]
    fn with_context_keeps_details() {
        let err = Error::invalid_input("parse", "not a number").with_context("verify");
        assert_eq!(
            err,
            Error::InvalidInput {
                context: "verify",
                message: "not a number".into()
            }
        );
        assert!(err.to_string().contains("not a number"));
    }
}

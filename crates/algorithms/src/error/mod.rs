//! Error handling for arithmetic primitives

use std::borrow::Cow;
use std::fmt;

use nhdss_api::{Error as CoreError, Result as CoreResult};

/// The error type for arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// A modular inverse does not exist
    NoInverse {
        /// Operation that needed the inverse
        context: &'static str,
    },

    /// Prime or domain search ran out of attempts
    DomainGeneration {
        /// Search that failed
        context: &'static str,
        /// Additional details about the failure
        details: String,
    },

    /// Processing error during an arithmetic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for arithmetic primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::NoInverse { context } => write!(f, "No modular inverse in {}", context),
            Error::DomainGeneration { context, details } => {
                write!(f, "Domain generation failed in {}: {}", context, details)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// The substrate in nhdss-common reports through the API error type
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoInverse { context } => Error::NoInverse { context },
            CoreError::InvalidInput { context, message } => Error::param(context, message),
            CoreError::DomainGeneration { context, message } => Error::DomainGeneration {
                context,
                details: message,
            },
            other => Error::Processing {
                operation: "arithmetic",
                details: other.to_string(),
            },
        }
    }
}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidInput {
                context: "parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::NoInverse { context } => CoreError::NoInverse { context },
            Error::DomainGeneration { context, details } => CoreError::DomainGeneration {
                context,
                message: details,
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details,
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;

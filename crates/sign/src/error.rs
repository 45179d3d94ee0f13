//! Error types for the signature crate

use core::fmt;

use nhdss_api::Error as CoreError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid parameter
    InvalidParameter(String),

    /// Invalid key
    InvalidKey(String),

    /// Malformed signature (out-of-range component, point off the curve)
    InvalidSignature(String),

    /// Key material could not be sampled
    KeyGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// A nonce pair produced a degenerate value; the caller should resample
    DegenerateNonce(&'static str),

    /// Every nonce pair in the budget was degenerate
    SigningExhausted {
        algorithm: &'static str,
        attempts: usize,
    },

    /// Operation requested in the wrong transcript phase
    OutOfOrder {
        operation: &'static str,
        phase: &'static str,
    },

    /// Error from the arithmetic primitives
    Algorithm(nhdss_algorithms::Error),

    /// Error from the shared substrate
    Core(CoreError),
}

impl Error {
    /// Whether signing should draw fresh nonces and try again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::DegenerateNonce(_) | Error::Algorithm(nhdss_algorithms::Error::NoInverse { .. })
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::InvalidSignature(msg) => write!(f, "Invalid signature: {}", msg),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "{} key generation failed: {}", algorithm, details)
            }
            Error::DegenerateNonce(what) => write!(f, "Degenerate nonce: {}", what),
            Error::SigningExhausted {
                algorithm,
                attempts,
            } => write!(
                f,
                "{} signing gave up after {} nonce pairs",
                algorithm, attempts
            ),
            Error::OutOfOrder { operation, phase } => {
                write!(f, "Cannot {} in phase {}", operation, phase)
            }
            Error::Algorithm(err) => write!(f, "Algorithm error: {}", err),
            Error::Core(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

// Convert from algorithms::error::Error
impl From<nhdss_algorithms::Error> for Error {
    fn from(err: nhdss_algorithms::Error) -> Self {
        Error::Algorithm(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoInverse { context } => {
                Error::Algorithm(nhdss_algorithms::Error::NoInverse { context })
            }
            other => Error::Core(other),
        }
    }
}

// Convert to the API error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidParameter(message) => CoreError::InvalidInput {
                context: "parameter",
                message,
            },
            Error::InvalidKey(message) => CoreError::InvalidInput {
                context: "key",
                message,
            },
            Error::InvalidSignature(message) => CoreError::InvalidInput {
                context: "signature",
                message,
            },
            Error::KeyGeneration { algorithm, details } => CoreError::DomainGeneration {
                context: algorithm,
                message: details,
            },
            Error::DegenerateNonce(what) => CoreError::NoInverse { context: what },
            Error::SigningExhausted {
                algorithm,
                attempts,
            } => CoreError::SigningExhausted {
                context: algorithm,
                attempts,
            },
            Error::OutOfOrder { operation, phase } => CoreError::InvalidInput {
                context: operation,
                message: format!("not allowed in phase {}", phase),
            },
            Error::Algorithm(err) => err.into(),
            Error::Core(err) => err,
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

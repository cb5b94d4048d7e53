//! Error handling types for lexbridge.
//!
//! Every pipeline stage either contributes well-formed output or fails the
//! whole highlighting request with one of these errors; there are no
//! recover-and-continue paths.

use thiserror::Error;

/// Error type for highlighting requests.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A descriptor's range is inconsistent with the document snapshot:
    /// end precedes start, a line number is outside the snapshot, or a
    /// terminal-line column exceeds the line's length.
    #[error("Malformed range: {message}")]
    MalformedRange { message: String },

    /// A label, type name, or modifier name is not present in the active
    /// label table or legend. Signals version skew between the external
    /// analyzer's vocabulary and the registered legend.
    #[error("Unknown classification: {name}")]
    UnknownClassification { name: String },

    /// The external analyzer process exited abnormally or produced
    /// unparsable output.
    #[error("Analyzer failure: {message}")]
    AdapterFailure { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for highlighting operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Helper functions for common error patterns
impl BridgeError {
    /// Create a malformed range error
    pub fn malformed_range(message: impl Into<String>) -> Self {
        BridgeError::MalformedRange {
            message: message.into(),
        }
    }

    /// Create an unknown classification error
    pub fn unknown_classification(name: impl Into<String>) -> Self {
        BridgeError::UnknownClassification { name: name.into() }
    }

    /// Create an adapter failure error
    pub fn adapter_failure(message: impl Into<String>) -> Self {
        BridgeError::AdapterFailure {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BridgeError::malformed_range("end (1,2) precedes start (3,4)");
        assert_eq!(
            err.to_string(),
            "Malformed range: end (1,2) precedes start (3,4)"
        );

        let err = BridgeError::unknown_classification("FROB");
        assert_eq!(err.to_string(), "Unknown classification: FROB");
    }
}

//! Error types for Flowlens

use std::fmt;

/// Unified error type for all Flowlens operations
#[derive(Debug)]
pub enum FlowlensError {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Protocol error (malformed or hostile traffic)
    Protocol(String),

    /// Allocation or resource-exhaustion failure
    ResourceExhausted(String),

    /// Other error
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for FlowlensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowlensError::Io(e) => write!(f, "IO error: {}", e),
            FlowlensError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FlowlensError::Protocol(msg) => write!(f, "Protocol error: {}", msg),
            FlowlensError::ResourceExhausted(msg) => write!(f, "Resource exhausted: {}", msg),
            FlowlensError::Other(e) => write!(f, "Error: {}", e),
        }
    }
}

impl std::error::Error for FlowlensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowlensError::Io(e) => Some(e),
            FlowlensError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlowlensError {
    fn from(err: std::io::Error) -> Self {
        FlowlensError::Io(err)
    }
}

/// Result type for Flowlens operations
pub type FlowlensResult<T> = Result<T, FlowlensError>;

//! SSH decode errors.
//!
//! Every variant except [`DecodeError::ResourceExhausted`] is a permanent
//! protocol failure for the connection: binary length-prefixed framing
//! offers no safe resynchronization point after a parse error, so the
//! decoder reports once and the caller abandons inspection of that flow.

use flowlens_platform::FlowlensError;
use std::fmt;

/// Errors reported by the SSH handshake decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The identification line does not start with `SSH-` or lacks the
    /// second `-` delimiting the protocol version.
    MalformedBanner,

    /// The identification line exceeds the 255-byte cap of RFC 4253
    /// Section 4.2 (including the terminator).
    OversizeBanner,

    /// A binary record header declared a packet length below 2, which is
    /// structurally impossible (the length covers at least the
    /// padding-length byte and the message code).
    MalformedHeader,

    /// An allocation failed while storing decoder state. Already-persisted
    /// state is left intact.
    ResourceExhausted,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MalformedBanner => write!(f, "malformed SSH identification line"),
            DecodeError::OversizeBanner => {
                write!(f, "SSH identification line longer than 255 bytes")
            }
            DecodeError::MalformedHeader => {
                write!(f, "SSH record header with invalid packet length")
            }
            DecodeError::ResourceExhausted => {
                write!(f, "allocation failed while storing SSH decoder state")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<DecodeError> for FlowlensError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::ResourceExhausted => {
                FlowlensError::ResourceExhausted(err.to_string())
            }
            _ => FlowlensError::Protocol(err.to_string()),
        }
    }
}

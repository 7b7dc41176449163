//! Passive SSH handshake decoding (RFC 4253).
//!
//! This module turns the raw, arbitrarily fragmented byte streams of an
//! observed SSH connection into structured handshake metadata: the
//! protocol and software versions from each side's identification line,
//! and the point at which encryption begins (SSH_MSG_NEWKEYS), after which
//! nothing more can be inspected.
//!
//! # Architecture
//!
//! The decoder is layered, leaves first:
//!
//! 1. **Banner** ([`version`]) - the one-time identification line
//!    (RFC 4253 Section 4.2)
//! 2. **Record framing** ([`record`]) - the 6-byte binary record prefix
//!    (RFC 4253 Section 6); only length framing and the message code are
//!    examined, never the payload
//! 3. **Message codes** ([`message`]) - the handshake-range message
//!    numbers, for diagnostics and terminal detection
//! 4. **State** ([`state`]) - the per-direction resumption state and the
//!    per-connection container
//! 5. **Driver** ([`decoder`]) - the per-call entry point stitching the
//!    above together across chunk boundaries
//!
//! # Security Considerations
//!
//! The input is adversarial: a scanner must not crash, leak memory, or
//! misclassify on malformed or hostile traffic.
//!
//! - **Input Validation**: the identification line is capped at 255 bytes
//!   and record headers with impossible lengths are rejected
//! - **Bounded State**: between calls the decoder retains at most the
//!   version strings, five staged header bytes, and one counter per
//!   direction
//! - **No Decryption**: all bytes after NEWKEYS are discarded unexamined
//! - **No Unsafe Code**: pure Rust implementation without `unsafe`
//!
//! # Example
//!
//! ```rust
//! use flowlens_platform::Direction;
//! use flowlens_proto::ssh::{self, ConnectionState};
//!
//! let mut conn = ConnectionState::new();
//! ssh::decode(&mut conn, Direction::ToServer, b"SSH-2.0-OpenSSH_8.9\r\n").unwrap();
//!
//! assert_eq!(conn.client().protocol_version(), Some("2.0"));
//! assert_eq!(conn.client().software_version(), Some("OpenSSH_8.9"));
//! ```
//!
//! # References
//!
//! - [RFC 4253](https://datatracker.ietf.org/doc/html/rfc4253) - SSH Transport Layer Protocol

pub mod decoder;
pub mod error;
pub mod message;
pub mod record;
pub mod state;
pub mod version;

// Re-export main types
pub use decoder::{decode, SshDecoder};
pub use error::DecodeError;
pub use message::MessageType;
pub use record::{RecordHeader, RECORD_HEADER_LEN};
pub use state::{ConnectionState, DirectionHeader};
pub use version::{Banner, MAX_BANNER_LEN};

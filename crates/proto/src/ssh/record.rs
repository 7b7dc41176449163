//! SSH binary record framing (RFC 4253 Section 6).
//!
//! # Record Format
//!
//! ```text
//! uint32    packet_length
//! byte      padding_length
//! byte      message code (first payload byte)
//! byte[..]  remaining payload and padding
//! ```
//!
//! A passive decoder only needs the first six bytes of each record: the
//! length field tells it how many body bytes to skip before the next
//! header, and the message code tells it when key exchange completes
//! (SSH_MSG_NEWKEYS). The body is never inspected or retained.
//!
//! `packet_length` counts everything after the length field itself, so it
//! includes the padding-length byte and the message code already consumed
//! with the header; a value below 2 is structurally impossible.
//!
//! # Example
//!
//! ```rust
//! use flowlens_proto::ssh::RecordHeader;
//!
//! let header = RecordHeader::parse([0x00, 0x00, 0x00, 0x03, 0x01, 0x15]).unwrap();
//! assert_eq!(header.packet_length(), 3);
//! assert_eq!(header.body_len(), 1);
//! assert!(header.is_final()); // 0x15 = 21 = SSH_MSG_NEWKEYS
//! ```

use crate::ssh::error::DecodeError;
use crate::ssh::message::MessageType;
use bytes::Buf;

/// Length of the record header prefix the decoder examines: 4 bytes packet
/// length, 1 byte padding length, 1 byte message code.
pub const RECORD_HEADER_LEN: usize = 6;

/// The fixed-size prefix of one SSH binary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    packet_length: u32,
    padding_length: u8,
    message_code: u8,
}

impl RecordHeader {
    /// Interprets six contiguous bytes as a record header.
    ///
    /// Callers assemble exactly [`RECORD_HEADER_LEN`] bytes (possibly
    /// staged across several calls) before invoking this; the fixed-size
    /// argument makes a short read impossible.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedHeader`] if the declared packet
    /// length is below 2.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowlens_proto::ssh::RecordHeader;
    ///
    /// let header = RecordHeader::parse([0x00, 0x00, 0x00, 0x0c, 0x0a, 0x14]).unwrap();
    /// assert_eq!(header.packet_length(), 12);
    /// assert_eq!(header.padding_length(), 10);
    /// assert_eq!(header.message_code(), 20);
    /// ```
    pub fn parse(input: [u8; RECORD_HEADER_LEN]) -> Result<Self, DecodeError> {
        let mut buf = &input[..];
        let packet_length = buf.get_u32();
        let padding_length = buf.get_u8();
        let message_code = buf.get_u8();

        if packet_length < 2 {
            return Err(DecodeError::MalformedHeader);
        }

        Ok(Self {
            packet_length,
            padding_length,
            message_code,
        })
    }

    /// Returns the declared packet length (big-endian uint32 on the wire).
    pub fn packet_length(&self) -> u32 {
        self.packet_length
    }

    /// Returns the padding length byte.
    pub fn padding_length(&self) -> u8 {
        self.padding_length
    }

    /// Returns the raw message code byte.
    pub fn message_code(&self) -> u8 {
        self.message_code
    }

    /// Returns the named message type, if the code is a known handshake
    /// message.
    pub fn message(&self) -> Option<MessageType> {
        MessageType::from_u8(self.message_code)
    }

    /// Returns how many record body bytes (remaining payload plus padding)
    /// follow the header on the wire.
    ///
    /// The padding-length byte and the message code are already counted in
    /// `packet_length`, hence the subtraction of 2.
    pub fn body_len(&self) -> u32 {
        self.packet_length - 2
    }

    /// Returns true if this record carries SSH_MSG_NEWKEYS, the last
    /// record exchanged before encryption begins.
    pub fn is_final(&self) -> bool {
        self.message_code == MessageType::NewKeys as u8
    }
}

impl std::fmt::Display for RecordHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "record len {} msg {}", self.packet_length, msg),
            None => write!(f, "record len {} msg {}", self.packet_length, self.message_code),
        }
    }
}

//! SSH handshake message codes (RFC 4253).
//!
//! The decoder stops at SSH_MSG_NEWKEYS, so only the message numbers that
//! can appear on the wire before encryption begins are named here:
//! transport-layer generic messages (1-19), algorithm negotiation (20-29),
//! and key-exchange-method messages (30-49). Unknown codes are framed and
//! skipped without error; naming them is purely diagnostic.
//!
//! # Example
//!
//! ```rust
//! use flowlens_proto::ssh::MessageType;
//!
//! let msg_type = MessageType::NewKeys;
//! assert_eq!(msg_type as u8, 21);
//! ```

/// SSH handshake message types as defined in RFC 4253 Section 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    // Transport layer generic (1-19)
    /// Disconnect message - terminates the connection.
    Disconnect = 1,
    /// Ignore message - can be used for padding or keep-alive.
    Ignore = 2,
    /// Unimplemented message - response to unknown message type.
    Unimplemented = 3,
    /// Debug message - debugging information.
    Debug = 4,
    /// Service request - request a service (e.g., "ssh-userauth").
    ServiceRequest = 5,
    /// Service accept - service request accepted.
    ServiceAccept = 6,

    // Algorithm negotiation (20-29)
    /// Key exchange init - algorithm negotiation.
    KexInit = 20,
    /// New keys - everything after this record is encrypted.
    NewKeys = 21,

    // Key exchange method specific (30-49)
    /// Diffie-Hellman/ECDH key exchange init (both use same message number).
    KexdhInit = 30,
    /// Diffie-Hellman/ECDH key exchange reply (both use same message number).
    KexdhReply = 31,
}

impl MessageType {
    /// Converts a byte to a message type.
    ///
    /// # Returns
    ///
    /// Some(MessageType) for a named handshake code, None otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowlens_proto::ssh::MessageType;
    ///
    /// assert_eq!(MessageType::from_u8(21), Some(MessageType::NewKeys));
    /// assert_eq!(MessageType::from_u8(255), None);
    /// ```
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(MessageType::Disconnect),
            2 => Some(MessageType::Ignore),
            3 => Some(MessageType::Unimplemented),
            4 => Some(MessageType::Debug),
            5 => Some(MessageType::ServiceRequest),
            6 => Some(MessageType::ServiceAccept),
            20 => Some(MessageType::KexInit),
            21 => Some(MessageType::NewKeys),
            30 => Some(MessageType::KexdhInit),
            31 => Some(MessageType::KexdhReply),
            _ => None,
        }
    }

    /// Returns the message type name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowlens_proto::ssh::MessageType;
    ///
    /// assert_eq!(MessageType::NewKeys.name(), "SSH_MSG_NEWKEYS");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            MessageType::Disconnect => "SSH_MSG_DISCONNECT",
            MessageType::Ignore => "SSH_MSG_IGNORE",
            MessageType::Unimplemented => "SSH_MSG_UNIMPLEMENTED",
            MessageType::Debug => "SSH_MSG_DEBUG",
            MessageType::ServiceRequest => "SSH_MSG_SERVICE_REQUEST",
            MessageType::ServiceAccept => "SSH_MSG_SERVICE_ACCEPT",
            MessageType::KexInit => "SSH_MSG_KEXINIT",
            MessageType::NewKeys => "SSH_MSG_NEWKEYS",
            MessageType::KexdhInit => "SSH_MSG_KEXDH_INIT",
            MessageType::KexdhReply => "SSH_MSG_KEXDH_REPLY",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_conversion() {
        assert_eq!(MessageType::from_u8(20), Some(MessageType::KexInit));
        assert_eq!(MessageType::from_u8(21), Some(MessageType::NewKeys));
        assert_eq!(MessageType::from_u8(255), None);
    }

    #[test]
    fn test_message_type_values() {
        assert_eq!(MessageType::Disconnect as u8, 1);
        assert_eq!(MessageType::KexInit as u8, 20);
        assert_eq!(MessageType::NewKeys as u8, 21);
        assert_eq!(MessageType::KexdhReply as u8, 31);
    }

    #[test]
    fn test_message_type_name() {
        assert_eq!(MessageType::KexInit.name(), "SSH_MSG_KEXINIT");
        assert_eq!(MessageType::NewKeys.name(), "SSH_MSG_NEWKEYS");
    }

    #[test]
    fn test_message_type_display() {
        let msg = MessageType::NewKeys;
        assert_eq!(format!("{}", msg), "SSH_MSG_NEWKEYS(21)");
    }
}

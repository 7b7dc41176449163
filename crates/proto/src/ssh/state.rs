//! Per-connection SSH decoder state.
//!
//! The decoder is a pure function of (state, chunk); everything it needs to
//! remember between calls lives here. Per direction that is deliberately
//! tiny: a flag and two version strings once the banner is parsed, at most
//! five staged header bytes, and a count of record body bytes still to
//! skip. The connection-wide [`ConnectionState`] adds only the terminal
//! `handshake_done` flag, set when either direction frames SSH_MSG_NEWKEYS.
//!
//! # Lifecycle
//!
//! A `ConnectionState` is created when protocol detection routes a flow to
//! the SSH decoder and dropped when the flow is torn down. It is exclusively
//! owned by that flow; the flow layer serializes calls for the connection's
//! two directions.
//!
//! # Example
//!
//! ```rust
//! use flowlens_platform::Direction;
//! use flowlens_proto::ssh::ConnectionState;
//!
//! let conn = ConnectionState::new();
//! assert!(!conn.handshake_done());
//! assert!(!conn.header(Direction::ToServer).banner_parsed());
//! ```

use crate::ssh::record::{RecordHeader, RECORD_HEADER_LEN};
use crate::ssh::version::Banner;
use flowlens_platform::Direction;

/// Resumption state for one direction of a connection.
///
/// # Invariants
///
/// - `protocol_version` and `software_version` are `Some` iff
///   `banner_parsed` is true, and never change afterward.
/// - `stage_len < RECORD_HEADER_LEN` whenever control returns to the
///   caller; a full stage is consumed atomically within the call.
/// - Every consumed byte is accounted by exactly one of banner
///   consumption, stage growth, or `record_body_remaining` decrease.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionHeader {
    /// True once the identification line is fully parsed; irreversible.
    banner_parsed: bool,
    /// Protocol version from the banner (e.g., "2.0").
    protocol_version: Option<String>,
    /// Software version from the banner; may be empty.
    software_version: Option<String>,
    /// Staging buffer for a record header split across calls.
    stage: [u8; RECORD_HEADER_LEN],
    /// Number of valid bytes in `stage`.
    stage_len: usize,
    /// Body bytes of the current record not yet observed; 0 means the next
    /// byte starts a new record header.
    record_body_remaining: u32,
    /// The most recently framed record header (diagnostic).
    last_header: Option<RecordHeader>,
}

impl DirectionHeader {
    /// Creates empty state for one direction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the identification line has been parsed.
    pub fn banner_parsed(&self) -> bool {
        self.banner_parsed
    }

    /// Returns the banner's protocol version, once parsed.
    pub fn protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    /// Returns the banner's software version, once parsed.
    ///
    /// `Some("")` if the banner supplied no software field.
    pub fn software_version(&self) -> Option<&str> {
        self.software_version.as_deref()
    }

    /// Returns how many bytes of the current record's body are still
    /// unseen.
    pub fn record_body_remaining(&self) -> u32 {
        self.record_body_remaining
    }

    /// Returns the most recently framed record header, if any.
    pub fn last_header(&self) -> Option<&RecordHeader> {
        self.last_header.as_ref()
    }

    /// Stores the parsed banner fields. Called exactly once per direction.
    pub(crate) fn set_banner(&mut self, banner: Banner) {
        debug_assert!(!self.banner_parsed);
        let (protocol_version, software_version) = banner.into_parts();
        self.protocol_version = Some(protocol_version);
        self.software_version = Some(software_version);
        self.banner_parsed = true;
    }

    /// Appends bytes from `input` to the header stage, up to capacity.
    ///
    /// Returns how many bytes were taken.
    pub(crate) fn stage_push(&mut self, input: &[u8]) -> usize {
        let take = input.len().min(RECORD_HEADER_LEN - self.stage_len);
        self.stage[self.stage_len..self.stage_len + take].copy_from_slice(&input[..take]);
        self.stage_len += take;
        take
    }

    /// Returns the staged header bytes once all six have arrived.
    pub(crate) fn staged(&self) -> Option<[u8; RECORD_HEADER_LEN]> {
        (self.stage_len == RECORD_HEADER_LEN).then_some(self.stage)
    }

    /// Returns true while no header bytes are staged.
    pub(crate) fn stage_is_empty(&self) -> bool {
        self.stage_len == 0
    }

    /// Begins a freshly framed record: clears the stage and arms the body
    /// skip counter.
    pub(crate) fn start_record(&mut self, header: RecordHeader) {
        debug_assert_eq!(self.stage_len, RECORD_HEADER_LEN);
        self.stage_len = 0;
        self.record_body_remaining = header.body_len();
        self.last_header = Some(header);
    }

    /// Accounts `n` observed bytes of the current record's body.
    pub(crate) fn skip_body(&mut self, n: u32) {
        debug_assert!(n <= self.record_body_remaining);
        self.record_body_remaining -= n;
    }
}

/// Decoder state for one SSH connection: one [`DirectionHeader`] per
/// direction plus the connection-wide terminal flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    client: DirectionHeader,
    server: DirectionHeader,
    handshake_done: bool,
}

impl ConnectionState {
    /// Creates decoder state for a newly detected SSH flow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowlens_proto::ssh::ConnectionState;
    ///
    /// let conn = ConnectionState::new();
    /// assert!(!conn.handshake_done());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the client-to-server direction state.
    pub fn client(&self) -> &DirectionHeader {
        &self.client
    }

    /// Returns the server-to-client direction state.
    pub fn server(&self) -> &DirectionHeader {
        &self.server
    }

    /// Returns the state for the given direction.
    pub fn header(&self, direction: Direction) -> &DirectionHeader {
        match direction {
            Direction::ToServer => &self.client,
            Direction::ToClient => &self.server,
        }
    }

    /// Returns mutable state for the given direction.
    pub(crate) fn header_mut(&mut self, direction: Direction) -> &mut DirectionHeader {
        match direction {
            Direction::ToServer => &mut self.client,
            Direction::ToClient => &mut self.server,
        }
    }

    /// Returns true once either direction has framed SSH_MSG_NEWKEYS.
    ///
    /// Monotonic: once set, all further bytes on both directions are
    /// ciphertext and the decoder ignores them.
    pub fn handshake_done(&self) -> bool {
        self.handshake_done
    }

    /// Marks the handshake complete for the whole connection.
    pub(crate) fn finish_handshake(&mut self) {
        self.handshake_done = true;
    }
}

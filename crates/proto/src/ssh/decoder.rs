//! Incremental SSH handshake decoder.
//!
//! This is the per-call entry point of the decoder. The stream-reassembly
//! layer hands it in-order byte chunks of unpredictable size (down to one
//! byte), once each, per direction; the decoder reconstructs the
//! identification banner and the binary record framing purely from those
//! deltas plus the small resumption state in [`ConnectionState`].
//!
//! Per direction the machine advances through three phases:
//!
//! 1. **Terminal** - once SSH_MSG_NEWKEYS has been framed on either
//!    direction, every chunk is ciphertext and is discarded unexamined.
//! 2. **AwaitingBanner** - the identification line is attempted only when
//!    the current chunk contains a line terminator; the stream-reassembly
//!    collaborator is assumed to re-present an unterminated partial line on
//!    a later call.
//! 3. **RecordSync** - a loop that consumes the chunk to exhaustion,
//!    alternating between skipping the current record's body and staging
//!    the next six header bytes (the only state carried across calls).
//!
//! Any parse failure is permanent for the connection: binary
//! length-prefixed framing cannot be resynchronized safely, so the caller
//! abandons inspection of the flow.
//!
//! # Example
//!
//! ```rust
//! use flowlens_platform::Direction;
//! use flowlens_proto::ssh::{self, ConnectionState};
//!
//! let mut conn = ConnectionState::new();
//!
//! ssh::decode(&mut conn, Direction::ToServer, b"SSH-2.0-OpenSSH_8.9\r\n").unwrap();
//! assert_eq!(conn.client().protocol_version(), Some("2.0"));
//!
//! // A NEWKEYS record: length 3, padding length 1, message code 21.
//! ssh::decode(
//!     &mut conn,
//!     Direction::ToServer,
//!     &[0x00, 0x00, 0x00, 0x03, 0x01, 0x15, 0x00],
//! )
//! .unwrap();
//! assert!(conn.handshake_done());
//! ```

use crate::ssh::error::DecodeError;
use crate::ssh::record::RecordHeader;
use crate::ssh::state::{ConnectionState, DirectionHeader};
use crate::ssh::version::Banner;
use flowlens_platform::{Direction, InspectionModule, StreamDecoder};
use tracing::{debug, trace};

/// Decodes one chunk of one direction's byte stream.
///
/// Called by the reassembly/dispatch layer once per arrived chunk, in byte
/// order. Chunks are never replayed or reordered; ordering is the caller's
/// guarantee, as is serializing calls for the connection's two directions.
///
/// # Errors
///
/// Returns a [`DecodeError`] on malformed input. All errors except
/// [`DecodeError::ResourceExhausted`] are permanent for the connection; the
/// caller's policy is to stop further inspection of the flow.
///
/// # Example
///
/// ```rust
/// use flowlens_platform::Direction;
/// use flowlens_proto::ssh::{self, ConnectionState};
///
/// let mut conn = ConnectionState::new();
/// ssh::decode(&mut conn, Direction::ToClient, b"SSH-2.0-OpenSSH_9.6\r\n").unwrap();
/// assert_eq!(conn.server().software_version(), Some("OpenSSH_9.6"));
/// ```
pub fn decode(
    connection: &mut ConnectionState,
    direction: Direction,
    chunk: &[u8],
) -> Result<(), DecodeError> {
    if connection.handshake_done() {
        trace!("{}: handshake done, ignoring {} bytes", direction, chunk.len());
        return Ok(());
    }

    let mut input = chunk;

    if !connection.header(direction).banner_parsed() {
        if !has_line_terminator(input) {
            // Not a full line yet; the reassembly layer re-presents it.
            trace!("{}: no line terminator in {} bytes", direction, input.len());
            return Ok(());
        }

        let (banner, trailing) = Banner::parse(input)?;
        debug!("{}: banner {}", direction, banner);

        let consumed = input.len() - trailing;
        connection.header_mut(direction).set_banner(banner);
        input = &input[consumed..];
    }

    let header = connection.header_mut(direction);

    // The terminator run after the banner may straddle call boundaries
    // (a CR/LF pair can be split across chunks). Until the first record
    // header byte has been staged or framed, leading EOL bytes still
    // belong to the identification line.
    if header.last_header().is_none() && header.stage_is_empty() {
        let eol = input
            .iter()
            .take_while(|&&b| b == b'\r' || b == b'\n')
            .count();
        input = &input[eol..];
    }

    if record_sync(header, direction, input)? {
        debug!("{}: NEWKEYS framed, handshake done", direction);
        connection.finish_handshake();
    }
    Ok(())
}

/// Runs the record framing loop over the remaining bytes of a chunk.
///
/// Returns true once a NEWKEYS record header has been framed.
fn record_sync(
    header: &mut DirectionHeader,
    direction: Direction,
    mut input: &[u8],
) -> Result<bool, DecodeError> {
    while !input.is_empty() {
        // Body bytes of the current record are skipped, not inspected.
        if header.record_body_remaining() > 0 {
            let skip = input.len().min(header.record_body_remaining() as usize);
            header.skip_body(skip as u32);
            trace!(
                "{}: skipped {} body bytes, {} left in record",
                direction,
                skip,
                header.record_body_remaining()
            );
            input = &input[skip..];
            continue;
        }

        let taken = header.stage_push(input);
        input = &input[taken..];

        let Some(bytes) = header.staged() else {
            // Header split across calls; resume with the next chunk.
            return Ok(false);
        };

        let record = RecordHeader::parse(bytes)?;
        debug!("{}: framed {}", direction, record);
        header.start_record(record);

        if record.is_final() {
            // Everything after this record is ciphertext; stop for the
            // connection, both directions.
            return Ok(true);
        }
    }
    Ok(false)
}

fn has_line_terminator(input: &[u8]) -> bool {
    input.iter().any(|&b| b == b'\r' || b == b'\n')
}

/// The SSH handshake decoder as an engine-registrable inspection module.
///
/// # Example
///
/// ```rust
/// use flowlens_platform::{Direction, InspectionModule, StreamDecoder};
/// use flowlens_proto::ssh::SshDecoder;
///
/// let decoder = SshDecoder;
/// assert_eq!(decoder.id(), "ssh");
///
/// let mut conn = decoder.create();
/// decoder
///     .decode(&mut conn, Direction::ToServer, b"SSH-2.0-OpenSSH_8.9\r\n")
///     .unwrap();
/// assert!(conn.client().banner_parsed());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SshDecoder;

impl InspectionModule for SshDecoder {
    fn id(&self) -> &'static str {
        "ssh"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "SSH handshake metadata decoder"
    }
}

impl StreamDecoder for SshDecoder {
    type State = ConnectionState;
    type Error = DecodeError;

    fn create(&self) -> ConnectionState {
        ConnectionState::new()
    }

    fn decode(
        &self,
        state: &mut ConnectionState,
        direction: Direction,
        chunk: &[u8],
    ) -> Result<(), DecodeError> {
        decode(state, direction, chunk)
    }
}

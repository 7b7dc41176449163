//! Core traits for Flowlens inspection modules

use crate::FlowlensResult;

/// One of the two byte streams of a bidirectional flow.
///
/// Passive inspection sees both halves of a connection as independent
/// in-order byte streams. `ToServer` is the initiator-to-responder stream,
/// `ToClient` the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Initiator to responder (client to server).
    ToServer,
    /// Responder to initiator (server to client).
    ToClient,
}

impl Direction {
    /// Returns the opposite direction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowlens_platform::Direction;
    ///
    /// assert_eq!(Direction::ToServer.opposite(), Direction::ToClient);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::ToServer => Direction::ToClient,
            Direction::ToClient => Direction::ToServer,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::ToServer => write!(f, "to_server"),
            Direction::ToClient => write!(f, "to_client"),
        }
    }
}

/// Inspection module interface
///
/// All Flowlens modules implement this trait to provide unified management.
pub trait InspectionModule: Send + Sync {
    /// Unique module identifier
    fn id(&self) -> &'static str;

    /// Module version
    fn version(&self) -> &'static str;

    /// Module description
    fn description(&self) -> &'static str;

    /// Initialize the module
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails
    fn init(&mut self) -> FlowlensResult<()> {
        Ok(())
    }

    /// Shutdown the module
    ///
    /// # Errors
    ///
    /// Returns an error if shutdown fails
    fn shutdown(&mut self) -> FlowlensResult<()> {
        Ok(())
    }
}

/// Interface for incremental per-flow protocol decoders.
///
/// The flow layer creates one `State` per connection when protocol detection
/// routes the flow to the decoder, then feeds every reassembled chunk to
/// [`decode`](StreamDecoder::decode) in byte order, once each. Calls for a
/// given connection are serialized by the flow layer; the decoder assumes
/// exclusive access to the state for the duration of each call. The state is
/// dropped when the flow is torn down.
pub trait StreamDecoder: InspectionModule {
    /// Per-connection decoder state.
    type State;

    /// Error reported on a permanent decode failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates the per-connection state for a newly detected flow.
    fn create(&self) -> Self::State;

    /// Decodes one chunk of one direction's byte stream.
    ///
    /// # Errors
    ///
    /// Returns an error on a permanent decode failure for the connection;
    /// the caller's policy is to stop further inspection of that flow.
    fn decode(
        &self,
        state: &mut Self::State,
        direction: Direction,
        chunk: &[u8],
    ) -> Result<(), Self::Error>;
}

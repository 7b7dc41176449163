//! Protocol decoders for the Flowlens passive traffic-inspection engine.
//!
//! Each decoder in this crate reconstructs protocol metadata from in-order
//! byte chunks supplied by an external stream-reassembly layer. Decoders
//! are pure and synchronous: a call maps (current state, new chunk) to
//! (new state, result), performs no I/O, and never blocks.
//!
//! # Features
//!
//! - `ssh` (default) - SSH handshake metadata decoding
//!
//! # Example
//!
//! ```rust
//! use flowlens_platform::Direction;
//! use flowlens_proto::ssh::{self, ConnectionState};
//!
//! let mut conn = ConnectionState::new();
//! ssh::decode(&mut conn, Direction::ToServer, b"SSH-2.0-OpenSSH_8.9\r\n").unwrap();
//! assert!(conn.client().banner_parsed());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

#[cfg(feature = "ssh")]
pub mod ssh;

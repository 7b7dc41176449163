//! # Flowlens Platform
//!
//! Core platform types, traits, and utilities for the Flowlens passive
//! traffic-inspection engine.
//!
//! This crate provides:
//! - Unified error types (`FlowlensError`, `FlowlensResult`)
//! - Core traits (`InspectionModule`, `StreamDecoder`)
//! - The [`Direction`] type naming the two byte streams of a flow
//!
//! # Examples
//!
//! ```
//! use flowlens_platform::{FlowlensError, FlowlensResult};
//!
//! fn example_function() -> FlowlensResult<String> {
//!     Ok("Hello, Flowlens!".to_string())
//! }
//!
//! # fn main() -> FlowlensResult<()> {
//! let result = example_function()?;
//! assert_eq!(result, "Hello, Flowlens!");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::{FlowlensError, FlowlensResult};
pub use traits::{Direction, InspectionModule, StreamDecoder};

/// Platform version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Serial Scope
//!
//! A host-side transmitter for a four-channel "virtual scope"
//! diagnostic stream over a serial port.
//!
//! Each batch of four signed 16-bit samples is packed into a fixed
//! 10-byte little-endian frame sealed with a CRC-16/MODBUS checksum,
//! then written to the configured port.
//!
//! ## Features
//!
//! - **Fixed Wire Frame**: Four little-endian samples plus a trailing
//!   CRC-16, ten bytes per transmission.
//! - **Typed Errors**: Device lookup, open and write failures are
//!   distinct error variants instead of sentinel return codes.
//! - **Injectable Driver**: The transmitter talks to the serial driver
//!   through the [`scope::port::ScopePort`] seam, so callers and tests
//!   can supply their own handle.
//!
//! ## Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`scope`]: Checksum, frame layout and the port transmitter
//! - [`error`]: Custom error types for the crate

pub mod error;
pub mod scope;

/// Re-exports for convenience
pub mod prelude {
    pub use crate::error::*;
    pub use crate::scope::frame::{FRAME_LEN, SAMPLE_COUNT};
    pub use crate::scope::{Scope, ScopePort, ScopeSettings};
}

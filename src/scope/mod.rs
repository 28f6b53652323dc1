//! Core scope pipeline: checksum, frame layout and the serial port
//! transmitter.

pub mod crc;
pub mod frame;
pub mod port;

pub use port::{Scope, ScopePort, ScopeSettings};

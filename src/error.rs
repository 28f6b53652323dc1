//! # Error Module
//!
//! This module provides the error types for the `serial_scope` crate.
//! It uses the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// Result type alias for `serial_scope` operations.
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Main error type for the `serial_scope` crate.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// The requested serial device was not found during enumeration.
    #[error("Serial device '{port_name}' not found")]
    DeviceNotFound { port_name: String },

    /// Failed to open the serial port.
    #[error("Failed to open serial port '{port_name}': {reason}")]
    PortOpen { port_name: String, reason: String },

    /// A serial driver control operation failed.
    #[error("Serial port error: {0}")]
    SerialPort(String),

    /// The driver's write result, carried unmodified.
    #[error("Failed to write to serial port: {0}")]
    PortWrite(#[from] std::io::Error),
}

impl ScopeError {
    /// Creates a new device-not-found error.
    #[must_use]
    pub fn device_not_found(port_name: impl Into<String>) -> Self {
        Self::DeviceNotFound {
            port_name: port_name.into(),
        }
    }

    /// Creates a new port open error.
    #[must_use]
    pub fn port_open(port_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PortOpen {
            port_name: port_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new serial port error.
    #[must_use]
    pub fn serial_port(msg: impl Into<String>) -> Self {
        Self::SerialPort(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_not_found_error() {
        let error = ScopeError::device_not_found("/dev/ttyUSB0");
        assert!(error.to_string().contains("/dev/ttyUSB0"));
        assert!(error.to_string().contains("not found"));
    }

    #[test]
    fn test_port_open_error() {
        let error = ScopeError::port_open("/dev/ttyUSB0", "Permission denied");
        let msg = error.to_string();
        assert!(msg.contains("/dev/ttyUSB0"));
        assert!(msg.contains("Permission denied"));
    }

    #[test]
    fn test_serial_port_error() {
        let error = ScopeError::serial_port("Invalid baud rate");
        assert!(error.to_string().contains("Invalid baud rate"));
    }

    #[test]
    fn test_port_write_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "tx timeout");
        let error = ScopeError::from(io);
        assert!(matches!(error, ScopeError::PortWrite(_)));
        assert!(error.to_string().contains("tx timeout"));
    }
}

use log::{debug, error, info};
use std::io::Write;
use std::time::Duration;

pub use tokio_serial::{
    available_ports, DataBits, FlowControl, Parity, SerialPort, SerialPortInfo, StopBits,
};

use super::frame::{self, SAMPLE_COUNT};
use crate::error::{Result, ScopeError};

#[cfg(test)]
use mockall::automock;

/// serial port baud rate
pub const COMMON_BAUD_RATES: &[u32] = &[
    4800, 9600, 19200, 38400, 57600, 115200, 230400, 460800, 500000, 576000, 921600, 1000000,
    1500000, 2000000,
];

/// Scope port settings.
#[derive(Clone, Debug)]
pub struct ScopeSettings {
    pub port_name: String,
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub stop_bits: StopBits,
    pub parity: Parity,
    pub flow_control: FlowControl,
    pub timeout: Duration,
}

impl ScopeSettings {
    /// Settings for the named port: 8 data bits, one stop bit, no
    /// parity, no flow control, half-second write timeout.
    pub fn new(port_name: impl Into<String>, baud_rate: u32) -> Self {
        ScopeSettings {
            port_name: port_name.into(),
            baud_rate,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
            parity: Parity::None,
            flow_control: FlowControl::None,
            timeout: Duration::from_millis(500),
        }
    }
}

/// Operations the transmitter needs from an opened serial driver.
///
/// The native implementation is the blocking [`SerialPort`] handle;
/// tests substitute a mock.
#[cfg_attr(test, automock)]
pub trait ScopePort {
    /// Forces the line to the requested baud rate.
    fn configure_baud(&mut self, baud_rate: u32) -> Result<()>;

    /// Pushes raw bytes onto the line, returning the driver's count.
    fn transmit(&mut self, bytes: &[u8]) -> Result<usize>;
}

impl ScopePort for Box<dyn SerialPort> {
    fn configure_baud(&mut self, baud_rate: u32) -> Result<()> {
        self.as_mut()
            .set_baud_rate(baud_rate)
            .map_err(|e| ScopeError::serial_port(e.to_string()))
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<usize> {
        Ok(self.as_mut().write(bytes)?)
    }
}

/// Lists the port names the serial driver currently enumerates.
pub fn available_port_names() -> Result<Vec<String>> {
    let ports = available_ports().map_err(|e| ScopeError::serial_port(e.to_string()))?;
    Ok(ports.into_iter().map(|info| info.port_name).collect())
}

/// Checks that the named device shows up in the driver's enumeration.
fn resolve_device(port_name: &str) -> Result<()> {
    let names = available_port_names()?;
    if names.iter().any(|name| name == port_name) {
        Ok(())
    } else {
        error!("Failed to find serial device '{port_name}' for scope");
        Err(ScopeError::device_not_found(port_name))
    }
}

/// Opens the native serial port with the requested settings.
fn open_native(settings: &ScopeSettings) -> Result<Box<dyn SerialPort>> {
    match tokio_serial::new(settings.port_name.clone(), settings.baud_rate)
        .data_bits(settings.data_bits)
        .parity(settings.parity)
        .stop_bits(settings.stop_bits)
        .flow_control(settings.flow_control)
        .timeout(settings.timeout)
        .open()
    {
        Ok(port) => Ok(port),
        Err(e) => {
            error!("Failed to open serial port {}: {}", settings.port_name, e);
            Err(ScopeError::port_open(&settings.port_name, e.to_string()))
        }
    }
}

/// A four-channel virtual-scope transmitter bound to one serial port.
pub struct Scope<P: ScopePort = Box<dyn SerialPort>> {
    settings: ScopeSettings,
    port: P,
}

impl Scope {
    /// Resolves, opens and configures the scope port.
    ///
    /// The device must show up in the driver's enumeration, otherwise
    /// [`ScopeError::DeviceNotFound`] is returned and no handle is
    /// held. After a successful open the baud rate is explicitly
    /// forced to the requested value, so a rate picked during open
    /// cannot survive.
    pub fn open(settings: ScopeSettings) -> Result<Self> {
        resolve_device(&settings.port_name)?;
        let mut port = open_native(&settings)?;
        port.configure_baud(settings.baud_rate)?;
        info!(
            "Opened scope port {} at {} baud",
            settings.port_name, settings.baud_rate
        );
        Ok(Scope { settings, port })
    }
}

impl<P: ScopePort> Scope<P> {
    /// Binds the transmitter to an already-opened driver handle.
    pub fn with_port(settings: ScopeSettings, port: P) -> Self {
        Scope { settings, port }
    }

    /// Gets the port settings.
    pub fn settings(&self) -> &ScopeSettings {
        &self.settings
    }

    /// Serializes four samples into a sealed frame and transmits it.
    ///
    /// Returns the driver's byte count unmodified; short writes are
    /// reported, not interpreted.
    pub fn send(&mut self, samples: [i16; SAMPLE_COUNT]) -> Result<usize> {
        let data = frame::encode(samples);
        let written = self.port.transmit(&data)?;
        debug!(
            "Sent frame {} ({} of {} bytes accepted)",
            hex::encode(data),
            written,
            data.len()
        );
        Ok(written)
    }
}

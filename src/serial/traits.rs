//! Serial port trait for abstraction and testability
//!
//! This trait defines the interface for the outbound serial link,
//! allowing the actual UART driver to be swapped with a mock for testing.
//! The module never talks back on this link, so the interface is
//! write-only.

use crate::config;
use core::future::Future;

/// Errors that can occur during serial operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// Requested pin or baud setting is not supported by the link
    InvalidConfig,
    /// Operation timed out
    Timeout,
    /// Write error
    WriteError,
}

/// Serial link parameters applied through [`SerialPort::apply_config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    /// Host pin driving the module's RX line
    pub tx_pin: u8,
    /// Host pin listening to the module's TX line
    pub rx_pin: u8,
    /// Link speed in baud
    pub baud: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            tx_pin: config::serial::TX_PIN,
            rx_pin: config::serial::RX_PIN,
            baud: config::serial::BAUD_RATE,
        }
    }
}

/// Abstract serial port interface for testability
///
/// This trait allows the playback driver to work with either a real UART
/// driver or a mock implementation for testing.
pub trait SerialPort {
    /// Apply pin and baud settings to the underlying link.
    ///
    /// Called again whenever the link is reconfigured; the latest settings
    /// win.
    fn apply_config(&mut self, config: &SerialConfig)
        -> impl Future<Output = Result<(), SerialError>>;

    /// Write bytes from buffer
    fn write(&mut self, data: &[u8]) -> impl Future<Output = Result<(), SerialError>>;

    /// Flush the write buffer
    fn flush(&mut self) -> impl Future<Output = Result<(), SerialError>>;
}

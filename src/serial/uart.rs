//! UART-backed serial port
//!
//! Adapts any `embedded_io_async` byte sink to the [`SerialPort`] trait so
//! the playback driver can run over an embassy UART, a USB CDC port, or
//! anything else that writes bytes.

use crate::serial::traits::{SerialConfig, SerialError, SerialPort};
use embedded_io_async::Write;

/// Serial port over an `embedded_io_async::Write` sink.
///
/// Pin muxing and baud selection stay with the HAL that constructed the
/// writer; the port keeps the most recently requested configuration so the
/// host can rebuild the link when it changes.
pub struct UartPort<W: Write> {
    writer: W,
    active: SerialConfig,
}

impl<W: Write> UartPort<W> {
    /// Wrap a byte sink, assuming the family's default link settings.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            active: SerialConfig::default(),
        }
    }

    /// Configuration most recently requested through `apply_config`
    pub fn active_config(&self) -> &SerialConfig {
        &self.active
    }

    /// Release the underlying writer
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W: Write> SerialPort for UartPort<W> {
    async fn apply_config(&mut self, config: &SerialConfig) -> Result<(), SerialError> {
        self.active = *config;
        Ok(())
    }

    async fn write(&mut self, data: &[u8]) -> Result<(), SerialError> {
        self.writer
            .write_all(data)
            .await
            .map_err(|_| SerialError::WriteError)
    }

    async fn flush(&mut self) -> Result<(), SerialError> {
        self.writer
            .flush()
            .await
            .map_err(|_| SerialError::WriteError)
    }
}

pub mod traits;

#[cfg(feature = "embedded")]
pub mod uart;

pub use traits::{SerialConfig, SerialError, SerialPort};

#[cfg(feature = "embedded")]
pub use uart::UartPort;

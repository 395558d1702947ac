pub mod driver;
pub mod traits;

pub use driver::Mp3Player;
pub use traits::DelayProvider;

#[cfg(feature = "embedded")]
pub use traits::EmbassyDelay;

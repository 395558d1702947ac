//! Delay trait for abstraction and testability
//!
//! The module needs real quiescence time after power-up and after medium
//! selection. This trait lets tests observe the requested delays instead
//! of sleeping through them.

use core::future::Future;

/// Abstract millisecond delay source
pub trait DelayProvider {
    /// Wait for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u64) -> impl Future<Output = ()>;
}

/// Delay source backed by the embassy timer queue
#[cfg(feature = "embedded")]
pub struct EmbassyDelay;

#[cfg(feature = "embedded")]
impl DelayProvider for EmbassyDelay {
    async fn delay_ms(&mut self, ms: u64) {
        embassy_time::Timer::after(embassy_time::Duration::from_millis(ms)).await;
    }
}

use std::time::Duration;

use async_trait::async_trait;

/// Something shown to the operator while the workflow waits for the target.
///
/// Implementations must return once `duration` has passed and must not
/// influence the outcome of the run.
#[async_trait]
pub trait Indicator: Send + Sync {
    async fn show(&self, duration: Duration);
}

/// Shows nothing and returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

#[async_trait]
impl Indicator for Silent {
    async fn show(&self, _duration: Duration) {}
}

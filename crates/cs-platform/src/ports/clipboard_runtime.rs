use anyhow::Result;
use async_trait::async_trait;

/// Lifecycle of the background clipboard change detector.
///
/// # Behavior
/// - `start()` is idempotent: a second call while running is a no-op.
/// - `stop()` is idempotent and keeps the detector's last-seen state, so a
///   restart does not re-capture content that was already recorded.
#[async_trait]
pub trait ClipboardRuntimePort: Send + Sync {
    async fn start(&self) -> Result<()>;
    async fn stop(&self) -> Result<()>;
    fn is_running(&self) -> bool;
}

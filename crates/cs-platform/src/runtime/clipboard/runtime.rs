//! A minimal, cross-platform clipboard runtime.
//!
//! Drives a [`ClipboardWatcher`] from a background tokio task on a fixed
//! period. Each pass runs on the blocking pool because clipboard calls are
//! synchronous OS calls; the watcher mutex keeps passes strictly one at a
//! time, even across a stop/start cycle.

use anyhow::Result;
use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex as StdMutex, PoisonError,
    },
    time::Duration,
};
use tokio::{
    sync::Mutex,
    task::{spawn_blocking, JoinHandle},
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::ports::ClipboardRuntimePort;
use crate::runtime::clipboard::{ClipboardWatcher, TickOutcome};
use cs_core::ports::SystemClipboardPort;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(300);

pub struct PollingClipboardRuntime<C>
where
    C: SystemClipboardPort,
{
    watcher: Arc<StdMutex<ClipboardWatcher<C>>>,
    poll_interval: Duration,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl<C> PollingClipboardRuntime<C>
where
    C: SystemClipboardPort + 'static,
{
    /// A zero `poll_interval` is raised to one millisecond.
    pub fn new(watcher: ClipboardWatcher<C>, poll_interval: Duration) -> Self {
        Self {
            watcher: Arc::new(StdMutex::new(watcher)),
            poll_interval: poll_interval.max(Duration::from_millis(1)),
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

async fn run_pass<C>(watcher: Arc<StdMutex<ClipboardWatcher<C>>>)
where
    C: SystemClipboardPort + 'static,
{
    let result = spawn_blocking(move || {
        watcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .check_once()
    })
    .await;

    match result {
        Ok(TickOutcome::Unchanged) => {}
        Ok(outcome) => debug!(?outcome, "clipboard pass recorded new content"),
        Err(err) => warn!(error = %err, "clipboard pass did not complete"),
    }
}

#[async_trait]
impl<C> ClipboardRuntimePort for PollingClipboardRuntime<C>
where
    C: SystemClipboardPort + 'static,
{
    async fn start(&self) -> Result<()> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }

        let watcher = Arc::clone(&self.watcher);
        let period = self.poll_interval;

        let span = info_span!("clipboard.poll", period_ms = period.as_millis() as u64);

        let handle = tokio::spawn(
            async move {
                let mut ticker = interval(period);
                // a slow pass drops the ticks it overlapped, it never queues them
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

                loop {
                    ticker.tick().await;
                    run_pass(Arc::clone(&watcher)).await;
                }
            }
            .instrument(span),
        );

        *self.handle.lock().await = Some(handle);
        info!(period_ms = period.as_millis() as u64, "clipboard watcher started");

        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Some(handle) = self.handle.lock().await.take() {
            // An in-flight pass finishes on the blocking pool; the next start
            // waits for it on the watcher lock.
            handle.abort();
        }
        info!("clipboard watcher stopped");

        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

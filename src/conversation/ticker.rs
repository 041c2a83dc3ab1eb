//! Periodic loading-stage ticker
//!
//! Runs as its own tokio task and sends a unit tick on every period. The task
//! lives exactly as long as the `LoadingTicker` value: dropping it (view
//! teardown) aborts the task so no timer outlives the screen.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct LoadingTicker {
    rx: mpsc::Receiver<()>,
    handle: JoinHandle<()>,
}

impl LoadingTicker {
    /// Start ticking every `period`. The first tick fires one period after start.
    pub fn spawn(period: Duration) -> Self {
        // Capacity 1: a slow consumer sees one pending tick, not a burst
        let (tx, rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                match tx.try_send(()) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(())) => {}
                    Err(mpsc::error::TrySendError::Closed(())) => break,
                }
            }
        });

        Self { rx, handle }
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for LoadingTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_ticks() {
        let mut ticker = LoadingTicker::spawn(Duration::from_millis(10));
        for _ in 0..3 {
            let tick = tokio::time::timeout(Duration::from_secs(1), ticker.tick()).await;
            assert!(matches!(tick, Ok(Some(()))));
        }
        assert!(ticker.is_running());
    }

    #[tokio::test]
    async fn drop_aborts_the_task() {
        let ticker = LoadingTicker::spawn(Duration::from_millis(10));
        let handle = ticker.handle.abort_handle();
        drop(ticker);

        // Abort is processed at the task's next yield point
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished());
    }
}

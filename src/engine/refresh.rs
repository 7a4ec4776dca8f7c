use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::models::BackgroundPattern;

use super::controller::SmartEngine;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

pub const REFRESH_INTERVAL_SECS: u64 = 3600;
const EVENT_BUFFER: usize = 8;

pub type SharedEngine = Arc<Mutex<SmartEngine>>;

/// Background recomputed on each tick, for the renderer to apply.
/// Greetings are only picked on page load, so they are not refreshed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshEvent {
    pub pattern: BackgroundPattern,
}

/// Handle to the running refresh task.
pub struct RefreshHandle {
    engine: SharedEngine,
    events: mpsc::Sender<RefreshEvent>,
    cancel_token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

/// Start refreshing every `period`. The first refresh happens immediately.
pub fn spawn_refresh(
    engine: SharedEngine,
    period: Duration,
) -> (RefreshHandle, mpsc::Receiver<RefreshEvent>) {
    let (events, receiver) = mpsc::channel(EVENT_BUFFER);
    let cancel_token = CancellationToken::new();
    let task = tokio::spawn(refresh_loop(
        engine.clone(),
        events.clone(),
        period,
        cancel_token.clone(),
    ));

    let handle = RefreshHandle {
        engine,
        events,
        cancel_token,
        task: Some(task),
    };
    (handle, receiver)
}

/// Hourly refresh with the default interval.
pub fn spawn_hourly_refresh(engine: SharedEngine) -> (RefreshHandle, mpsc::Receiver<RefreshEvent>) {
    spawn_refresh(engine, Duration::from_secs(REFRESH_INTERVAL_SECS))
}

impl RefreshHandle {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the current task and start a new one with `period`, reusing
    /// the same event channel.
    pub async fn reschedule(&mut self, period: Duration) {
        self.stop().await;
        self.cancel_token = CancellationToken::new();
        self.task = Some(tokio::spawn(refresh_loop(
            self.engine.clone(),
            self.events.clone(),
            period,
            self.cancel_token.clone(),
        )));
    }

    /// Stop the task and wait for it to exit.
    pub async fn stop(&mut self) {
        self.cancel_token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                log_warn!("refresh task ended abnormally: {err}");
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

async fn refresh_loop(
    engine: SharedEngine,
    events: mpsc::Sender<RefreshEvent>,
    period: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let pattern = engine.lock().await.pattern();

                // Cancellation also interrupts a send blocked on a full channel.
                tokio::select! {
                    sent = events.send(RefreshEvent { pattern }) => {
                        if sent.is_err() {
                            log_info!("refresh receiver dropped, stopping refresh loop");
                            break;
                        }
                    }
                    _ = cancel_token.cancelled() => {
                        log_info!("refresh loop shutting down");
                        break;
                    }
                }
            }
            _ = cancel_token.cancelled() => {
                log_info!("refresh loop shutting down");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::engine::SmartConfig;
    use crate::random::SequenceRandom;
    use chrono::Utc;

    async fn shared_engine() -> SharedEngine {
        let engine = SmartEngine::load_with(
            Arc::new(MemoryStore::new()),
            Box::new(SequenceRandom::new(vec![0.99])),
            SmartConfig::default(),
            Utc::now(),
        )
        .await;
        Arc::new(Mutex::new(engine))
    }

    #[tokio::test]
    async fn first_refresh_is_immediate_and_stop_joins() {
        let engine = shared_engine().await;
        let (mut handle, mut events) = spawn_refresh(engine.clone(), Duration::from_secs(3600));

        let event = events.recv().await.unwrap();
        assert_eq!(event.pattern, engine.lock().await.settings().background_pattern);
        assert!(engine.lock().await.record().last_greetings.is_empty());

        handle.stop().await;
        assert!(!handle.is_running());
    }

    #[tokio::test]
    async fn reschedule_restarts_on_same_channel() {
        let engine = shared_engine().await;
        let (mut handle, mut events) = spawn_refresh(engine, Duration::from_secs(3600));
        events.recv().await.unwrap();

        handle.reschedule(Duration::from_secs(1800)).await;
        assert!(handle.is_running());
        // A fresh interval ticks immediately.
        events.recv().await.unwrap();

        handle.stop().await;
    }

    #[tokio::test]
    async fn loop_exits_when_receiver_is_dropped() {
        let engine = shared_engine().await;
        let (mut handle, events) = spawn_refresh(engine, Duration::from_millis(10));
        drop(events);

        tokio::time::timeout(Duration::from_secs(5), handle.stop())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn stop_returns_while_receiver_is_idle() {
        let engine = shared_engine().await;
        let (mut handle, _events) = spawn_refresh(engine, Duration::from_millis(5));

        // Long enough for the event buffer to fill up.
        tokio::time::sleep(Duration::from_millis(200)).await;

        tokio::time::timeout(Duration::from_secs(3), handle.stop())
            .await
            .unwrap();
        assert!(!handle.is_running());
    }
}

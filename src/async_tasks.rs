//! Async task management for background timers
//!
//! Every timer runs as its own tokio task. Tasks never touch page state;
//! they post [`TimerFired`] notices onto the event loop's channel and exit
//! as soon as their handle is cancelled.

use crate::scheduler::{Scheduler, TimerFired, TimerHandle, TimerId, TimerKind, repeat_period};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};

/// Spawns timer tasks that report back over an unbounded channel
#[derive(Debug, Clone)]
pub struct AsyncTaskRunner {
    tx: mpsc::UnboundedSender<TimerFired>,
    next_id: Arc<AtomicU64>,
}

impl AsyncTaskRunner {
    /// Create a new task runner
    pub fn new(tx: mpsc::UnboundedSender<TimerFired>) -> Self {
        Self {
            tx,
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    fn allocate(&self, kind: TimerKind) -> (TimerHandle, watch::Receiver<bool>) {
        let id = TimerId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        TimerHandle::new(id, kind)
    }
}

impl Scheduler for AsyncTaskRunner {
    fn every(&mut self, period: Duration, kind: TimerKind) -> TimerHandle {
        let period = repeat_period(period);
        let (handle, cancel_rx) = self.allocate(kind);
        let fired = TimerFired {
            id: handle.id(),
            kind,
        };
        tracing::debug!("Spawning repeating timer {:?} every {:?}", fired, period);

        tokio::spawn(interval_task(period, fired, self.tx.clone(), cancel_rx));
        handle
    }

    fn after(&mut self, delay: Duration, kind: TimerKind) -> TimerHandle {
        let (handle, cancel_rx) = self.allocate(kind);
        let fired = TimerFired {
            id: handle.id(),
            kind,
        };
        tracing::debug!("Spawning one-shot timer {:?} after {:?}", fired, delay);

        tokio::spawn(timeout_task(delay, fired, self.tx.clone(), cancel_rx));
        handle
    }
}

/// Background task for a repeating timer
async fn interval_task(
    period: Duration,
    fired: TimerFired,
    tx: mpsc::UnboundedSender<TimerFired>,
    mut cancel_rx: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if *cancel_rx.borrow() {
                    break;
                }
                if tx.send(fired).is_err() {
                    // Event loop is gone
                    break;
                }
            }
            changed = cancel_rx.changed() => {
                if changed.is_err() || *cancel_rx.borrow() {
                    break;
                }
            }
        }
    }

    tracing::trace!("Repeating timer {:?} stopped", fired.id);
}

/// Background task for a one-shot timer
async fn timeout_task(
    delay: Duration,
    fired: TimerFired,
    tx: mpsc::UnboundedSender<TimerFired>,
    mut cancel_rx: watch::Receiver<bool>,
) {
    tokio::select! {
        _ = tokio::time::sleep(delay) => {
            if !*cancel_rx.borrow() {
                let _ = tx.send(fired);
            }
        }
        _ = cancel_rx.changed() => {
            tracing::trace!("One-shot timer {:?} cancelled", fired.id);
        }
    }
}

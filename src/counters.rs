//! Stat counter animation
//!
//! Counters tick up from zero to their target in fixed-size steps, one step
//! per frame, and snap to the exact target on the last frame. All counters
//! share a single frame timer that is dropped once every counter is done.

use crate::constants::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};
use crate::scheduler::{Scheduler, TimerFired, TimerHandle, TimerKind};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    displayed: u64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration, frame: Duration) -> Self {
        let frames = duration.as_secs_f64() / frame.as_secs_f64().max(f64::EPSILON);
        let step = target as f64 / frames.max(1.0);

        CounterAnimation {
            target,
            step,
            current: 0.0,
            displayed: 0,
            finished: false,
        }
    }

    /// Advance one frame and return the value to display
    pub fn advance(&mut self) -> u64 {
        if self.finished {
            return self.displayed;
        }

        self.current += self.step;
        if self.current >= self.target as f64 {
            self.displayed = self.target;
            self.finished = true;
        } else {
            self.displayed = self.current.floor() as u64;
        }
        self.displayed
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Runs every stat counter off one frame timer
#[derive(Debug)]
pub struct CounterAnimator {
    counters: Vec<CounterAnimation>,
    started: bool,
    frame_handle: Option<TimerHandle>,
    frame: Duration,
}

impl CounterAnimator {
    pub fn new(targets: &[u64]) -> Self {
        let duration = Duration::from_millis(COUNTER_DURATION_MS);
        let frame = Duration::from_millis(COUNTER_FRAME_MS);

        CounterAnimator {
            counters: targets
                .iter()
                .map(|&t| CounterAnimation::new(t, duration, frame))
                .collect(),
            started: false,
            frame_handle: None,
            frame,
        }
    }

    pub fn counters(&self) -> &[CounterAnimation] {
        &self.counters
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn is_running(&self) -> bool {
        self.frame_handle.is_some()
    }

    /// Kick off the animation; only the first call has any effect
    pub fn start(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.started {
            return false;
        }
        self.started = true;

        if self.counters.is_empty() {
            return true;
        }

        tracing::info!("Starting {} stat counters", self.counters.len());
        self.frame_handle = Some(scheduler.every(self.frame, TimerKind::CounterFrame));
        true
    }

    /// Advance all counters by one frame
    pub fn on_frame(&mut self, fired: TimerFired) {
        let live = self
            .frame_handle
            .as_ref()
            .is_some_and(|h| h.is_for(&fired));
        if !live {
            return;
        }

        for counter in &mut self.counters {
            counter.advance();
        }

        if self.counters.iter().all(CounterAnimation::is_finished) {
            tracing::debug!("All stat counters finished");
            if let Some(handle) = self.frame_handle.take() {
                handle.cancel();
            }
        }
    }
}

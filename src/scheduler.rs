//! Timer scheduling for page behaviors
//!
//! Timers never touch page state themselves. A scheduler only posts
//! [`TimerFired`] notices back to the event loop, which routes them to the
//! component owning the matching [`TimerHandle`]. Components compare the
//! notice against the handle they still hold, so a notice that was already
//! queued when its timer got cancelled is simply dropped.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::watch;

/// Identity of one scheduled timer, unique per scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        TimerId(raw)
    }
}

/// What a timer is for; decides which component receives it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    IntroComplete,
    AutoplayTick,
    ResumeAutoplay,
    CounterFrame,
    DismissNotification(u64),
    FormSubmitted,
    OrderRedirect,
}

/// Notice posted to the event loop each time a timer elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub id: TimerId,
    pub kind: TimerKind,
}

/// Owned token for a scheduled timer
///
/// Cancelling (or dropping) the handle stops the timer. At most one owner
/// exists per timer, so holding `Option<TimerHandle>` is enough to
/// guarantee a component never has two copies of the same timer running.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    kind: TimerKind,
    cancel_tx: watch::Sender<bool>,
}

impl TimerHandle {
    /// Create a handle plus the receiver the timer task watches for cancellation
    pub fn new(id: TimerId, kind: TimerKind) -> (Self, watch::Receiver<bool>) {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        (
            TimerHandle {
                id,
                kind,
                cancel_tx,
            },
            cancel_rx,
        )
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Whether a fired notice came from this timer
    pub fn is_for(&self, fired: &TimerFired) -> bool {
        self.id == fired.id && self.kind == fired.kind
    }

    /// Stop the timer. No further notices will be posted for it.
    pub fn cancel(self) {
        tracing::trace!("Cancelling timer {:?} ({:?})", self.id, self.kind);
        // Drop does the signalling
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        let _ = self.cancel_tx.send(true);
    }
}

/// Shortest period a repeating timer runs at
pub const MIN_TIMER_PERIOD: Duration = Duration::from_millis(1);

/// Raise a repeat period to [`MIN_TIMER_PERIOD`]
pub fn repeat_period(period: Duration) -> Duration {
    period.max(MIN_TIMER_PERIOD)
}

/// Something that can run timers on behalf of page components
pub trait Scheduler {
    /// Fire `kind` every `period`, starting one period from now
    ///
    /// Periods below [`MIN_TIMER_PERIOD`] are raised to it.
    fn every(&mut self, period: Duration, kind: TimerKind) -> TimerHandle;

    /// Fire `kind` once after `delay`
    fn after(&mut self, delay: Duration, kind: TimerKind) -> TimerHandle;
}

#[derive(Debug)]
struct PendingTimer {
    id: TimerId,
    kind: TimerKind,
    due: Duration,
    period: Option<Duration>,
    cancel_rx: watch::Receiver<bool>,
}

impl PendingTimer {
    fn is_cancelled(&self) -> bool {
        *self.cancel_rx.borrow()
    }
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    timers: Vec<PendingTimer>,
}

/// Virtual-clock scheduler; time only moves when [`ManualScheduler::advance`] is called
///
/// Clones share the same clock, so a test can keep one copy while a
/// component owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of live (not cancelled, not yet expired) timers
    pub fn active_count(&self) -> usize {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|t| !t.is_cancelled())
            .count()
    }

    /// Number of live timers of one kind
    pub fn active_of(&self, kind: TimerKind) -> usize {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|t| t.kind == kind && !t.is_cancelled())
            .count()
    }

    /// Move the clock forward, handing every timer that comes due to `on_fire`
    ///
    /// Timers fire in due order. The callback runs with the clock set to the
    /// timer's due time, so anything it schedules is timed from that instant.
    pub fn advance(&self, by: Duration, mut on_fire: impl FnMut(TimerFired)) {
        let target = self.clock.borrow().now + by;

        loop {
            let fired = {
                let mut clock = self.clock.borrow_mut();
                clock.timers.retain(|t| !t.is_cancelled());

                let next = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(idx, _)| idx);

                let Some(idx) = next else {
                    clock.now = target;
                    break;
                };

                let due = clock.timers[idx].due;
                clock.now = due;

                let fired = TimerFired {
                    id: clock.timers[idx].id,
                    kind: clock.timers[idx].kind,
                };
                match clock.timers[idx].period {
                    Some(period) => clock.timers[idx].due = due + period,
                    None => {
                        clock.timers.swap_remove(idx);
                    }
                }
                fired
            };

            on_fire(fired);
        }
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration, period: Option<Duration>) -> TimerHandle {
        let mut clock = self.clock.borrow_mut();
        let id = TimerId::new(clock.next_id);
        clock.next_id += 1;

        let (handle, cancel_rx) = TimerHandle::new(id, kind);
        let due = clock.now + delay;
        clock.timers.push(PendingTimer {
            id,
            kind,
            due,
            period,
            cancel_rx,
        });
        handle
    }
}

impl Scheduler for ManualScheduler {
    fn every(&mut self, period: Duration, kind: TimerKind) -> TimerHandle {
        let period = repeat_period(period);
        self.schedule(kind, period, Some(period))
    }

    fn after(&mut self, delay: Duration, kind: TimerKind) -> TimerHandle {
        self.schedule(kind, delay, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_repeating_timer_fires_each_period() {
        let mut scheduler = ManualScheduler::new();
        let _handle = scheduler.every(ms(100), TimerKind::AutoplayTick);

        let mut fired = Vec::new();
        scheduler.advance(ms(350), |f| fired.push(f));

        assert_eq!(fired.len(), 3);
        assert_eq!(scheduler.now(), ms(350));
        assert_eq!(scheduler.active_count(), 1);
    }

    #[test]
    fn test_one_shot_timer_expires() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.after(ms(50), TimerKind::ResumeAutoplay);

        let mut fired = Vec::new();
        scheduler.advance(ms(49), |f| fired.push(f));
        assert!(fired.is_empty());

        scheduler.advance(ms(1), |f| fired.push(f));
        assert_eq!(fired.len(), 1);
        assert!(handle.is_for(&fired[0]));
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_cancel_stops_timer() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.every(ms(10), TimerKind::CounterFrame);
        handle.cancel();

        let mut fired = Vec::new();
        scheduler.advance(ms(100), |f| fired.push(f));
        assert!(fired.is_empty());
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let mut scheduler = ManualScheduler::new();
        {
            let _handle = scheduler.after(ms(10), TimerKind::FormSubmitted);
        }
        assert_eq!(scheduler.active_of(TimerKind::FormSubmitted), 0);
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        let _slow = scheduler.after(ms(30), TimerKind::OrderRedirect);
        let _fast = scheduler.after(ms(10), TimerKind::FormSubmitted);

        let mut kinds = Vec::new();
        scheduler.advance(ms(50), |f| kinds.push(f.kind));
        assert_eq!(kinds, vec![TimerKind::FormSubmitted, TimerKind::OrderRedirect]);
    }

    #[test]
    fn test_callback_can_schedule_from_due_time() {
        let scheduler = ManualScheduler::new();
        let mut inner = scheduler.clone();
        let _first = inner.after(ms(10), TimerKind::ResumeAutoplay);

        let mut spawned = Vec::new();
        let mut kinds = Vec::new();
        scheduler.advance(ms(25), |f| {
            kinds.push(f.kind);
            if f.kind == TimerKind::ResumeAutoplay {
                spawned.push(inner.after(ms(10), TimerKind::IntroComplete));
            }
        });

        assert_eq!(kinds, vec![TimerKind::ResumeAutoplay, TimerKind::IntroComplete]);
    }

    #[test]
    fn test_handle_matches_only_its_own_notice() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.every(ms(10), TimerKind::AutoplayTick);
        let b = scheduler.every(ms(10), TimerKind::AutoplayTick);

        let notice = TimerFired {
            id: a.id(),
            kind: TimerKind::AutoplayTick,
        };
        assert!(a.is_for(&notice));
        assert!(!b.is_for(&notice));
    }

    #[test]
    fn test_zero_period_is_raised_to_minimum() {
        let mut scheduler = ManualScheduler::new();
        let _handle = scheduler.every(Duration::ZERO, TimerKind::AutoplayTick);

        let mut fired = Vec::new();
        scheduler.advance(ms(5), |f| fired.push(f));
        assert_eq!(fired.len(), 5);
        assert_eq!(scheduler.now(), ms(5));
    }
}

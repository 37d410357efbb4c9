use super::state::CarouselState;
use crate::constants::{DEFAULT_AUTOPLAY_MS, DEFAULT_RESUME_DELAY_MS};
use crate::error::{AppError, Result};
use crate::scheduler::{Scheduler, TimerFired, TimerKind};
use std::time::Duration;

/// Horizontal position of the testimonial track
///
/// One page per item. The same offset can be read relative to the visible
/// viewport (`index × 100%`) or to the whole track (`index × 100 / N %`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackOffset {
    index: usize,
    count: usize,
}

impl TrackOffset {
    pub fn new(index: usize, count: usize) -> Self {
        TrackOffset { index, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Translation in percent of the viewport width
    pub fn viewport_percent(&self) -> f64 {
        self.index as f64 * 100.0
    }

    /// Translation in percent of the full track width
    pub fn track_percent(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.index as f64 * (100.0 / self.count as f64)
        }
    }
}

/// Rendering side of the carousel
///
/// Each call replaces the previous instruction of the same kind: marking an
/// item active implies every other item is inactive.
pub trait Presenter {
    fn set_active_item(&mut self, index: usize) -> Result<()>;
    fn set_active_indicator(&mut self, index: usize) -> Result<()>;
    fn set_track_offset(&mut self, offset: TrackOffset) -> Result<()>;
}

/// Timing parameters of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    autoplay_period: Duration,
    resume_delay: Duration,
}

impl CarouselConfig {
    /// The autoplay period must be non-zero; a zero resume delay resumes on the next turn
    pub fn new(autoplay_period: Duration, resume_delay: Duration) -> Result<Self> {
        if autoplay_period.is_zero() {
            return Err(AppError::InvalidConfig(
                "autoplay period must be greater than zero".to_string(),
            ));
        }
        Ok(CarouselConfig {
            autoplay_period,
            resume_delay,
        })
    }

    pub fn autoplay_period(&self) -> Duration {
        self.autoplay_period
    }

    pub fn resume_delay(&self) -> Duration {
        self.resume_delay
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            autoplay_period: Duration::from_millis(DEFAULT_AUTOPLAY_MS),
            resume_delay: Duration::from_millis(DEFAULT_RESUME_DELAY_MS),
        }
    }
}

/// User-driven carousel controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualControl {
    Next,
    Previous,
    Indicator(usize),
}

/// Drives the testimonial carousel
///
/// All mutation happens synchronously inside method calls; timers only
/// deliver [`TimerFired`] notices through [`CarouselController::handle_timer`].
pub struct CarouselController<T, P, S> {
    state: CarouselState<T>,
    presenter: P,
    scheduler: S,
    config: CarouselConfig,
}

impl<T, P: Presenter, S: Scheduler> CarouselController<T, P, S> {
    pub fn new(state: CarouselState<T>, presenter: P, scheduler: S, config: CarouselConfig) -> Self {
        CarouselController {
            state,
            presenter,
            scheduler,
            config,
        }
    }

    pub fn state(&self) -> &CarouselState<T> {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// Page-initialization entry point: show the first item and begin autoplay
    pub fn start(&mut self) -> Result<()> {
        if self.state.is_empty() {
            tracing::debug!("Carousel has no items, staying inert");
            return Ok(());
        }

        tracing::info!("Starting carousel with {} items", self.state.len());
        self.show(0)?;
        self.start_autoplay();
        Ok(())
    }

    /// Make `index mod N` the active item and push it to the presenter
    pub fn show(&mut self, index: usize) -> Result<()> {
        let count = self.state.len();
        if count == 0 {
            return Ok(());
        }

        let active = index % count;
        self.state.active_index = Some(active);
        tracing::debug!("Showing testimonial {}/{}", active + 1, count);

        self.presenter.set_active_item(active)?;
        self.presenter.set_active_indicator(active)?;
        self.presenter.set_track_offset(TrackOffset::new(active, count))?;
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        let Some(current) = self.state.active_index else {
            return Ok(());
        };
        self.show((current + 1) % self.state.len())
    }

    pub fn previous(&mut self) -> Result<()> {
        let Some(current) = self.state.active_index else {
            return Ok(());
        };
        let count = self.state.len();
        self.show((current + count - 1) % count)
    }

    /// Direct navigation from an indicator
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.show(index)
    }

    /// Install the repeating autoplay timer unless one is already running
    pub fn start_autoplay(&mut self) {
        if self.state.is_empty() {
            return;
        }
        if !self.state.autoplay_enabled {
            tracing::debug!("Autoplay disabled, not starting");
            return;
        }
        if self.state.autoplay_handle.is_some() {
            return;
        }

        let handle = self
            .scheduler
            .every(self.config.autoplay_period, TimerKind::AutoplayTick);
        tracing::debug!("Autoplay started ({:?})", handle.id());
        self.state.autoplay_handle = Some(handle);
    }

    /// Disable autoplay and cancel the installed timer, if any
    pub fn pause_autoplay(&mut self) {
        self.state.autoplay_enabled = false;
        if let Some(handle) = self.state.autoplay_handle.take() {
            tracing::debug!("Autoplay paused ({:?})", handle.id());
            handle.cancel();
        }
    }

    /// Re-enable autoplay after `delay`, replacing any pending resume
    pub fn resume_after(&mut self, delay: Duration) {
        if self.state.is_empty() {
            return;
        }
        if let Some(pending) = self.state.resume_handle.take() {
            pending.cancel();
        }

        tracing::debug!("Autoplay resumes in {:?}", delay);
        self.state.resume_handle = Some(self.scheduler.after(delay, TimerKind::ResumeAutoplay));
    }

    /// Navigate on behalf of the user, then hold autoplay off for a while
    pub fn handle_control(&mut self, control: ManualControl) -> Result<()> {
        if self.state.is_empty() {
            return Ok(());
        }

        tracing::debug!("Manual carousel control: {:?}", control);
        match control {
            ManualControl::Next => self.next()?,
            ManualControl::Previous => self.previous()?,
            ManualControl::Indicator(index) => self.jump_to(index)?,
        }

        self.pause_autoplay();
        self.resume_after(self.config.resume_delay);
        Ok(())
    }

    /// Route a fired timer; notices from cancelled or foreign timers are ignored
    pub fn handle_timer(&mut self, fired: TimerFired) -> Result<()> {
        match fired.kind {
            TimerKind::AutoplayTick => {
                let live = self
                    .state
                    .autoplay_handle
                    .as_ref()
                    .is_some_and(|h| h.is_for(&fired));
                if !live {
                    tracing::trace!("Dropping stale autoplay tick {:?}", fired.id);
                    return Ok(());
                }
                self.next()
            }
            TimerKind::ResumeAutoplay => {
                let live = self
                    .state
                    .resume_handle
                    .as_ref()
                    .is_some_and(|h| h.is_for(&fired));
                if !live {
                    tracing::trace!("Dropping stale resume {:?}", fired.id);
                    return Ok(());
                }
                self.state.resume_handle = None;
                self.state.autoplay_enabled = true;
                self.start_autoplay();
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::scheduler::ManualScheduler;

    #[derive(Debug, Default)]
    struct RecordingPresenter {
        active_item: Option<usize>,
        active_indicator: Option<usize>,
        offset: Option<TrackOffset>,
        renders: usize,
    }

    impl Presenter for RecordingPresenter {
        fn set_active_item(&mut self, index: usize) -> Result<()> {
            self.active_item = Some(index);
            self.renders += 1;
            Ok(())
        }

        fn set_active_indicator(&mut self, index: usize) -> Result<()> {
            self.active_indicator = Some(index);
            Ok(())
        }

        fn set_track_offset(&mut self, offset: TrackOffset) -> Result<()> {
            self.offset = Some(offset);
            Ok(())
        }
    }

    struct FailingPresenter;

    impl Presenter for FailingPresenter {
        fn set_active_item(&mut self, _index: usize) -> Result<()> {
            Err(AppError::Presenter("track element missing".to_string()))
        }

        fn set_active_indicator(&mut self, _index: usize) -> Result<()> {
            Ok(())
        }

        fn set_track_offset(&mut self, _offset: TrackOffset) -> Result<()> {
            Ok(())
        }
    }

    type TestCarousel = CarouselController<&'static str, RecordingPresenter, ManualScheduler>;

    fn carousel(items: Vec<&'static str>) -> (TestCarousel, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let controller = CarouselController::new(
            CarouselState::new(items),
            RecordingPresenter::default(),
            scheduler.clone(),
            CarouselConfig::default(),
        );
        (controller, scheduler)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Advance virtual time, feeding every firing back into the carousel
    fn run_for(controller: &mut TestCarousel, scheduler: &ManualScheduler, by: Duration) {
        let mut fired = Vec::new();
        let step = ms(100);
        let mut elapsed = Duration::ZERO;
        while elapsed < by {
            scheduler.advance(step, |f| fired.push(f));
            for f in fired.drain(..) {
                controller.handle_timer(f).unwrap();
            }
            elapsed += step;
        }
    }

    #[test]
    fn test_next_wraps_forward_and_previous_wraps_back() {
        let (mut c, _) = carousel(vec!["A", "B", "C"]);
        c.start().unwrap();

        c.next().unwrap();
        assert_eq!(c.state().active_item(), Some(&"B"));
        c.next().unwrap();
        assert_eq!(c.state().active_item(), Some(&"C"));
        c.next().unwrap();
        assert_eq!(c.state().active_index(), Some(0));
        c.previous().unwrap();
        assert_eq!(c.state().active_index(), Some(2));
    }

    #[test]
    fn test_jump_to_normalizes_out_of_range_index() {
        let (mut c, _) = carousel(vec!["A", "B", "C"]);
        c.jump_to(5).unwrap();
        assert_eq!(c.state().active_index(), Some(2));
        assert_eq!(c.presenter().active_item, Some(2));
    }

    #[test]
    fn test_index_stays_in_range_for_any_walk() {
        for n in 1..=7 {
            let items = vec!["x"; n];
            let (mut c, _) = carousel(items);
            for step in 0..50usize {
                if step % 3 == 0 {
                    c.previous().unwrap();
                } else {
                    c.next().unwrap();
                }
                let idx = c.state().active_index().unwrap();
                assert!(idx < n, "index {} out of range for {} items", idx, n);
            }
        }
    }

    #[test]
    fn test_next_then_previous_round_trips() {
        for n in 1..=6 {
            for start in 0..n {
                let (mut c, _) = carousel(vec!["x"; n]);
                c.show(start).unwrap();
                c.next().unwrap();
                c.previous().unwrap();
                assert_eq!(c.state().active_index(), Some(start));
                c.previous().unwrap();
                c.next().unwrap();
                assert_eq!(c.state().active_index(), Some(start));
            }
        }
    }

    #[test]
    fn test_n_nexts_return_to_start() {
        for n in 1..=6 {
            let (mut c, _) = carousel(vec!["x"; n]);
            c.show(n - 1).unwrap();
            for _ in 0..n {
                c.next().unwrap();
            }
            assert_eq!(c.state().active_index(), Some(n - 1));
        }
    }

    #[test]
    fn test_show_updates_item_indicator_and_track() {
        let (mut c, _) = carousel(vec!["A", "B", "C", "D"]);
        c.show(2).unwrap();

        let p = c.presenter();
        assert_eq!(p.active_item, Some(2));
        assert_eq!(p.active_indicator, Some(2));
        let offset = p.offset.unwrap();
        assert_eq!(offset.viewport_percent(), 200.0);
        assert_eq!(offset.track_percent(), 50.0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let (mut c, scheduler) = carousel(Vec::new());
        c.start().unwrap();
        c.next().unwrap();
        c.previous().unwrap();
        c.jump_to(3).unwrap();
        c.start_autoplay();
        c.handle_control(ManualControl::Next).unwrap();

        assert_eq!(c.state().active_index(), None);
        assert_eq!(c.presenter().renders, 0);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_autoplay_advances_every_period() {
        let (mut c, scheduler) = carousel(vec!["A", "B", "C"]);
        c.start().unwrap();

        run_for(&mut c, &scheduler, ms(4900));
        assert_eq!(c.state().active_index(), Some(0));
        run_for(&mut c, &scheduler, ms(100));
        assert_eq!(c.state().active_index(), Some(1));
        run_for(&mut c, &scheduler, ms(10_000));
        assert_eq!(c.state().active_index(), Some(0));
    }

    #[test]
    fn test_start_autoplay_twice_keeps_one_timer() {
        let (mut c, scheduler) = carousel(vec!["A", "B"]);
        c.start_autoplay();
        c.start_autoplay();
        assert_eq!(scheduler.active_of(TimerKind::AutoplayTick), 1);

        run_for(&mut c, &scheduler, ms(5000));
        assert_eq!(c.state().active_index(), Some(1));
    }

    #[test]
    fn test_pause_cancels_timer() {
        let (mut c, scheduler) = carousel(vec!["A", "B", "C"]);
        c.start().unwrap();
        c.pause_autoplay();

        assert!(!c.state().autoplay_enabled());
        assert!(!c.state().is_autoplaying());
        assert_eq!(scheduler.active_of(TimerKind::AutoplayTick), 0);

        run_for(&mut c, &scheduler, ms(20_000));
        assert_eq!(c.state().active_index(), Some(0));
    }

    #[test]
    fn test_queued_tick_after_pause_does_not_advance() {
        let (mut c, scheduler) = carousel(vec!["A", "B", "C"]);
        c.start().unwrap();

        let mut queued = Vec::new();
        scheduler.advance(ms(5000), |f| queued.push(f));
        assert_eq!(queued.len(), 1);

        c.pause_autoplay();
        c.handle_timer(queued[0]).unwrap();
        assert_eq!(c.state().active_index(), Some(0));
    }

    #[test]
    fn test_start_autoplay_is_noop_while_disabled() {
        let (mut c, scheduler) = carousel(vec!["A", "B"]);
        c.pause_autoplay();
        c.start_autoplay();
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_manual_control_pauses_then_resumes() {
        let (mut c, scheduler) = carousel(vec!["A", "B", "C"]);
        c.start().unwrap();

        c.handle_control(ManualControl::Next).unwrap();
        assert_eq!(c.state().active_index(), Some(1));
        assert!(!c.state().is_autoplaying());
        assert!(c.state().resume_pending());

        // Resume after 5s, then the first autoplay tick 5s after that
        run_for(&mut c, &scheduler, ms(5000));
        assert!(c.state().autoplay_enabled());
        assert!(c.state().is_autoplaying());
        assert_eq!(c.state().active_index(), Some(1));

        run_for(&mut c, &scheduler, ms(5000));
        assert_eq!(c.state().active_index(), Some(2));
    }

    #[test]
    fn test_repeated_manual_controls_keep_single_resume() {
        let (mut c, scheduler) = carousel(vec!["A", "B", "C"]);
        c.start().unwrap();

        c.handle_control(ManualControl::Next).unwrap();
        run_for(&mut c, &scheduler, ms(3000));
        c.handle_control(ManualControl::Previous).unwrap();
        c.handle_control(ManualControl::Indicator(2)).unwrap();

        assert_eq!(scheduler.active_of(TimerKind::ResumeAutoplay), 1);
        assert_eq!(c.state().active_index(), Some(2));

        // The first resume would have fired at 5s; it was replaced
        run_for(&mut c, &scheduler, ms(2500));
        assert!(!c.state().autoplay_enabled());

        run_for(&mut c, &scheduler, ms(2500));
        assert!(c.state().is_autoplaying());
        assert_eq!(scheduler.active_of(TimerKind::AutoplayTick), 1);
    }

    #[test]
    fn test_stale_resume_is_ignored() {
        let (mut c, scheduler) = carousel(vec!["A", "B"]);
        c.start().unwrap();
        c.handle_control(ManualControl::Next).unwrap();

        let mut queued = Vec::new();
        scheduler.advance(ms(5000), |f| queued.push(f));
        let resume = queued
            .iter()
            .copied()
            .find(|f| f.kind == TimerKind::ResumeAutoplay)
            .unwrap();

        // Another click replaces the resume before the queued one is processed
        c.handle_control(ManualControl::Next).unwrap();
        c.handle_timer(resume).unwrap();
        assert!(!c.state().autoplay_enabled());
        assert!(!c.state().is_autoplaying());
    }

    #[test]
    fn test_foreign_timer_kinds_are_ignored() {
        let (mut c, mut scheduler) = carousel(vec!["A", "B"]);
        c.start().unwrap();
        let other = scheduler.after(ms(10), TimerKind::FormSubmitted);

        c.handle_timer(TimerFired {
            id: other.id(),
            kind: TimerKind::FormSubmitted,
        })
        .unwrap();
        assert_eq!(c.state().active_index(), Some(0));
    }

    #[test]
    fn test_presenter_error_propagates() {
        let mut c = CarouselController::new(
            CarouselState::new(vec!["A", "B"]),
            FailingPresenter,
            ManualScheduler::new(),
            CarouselConfig::default(),
        );

        let err = c.next().unwrap_err();
        assert!(matches!(err, AppError::Presenter(_)));
    }

    #[test]
    fn test_custom_periods_are_respected() {
        let scheduler = ManualScheduler::new();
        let mut c = CarouselController::new(
            CarouselState::new(vec!["A", "B", "C"]),
            RecordingPresenter::default(),
            scheduler.clone(),
            CarouselConfig::new(ms(1000), ms(200)).unwrap(),
        );
        c.start().unwrap();

        run_for(&mut c, &scheduler, ms(1000));
        assert_eq!(c.state().active_index(), Some(1));

        c.handle_control(ManualControl::Previous).unwrap();
        run_for(&mut c, &scheduler, ms(200));
        assert!(c.state().is_autoplaying());
        run_for(&mut c, &scheduler, ms(1000));
        assert_eq!(c.state().active_index(), Some(1));
    }

    #[test]
    fn test_zero_autoplay_period_rejected() {
        let err = CarouselConfig::new(Duration::ZERO, ms(200)).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));

        let config = CarouselConfig::new(ms(1), Duration::ZERO).unwrap();
        assert_eq!(config.autoplay_period(), ms(1));
        assert_eq!(config.resume_delay(), Duration::ZERO);
    }
}

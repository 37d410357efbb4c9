use crate::async_tasks::AsyncTaskRunner;
use crate::carousel::{CarouselConfig, CarouselController, CarouselState, ManualControl};
use crate::constants::{
    COUNTER_VISIBILITY_THRESHOLD, INTRO_DURATION_MS, MIN_TERMINAL_HEIGHT, ORDER_REDIRECT_MS,
};
use crate::contact_form::{ContactForm, SUCCESS_MESSAGE};
use crate::content::{self, Feature, PricingPlan, SectionId, Stat, Testimonial};
use crate::counters::CounterAnimator;
use crate::error::Result;
use crate::navigation::{PageLayout, ScrollSpy};
use crate::notifications::{NotificationCenter, NotificationKind};
use crate::persistence::PersistenceManager;
use crate::scheduler::{Scheduler, TimerFired, TimerHandle, TimerKind};
use crate::types::{Theme, UiMode};
use crate::ui::widgets::testimonials::TestimonialsView;
use std::time::{Duration, Instant};

pub type TestimonialCarousel<S> = CarouselController<Testimonial, TestimonialsView, S>;

/// Rows taken by the navbar and the statusbar
const CHROME_HEIGHT: u16 = 2;

pub struct AppState<S = AsyncTaskRunner> {
    pub ui_mode: UiMode,
    pub should_quit: bool,
    pub theme: Theme,
    pub intro_started: Instant,

    // Page
    pub scroll: ScrollSpy,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub plans: Vec<PricingPlan>,
    pub selected_plan: usize,

    // Interactive components
    pub carousel: TestimonialCarousel<S>,
    pub counters: CounterAnimator,
    pub notifications: NotificationCenter,
    pub contact_form: ContactForm,

    scheduler: S,
    intro: Option<TimerHandle>,
    order_redirect: Option<TimerHandle>,
    persistence: Option<PersistenceManager>,
}

impl<S: Scheduler + Clone> AppState<S> {
    pub fn new(
        scheduler: S,
        carousel_config: CarouselConfig,
        theme: Theme,
        persistence: Option<PersistenceManager>,
    ) -> Self {
        let stats = content::stats();
        let targets: Vec<u64> = stats.iter().map(|s| s.target).collect();

        let carousel = CarouselController::new(
            CarouselState::new(content::testimonials()),
            TestimonialsView::default(),
            scheduler.clone(),
            carousel_config,
        );

        AppState {
            ui_mode: UiMode::Intro,
            should_quit: false,
            theme,
            intro_started: Instant::now(),
            scroll: ScrollSpy::new(
                PageLayout::standard(),
                MIN_TERMINAL_HEIGHT.saturating_sub(CHROME_HEIGHT) as usize,
            ),
            features: content::features(),
            stats,
            plans: content::pricing_plans(),
            selected_plan: 0,
            carousel,
            counters: CounterAnimator::new(&targets),
            notifications: NotificationCenter::new(),
            contact_form: ContactForm::new(),
            scheduler,
            intro: None,
            order_redirect: None,
            persistence,
        }
    }

    /// Show the intro spinner, or go straight to the page
    pub fn begin(&mut self, skip_intro: bool) -> Result<()> {
        if skip_intro {
            return self.initialize_page();
        }

        tracing::debug!("Showing intro for {}ms", INTRO_DURATION_MS);
        self.ui_mode = UiMode::Intro;
        self.intro_started = Instant::now();
        self.intro = Some(
            self.scheduler
                .after(Duration::from_millis(INTRO_DURATION_MS), TimerKind::IntroComplete),
        );
        Ok(())
    }

    pub fn is_intro(&self) -> bool {
        self.ui_mode == UiMode::Intro
    }

    fn initialize_page(&mut self) -> Result<()> {
        tracing::info!("Initializing page components");
        self.intro = None;
        self.ui_mode = UiMode::Normal;
        self.carousel.start()?;
        self.after_scroll();
        Ok(())
    }

    /// Dispatch a fired timer to whichever component owns it
    pub fn handle_timer(&mut self, fired: TimerFired) -> Result<()> {
        match fired.kind {
            TimerKind::IntroComplete => {
                if self.intro.as_ref().is_some_and(|h| h.is_for(&fired)) {
                    self.initialize_page()?;
                }
            }
            TimerKind::AutoplayTick | TimerKind::ResumeAutoplay => {
                self.carousel.handle_timer(fired)?;
            }
            TimerKind::CounterFrame => self.counters.on_frame(fired),
            TimerKind::DismissNotification(_) => self.notifications.handle_timer(fired),
            TimerKind::FormSubmitted => {
                if self.contact_form.complete_submission(fired) {
                    if self.ui_mode == UiMode::FormEditing {
                        self.ui_mode = UiMode::Normal;
                    }
                    self.notify(SUCCESS_MESSAGE, NotificationKind::Success);
                }
            }
            TimerKind::OrderRedirect => {
                if self.order_redirect.as_ref().is_some_and(|h| h.is_for(&fired)) {
                    self.order_redirect = None;
                    self.notify("Order page would open here!", NotificationKind::Success);
                }
            }
        }
        Ok(())
    }

    pub fn update_viewport_size(&mut self, _width: u16, height: u16) {
        self.scroll
            .set_viewport_height(height.saturating_sub(CHROME_HEIGHT) as usize);
        self.after_scroll();
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll.scroll_down(lines);
        self.after_scroll();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll.scroll_up(lines);
        self.after_scroll();
    }

    pub fn page_down(&mut self) {
        self.scroll.page_down();
        self.after_scroll();
    }

    pub fn page_up(&mut self) {
        self.scroll.page_up();
        self.after_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to_top();
        self.after_scroll();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.scroll_to_bottom();
        self.after_scroll();
    }

    /// Nav link activation
    pub fn jump_to_section(&mut self, id: SectionId) {
        self.scroll.scroll_to_section(id);
        self.after_scroll();
    }

    fn after_scroll(&mut self) {
        if self.is_intro() || self.counters.has_started() {
            return;
        }
        if self.scroll.visible_fraction(SectionId::Stats) >= COUNTER_VISIBILITY_THRESHOLD {
            self.counters.start(&mut self.scheduler);
        }
    }

    pub fn carousel_control(&mut self, control: ManualControl) -> Result<()> {
        self.carousel.handle_control(control)
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.notifications.show(&mut self.scheduler, message, kind)
    }

    /// Hero "Order now" button
    pub fn order_now(&mut self) {
        self.notify("Redirecting to order page...", NotificationKind::Info);
        self.order_redirect = Some(self.scheduler.after(
            Duration::from_millis(ORDER_REDIRECT_MS),
            TimerKind::OrderRedirect,
        ));
    }

    /// Hero "Learn more" button
    pub fn learn_more(&mut self) {
        self.jump_to_section(SectionId::Features);
    }

    pub fn select_next_plan(&mut self) {
        if !self.plans.is_empty() {
            self.selected_plan = (self.selected_plan + 1) % self.plans.len();
        }
    }

    pub fn select_previous_plan(&mut self) {
        if !self.plans.is_empty() {
            let count = self.plans.len();
            self.selected_plan = (self.selected_plan + count - 1) % count;
        }
    }

    /// Pricing card button
    pub fn choose_plan(&mut self) {
        let Some(name) = self.plans.get(self.selected_plan).map(|p| p.name) else {
            return;
        };
        self.notify(format!("Selected {} plan!", name), NotificationKind::Success);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!("Theme switched to {:?}", self.theme);

        if let Some(persistence) = &self.persistence {
            if let Err(e) = persistence.save_dark_mode(self.theme.is_dark()) {
                tracing::error!("Failed to save dark mode preference: {}", e);
            }
        }
    }

    pub fn open_contact_form(&mut self) {
        self.jump_to_section(SectionId::Contact);
        if self.contact_form.focused().is_none() {
            self.contact_form.focus_next();
        }
        self.ui_mode = UiMode::FormEditing;
    }

    pub fn close_contact_form(&mut self) {
        self.contact_form.blur();
        self.ui_mode = UiMode::Normal;
    }

    pub fn submit_contact_form(&mut self) {
        self.contact_form.submit(&mut self.scheduler);
    }

    pub fn toggle_help(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Help => UiMode::Normal,
            UiMode::Normal | UiMode::FormEditing => UiMode::Help,
            UiMode::Intro => UiMode::Intro,
        };
    }
}

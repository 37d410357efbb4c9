//! Application-wide constants

/// Minimum terminal width required to run the application
pub const MIN_TERMINAL_WIDTH: u16 = 80;

/// Minimum terminal height required to run the application
pub const MIN_TERMINAL_HEIGHT: u16 = 24;

/// Frame duration in milliseconds for the UI render loop (targeting 60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;

/// Period between automatic testimonial advances
pub const DEFAULT_AUTOPLAY_MS: u64 = 5000;

/// Delay before autoplay resumes after a manual carousel control
pub const DEFAULT_RESUME_DELAY_MS: u64 = 5000;

/// Lower bound accepted for the autoplay/resume CLI overrides
pub const MIN_CAROUSEL_MS: u64 = 500;

/// Upper bound accepted for the autoplay/resume CLI overrides
pub const MAX_CAROUSEL_MS: u64 = 60_000;

/// How long the intro spinner is shown before the page initializes
pub const INTRO_DURATION_MS: u64 = 3000;

/// Total duration of one stat counter animation
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Frame period of the stat counter animation
pub const COUNTER_FRAME_MS: u64 = 16;

/// Fraction of the stats section that must be on screen to start counting
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Lifetime of a toast notification before it is dismissed
pub const NOTIFICATION_LIFETIME_MS: u64 = 5000;

/// Simulated round-trip of a contact form submission
pub const FORM_SUBMIT_MS: u64 = 2000;

/// Delay between the two order-button toasts
pub const ORDER_REDIRECT_MS: u64 = 1000;

/// Rows occupied by the navbar; nav jumps land this far above a section
pub const NAV_HEIGHT_LINES: usize = 1;

/// Scroll-spy lead: a section counts as current this many rows early
pub const SCROLL_SPY_OFFSET_LINES: usize = 3;

/// Scroll offset beyond which the navbar switches to its compact style
pub const NAVBAR_SCROLLED_THRESHOLD: usize = 5;

/// Maximum length for a single contact form field (characters)
pub const MAX_FORM_FIELD_LENGTH: usize = 500;

/// Maximum width of wrapped testimonial quotes
pub const QUOTE_WRAP_WIDTH: usize = 64;

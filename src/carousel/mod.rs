//! Testimonial carousel
//!
//! The controller owns the carousel state and its two timers (autoplay
//! tick and resume-after-delay). Rendering is delegated to a [`Presenter`]
//! so the same controller drives the terminal UI and the tests.

pub mod controller;
pub mod state;

pub use controller::{CarouselConfig, CarouselController, ManualControl, Presenter, TrackOffset};
pub use state::CarouselState;

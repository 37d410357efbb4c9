//! UI widget components
//!
//! This module contains reusable UI components including popups,
//! the intro spinner, toasts and the testimonial carousel presenter.

pub mod loading;
pub mod notifications;
pub mod popups;
pub mod testimonials;

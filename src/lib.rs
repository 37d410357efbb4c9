// Library exports for the binary and for testing
pub mod app;
pub mod async_tasks;
pub mod carousel;
pub mod cli;
pub mod constants;
pub mod contact_form;
pub mod content;
pub mod counters;
pub mod error;
pub mod navigation;
pub mod notifications;
pub mod persistence;
pub mod scheduler;
pub mod types;
pub mod ui;

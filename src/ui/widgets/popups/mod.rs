//! Modal popup components

pub mod help;

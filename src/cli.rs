//! Command-line interface parsing and validation
//!
//! This module handles CLI argument parsing using clap and validates
//! user inputs for correctness.

use crate::carousel::CarouselConfig;
use crate::constants::{DEFAULT_AUTOPLAY_MS, DEFAULT_RESUME_DELAY_MS, MAX_CAROUSEL_MS, MIN_CAROUSEL_MS};
use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    /// Saved preference, else detect from the terminal background
    Auto,
    Dark,
    Light,
}

#[derive(Parser, Debug)]
#[command(name = "technova")]
#[command(version = "0.0.1")]
#[command(about = "The TechNova Pro landing page, in your terminal", long_about = None)]
pub struct Cli {
    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Testimonial autoplay period in milliseconds (500-60000)
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_AUTOPLAY_MS)]
    pub autoplay_ms: u64,

    /// Delay before autoplay resumes after manual navigation (500-60000)
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_RESUME_DELAY_MS)]
    pub resume_ms: u64,

    /// Skip the intro loading screen
    #[arg(long)]
    pub skip_intro: bool,

    /// Color theme
    #[arg(short = 't', long, value_enum, default_value_t = ThemeChoice::Auto)]
    pub theme: ThemeChoice,
}

impl Cli {
    /// Validate CLI arguments
    /// Returns error if a carousel timing is out of bounds (500-60000)
    pub fn validate(&self) -> Result<(), String> {
        check_carousel_ms("Autoplay period", self.autoplay_ms)?;
        check_carousel_ms("Resume delay", self.resume_ms)?;
        Ok(())
    }

    pub fn carousel_config(&self) -> crate::error::Result<CarouselConfig> {
        CarouselConfig::new(
            Duration::from_millis(self.autoplay_ms),
            Duration::from_millis(self.resume_ms),
        )
    }
}

fn check_carousel_ms(name: &str, value: u64) -> Result<(), String> {
    if value < MIN_CAROUSEL_MS {
        return Err(format!("{} too small (minimum {}ms)", name, MIN_CAROUSEL_MS));
    }
    if value > MAX_CAROUSEL_MS {
        return Err(format!("{} too large (maximum {}ms)", name, MAX_CAROUSEL_MS));
    }
    Ok(())
}

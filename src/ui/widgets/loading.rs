//! Intro spinner with a timed progress bar

use crate::types::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::{Duration, Instant};

/// Spinner animation styles
#[derive(Debug, Clone, Copy)]
pub enum SpinnerStyle {
    /// Braille dots: ⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏
    Dots,
}

impl SpinnerStyle {
    fn frames(&self) -> &'static [&'static str] {
        match self {
            Self::Dots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        }
    }

    fn frame_at(&self, elapsed: Duration) -> &'static str {
        let frames = self.frames();
        let idx = (elapsed.as_millis() / 80) as usize % frames.len();
        frames[idx]
    }
}

/// Loading indicator that fills up over a known duration
pub struct LoadingWidget {
    style: SpinnerStyle,
    message: String,
    started: Instant,
    duration: Duration,
}

impl LoadingWidget {
    pub fn new(message: impl Into<String>, started: Instant, duration: Duration) -> Self {
        Self {
            style: SpinnerStyle::Dots,
            message: message.into(),
            started,
            duration,
        }
    }

    /// Completed share in percent, capped at 100
    pub fn percent(&self) -> u16 {
        if self.duration.is_zero() {
            return 100;
        }
        let ratio = self.started.elapsed().as_secs_f64() / self.duration.as_secs_f64();
        (ratio * 100.0).min(100.0) as u16
    }

    /// Render the loading widget as a centered popup
    pub fn render(&self, f: &mut Frame, area: Rect, palette: Palette) {
        let spinner_char = self.style.frame_at(self.started.elapsed());
        let percent = self.percent() as usize;

        let bar_width = 40;
        let filled = (bar_width * percent) / 100;
        let progress_bar = format!(
            "[{}{}]",
            "█".repeat(filled),
            "░".repeat(bar_width - filled)
        );

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    spinner_char,
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(self.message.clone(), Style::default().fg(palette.text)),
            ]),
            Line::raw(""),
            Line::styled(progress_bar, Style::default().fg(palette.primary)),
            Line::styled(format!("{}%", percent), Style::default().fg(palette.muted)),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.primary))
                .title(" Loading ")
                .title_style(
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        // Center the widget
        let area = centered_rect(60, 8, area);
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

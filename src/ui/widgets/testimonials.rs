//! Terminal presenter for the testimonial carousel

use crate::carousel::{Presenter, TrackOffset};
use crate::constants::QUOTE_WRAP_WIDTH;
use crate::content::Testimonial;
use crate::error::Result;
use crate::types::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const TRACK_WIDTH: usize = 30;

/// Last instructions received from the carousel controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialsView {
    active_item: Option<usize>,
    active_indicator: Option<usize>,
    offset: Option<TrackOffset>,
}

impl Presenter for TestimonialsView {
    fn set_active_item(&mut self, index: usize) -> Result<()> {
        self.active_item = Some(index);
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

impl TestimonialsView {
    pub fn active_item(&self) -> Option<usize> {
        self.active_item
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.active_indicator
    }

    pub fn offset(&self) -> Option<TrackOffset> {
        self.offset
    }

    /// Draw the active card, the indicator dots and the track position
    pub fn lines(&self, items: &[Testimonial], palette: Palette, width: usize) -> Vec<Line<'static>> {
        let Some(item) = self.active_item.and_then(|idx| items.get(idx)) else {
            return vec![Line::styled(
                "No testimonials yet",
                Style::default().fg(palette.muted),
            )];
        };

        let mut lines = Vec::new();

        let stars = "★".repeat(item.rating as usize) + &"☆".repeat(5 - item.rating.min(5) as usize);
        lines.push(Line::styled(stars, Style::default().fg(palette.accent)));
        lines.push(Line::raw(""));

        let wrap_width = width.clamp(20, QUOTE_WRAP_WIDTH);
        let quote = format!("“{}”", item.quote);
        for chunk in textwrap::wrap(&quote, wrap_width) {
            lines.push(Line::styled(
                chunk.into_owned(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("— {}", item.author),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(", {}", item.role), Style::default().fg(palette.muted)),
        ]));
        lines.push(Line::raw(""));

        lines.push(self.indicator_line(items.len(), palette));
        if let Some(offset) = self.offset {
            lines.push(track_line(offset, palette));
        }

        lines
    }

    fn indicator_line(&self, count: usize, palette: Palette) -> Line<'static> {
        let mut spans = vec![Span::styled("◀ h   ", Style::default().fg(palette.muted))];
        for idx in 0..count {
            let (dot, color) = if Some(idx) == self.active_indicator {
                ("●", palette.primary)
            } else {
                ("○", palette.muted)
            };
            spans.push(Span::styled(format!("{} ", dot), Style::default().fg(color)));
        }
        spans.push(Span::styled("  l ▶", Style::default().fg(palette.muted)));
        Line::from(spans)
    }
}

/// Strip of `count` pages with the visible page highlighted
fn track_line(offset: TrackOffset, palette: Palette) -> Line<'static> {
    let count = offset.count().max(1);
    let page = TRACK_WIDTH / count;
    let start = ((offset.track_percent() / 100.0) * TRACK_WIDTH as f64).round() as usize;
    let start = start.min(TRACK_WIDTH.saturating_sub(page));

    Line::from(vec![
        Span::styled("─".repeat(start), Style::default().fg(palette.bar)),
        Span::styled("━".repeat(page), Style::default().fg(palette.primary)),
        Span::styled(
            "─".repeat(TRACK_WIDTH - start - page),
            Style::default().fg(palette.bar),
        ),
    ])
}

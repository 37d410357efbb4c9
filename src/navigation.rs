//! Page scrolling, scroll-spy and reveal-on-scroll
//!
//! The page is a vertical stack of fixed-height sections. [`ScrollSpy`]
//! owns the scroll position and recomputes which nav link is current and
//! which sections have been revealed every time the position changes.

use crate::constants::{NAV_HEIGHT_LINES, NAVBAR_SCROLLED_THRESHOLD, SCROLL_SPY_OFFSET_LINES};
use crate::content::SectionId;
use std::collections::HashSet;

/// Share of a section that must be on screen before it is revealed
const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

impl SectionSpan {
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// Vertical positions of every section
#[derive(Debug, Clone)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
}

impl PageLayout {
    pub fn new(sections: &[SectionId]) -> Self {
        let mut top = 0;
        let spans = sections
            .iter()
            .map(|&id| {
                let span = SectionSpan {
                    id,
                    top,
                    height: id.height(),
                };
                top += span.height;
                span
            })
            .collect();

        PageLayout { spans }
    }

    pub fn standard() -> Self {
        Self::new(&SectionId::ALL)
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, id: SectionId) -> Option<SectionSpan> {
        self.spans.iter().copied().find(|s| s.id == id)
    }

    pub fn total_height(&self) -> usize {
        self.spans.last().map(|s| s.bottom()).unwrap_or(0)
    }
}

/// Section whose (slightly early) range contains `scroll_offset`
///
/// Each section counts as current from `SCROLL_SPY_OFFSET_LINES` rows before
/// its top. When ranges overlap the later section wins.
pub fn active_section(layout: &PageLayout, scroll_offset: usize) -> Option<SectionId> {
    let scroll = scroll_offset as i64;
    layout
        .spans()
        .iter()
        .rev()
        .find(|span| {
            let top = span.top as i64 - SCROLL_SPY_OFFSET_LINES as i64;
            scroll >= top && scroll < top + span.height as i64
        })
        .map(|span| span.id)
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    layout: PageLayout,
    scroll_offset: usize,
    viewport_height: usize,
    active: Option<SectionId>,
    revealed: HashSet<SectionId>,
}

impl ScrollSpy {
    pub fn new(layout: PageLayout, viewport_height: usize) -> Self {
        let mut spy = ScrollSpy {
            layout,
            scroll_offset: 0,
            viewport_height,
            active: None,
            revealed: HashSet::new(),
        };
        spy.refresh();
        spy
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Nav link to highlight
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(&id)
    }

    /// Navbar switches to its compact style once the page has moved
    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset > NAVBAR_SCROLLED_THRESHOLD
    }

    pub fn max_scroll(&self) -> usize {
        self.layout
            .total_height()
            .saturating_sub(self.viewport_height)
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.refresh();
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_to(self.scroll_offset.saturating_add(lines));
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_to(self.scroll_offset.saturating_sub(lines));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Jump so the section sits just under the navbar
    pub fn scroll_to_section(&mut self, id: SectionId) {
        if let Some(span) = self.layout.span(id) {
            tracing::debug!("Scrolling to section '{}'", id.anchor());
            self.scroll_to(span.top.saturating_sub(NAV_HEIGHT_LINES));
        }
    }

    /// Fraction (0.0..=1.0) of a section currently inside the viewport
    pub fn visible_fraction(&self, id: SectionId) -> f64 {
        let Some(span) = self.layout.span(id) else {
            return 0.0;
        };
        if span.height == 0 {
            return 0.0;
        }

        let view_top = self.scroll_offset;
        let view_bottom = self.scroll_offset + self.viewport_height;
        let overlap_top = span.top.max(view_top);
        let overlap_bottom = span.bottom().min(view_bottom);

        overlap_bottom.saturating_sub(overlap_top) as f64 / span.height as f64
    }

    fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_scroll());
        self.refresh();
    }

    fn refresh(&mut self) {
        let active = active_section(&self.layout, self.scroll_offset);
        if active != self.active {
            tracing::trace!("Active nav link: {:?}", active);
            self.active = active;
        }

        let newly_visible: Vec<SectionId> = self
            .layout
            .spans()
            .iter()
            .map(|span| span.id)
            .filter(|id| !self.revealed.contains(id))
            .filter(|&id| self.visible_fraction(id) >= REVEAL_THRESHOLD)
            .collect();

        for id in newly_visible {
            tracing::debug!("Revealing section '{}'", id.anchor());
            self.revealed.insert(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy(viewport: usize) -> ScrollSpy {
        ScrollSpy::new(PageLayout::standard(), viewport)
    }

    #[test]
    fn test_layout_stacks_sections() {
        let layout = PageLayout::standard();
        let home = layout.span(SectionId::Home).unwrap();
        let features = layout.span(SectionId::Features).unwrap();
        assert_eq!(home.top, 0);
        assert_eq!(features.top, home.height);
        assert_eq!(
            layout.total_height(),
            SectionId::ALL.iter().map(|s| s.height()).sum::<usize>()
        );
    }

    #[test]
    fn test_active_section_at_top_is_home() {
        let layout = PageLayout::standard();
        assert_eq!(active_section(&layout, 0), Some(SectionId::Home));
    }

    #[test]
    fn test_active_section_switches_early() {
        let layout = PageLayout::standard();
        let features = layout.span(SectionId::Features).unwrap();
        let early = features.top - SCROLL_SPY_OFFSET_LINES;

        assert_eq!(active_section(&layout, early - 1), Some(SectionId::Home));
        assert_eq!(active_section(&layout, early), Some(SectionId::Features));
    }

    #[test]
    fn test_active_section_past_end_is_none() {
        let layout = PageLayout::standard();
        assert_eq!(active_section(&layout, layout.total_height() + 10), None);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut spy = spy(20);
        spy.scroll_up(5);
        assert_eq!(spy.scroll_offset(), 0);

        spy.scroll_down(10_000);
        assert_eq!(spy.scroll_offset(), spy.max_scroll());
    }

    #[test]
    fn test_scroll_to_section_lands_under_navbar() {
        let mut spy = spy(20);
        spy.scroll_to_section(SectionId::Stats);

        let stats = spy.layout().span(SectionId::Stats).unwrap();
        assert_eq!(spy.scroll_offset(), stats.top - NAV_HEIGHT_LINES);
        assert_eq!(spy.active(), Some(SectionId::Stats));
    }

    #[test]
    fn test_navbar_scrolled_threshold() {
        let mut spy = spy(20);
        assert!(!spy.is_scrolled());
        spy.scroll_down(NAVBAR_SCROLLED_THRESHOLD);
        assert!(!spy.is_scrolled());
        spy.scroll_down(1);
        assert!(spy.is_scrolled());
    }

    #[test]
    fn test_reveal_is_permanent() {
        let mut spy = spy(20);
        assert!(spy.is_revealed(SectionId::Home));
        assert!(!spy.is_revealed(SectionId::Pricing));

        spy.scroll_to_section(SectionId::Pricing);
        assert!(spy.is_revealed(SectionId::Pricing));

        spy.scroll_to_top();
        assert!(spy.is_revealed(SectionId::Pricing));
    }

    #[test]
    fn test_visible_fraction() {
        let spy = spy(SectionId::Home.height());
        assert_eq!(spy.visible_fraction(SectionId::Home), 1.0);
        assert_eq!(spy.visible_fraction(SectionId::Contact), 0.0);
    }

    #[test]
    fn test_shrinking_viewport_keeps_offset_valid() {
        let mut spy = spy(10);
        spy.scroll_to_bottom();
        spy.set_viewport_height(40);
        assert!(spy.scroll_offset() <= spy.max_scroll());
    }
}

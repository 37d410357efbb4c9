use crate::app::AppState;
use crate::constants::INTRO_DURATION_MS;
use crate::content::{PRODUCT_NAME, SectionId};
use crate::scheduler::Scheduler;
use crate::types::UiMode;
use crate::ui::page::page_lines;
use crate::ui::widgets::loading::LoadingWidget;
use crate::ui::widgets::notifications::render_notifications;
use crate::ui::widgets::popups::help::render_help_popup;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use std::time::Duration;

pub fn render<S: Scheduler + Clone>(f: &mut Frame, app: &AppState<S>) {
    let palette = app.theme.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.area(),
    );

    if app.ui_mode == UiMode::Intro {
        LoadingWidget::new(
            format!("Loading {}", PRODUCT_NAME),
            app.intro_started,
            Duration::from_millis(INTRO_DURATION_MS),
        )
        .render(f, f.area(), palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Statusbar
        ])
        .split(f.area());

    render_navbar(f, app, chunks[0]);
    render_page(f, app, chunks[1]);
    render_statusbar(f, app, chunks[2]);

    render_notifications(f, app.notifications.items(), chunks[1], palette);

    if app.ui_mode == UiMode::Help {
        render_help_popup(f, palette);
    }
}

fn render_navbar<S: Scheduler + Clone>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let palette = app.theme.palette();
    // Compact style once the page has scrolled
    let bar_style = if app.scroll.is_scrolled() {
        Style::default().bg(palette.bar)
    } else {
        Style::default().bg(palette.background)
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", PRODUCT_NAME),
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )];

    for (idx, section) in SectionId::ALL.iter().enumerate() {
        let style = if app.scroll.active() == Some(*section) {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{} {}", idx + 1, section.label()), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);
}

fn render_page<S: Scheduler + Clone>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let lines = page_lines(app, area.width as usize);
    let offset = app.scroll.scroll_offset().min(u16::MAX as usize) as u16;

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn render_statusbar<S: Scheduler + Clone>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let palette = app.theme.palette();
    let carousel = app.carousel.state();

    let autoplay = if carousel.is_autoplaying() {
        "autoplay"
    } else if carousel.resume_pending() {
        "paused"
    } else {
        "stopped"
    };

    let position = match carousel.active_index() {
        Some(idx) => format!("{}/{}", idx + 1, carousel.len()),
        None => "-".to_string(),
    };

    let mode = match app.ui_mode {
        UiMode::FormEditing => "EDIT FORM  Tab next field | Enter send | Esc done",
        _ => "? help | q quit",
    };

    let status_text = format!(
        " Review {} ({}) | {} theme | {}",
        position,
        autoplay,
        if app.theme.is_dark() { "dark" } else { "light" },
        mode
    );

    let status = Paragraph::new(status_text).style(Style::default().fg(palette.text).bg(palette.bar));
    f.render_widget(status, area);
}

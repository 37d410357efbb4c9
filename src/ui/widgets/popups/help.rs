use crate::types::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render_help_popup(f: &mut Frame, palette: Palette) {
    // Calculate popup size (70% width, 80% height)
    let popup_width = (f.area().width as f32 * 0.7) as u16;
    let popup_height = (f.area().height as f32 * 0.8) as u16;

    let popup_x = (f.area().width.saturating_sub(popup_width)) / 2;
    let popup_y = (f.area().height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    };

    let heading = |text: &'static str| {
        Line::from(vec![Span::styled(
            text,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(palette.accent),
        )])
    };

    let help_text = vec![
        heading("NAVIGATION"),
        Line::from(""),
        Line::from("  j / ↓              Scroll down one line"),
        Line::from("  k / ↑              Scroll up one line"),
        Line::from("  Space / PgDn       Scroll down full page"),
        Line::from("  Shift-Space / PgUp Scroll up full page"),
        Line::from("  g / G              Top/bottom of the page"),
        Line::from("  1 - 6              Jump to section"),
        Line::from(""),
        heading("TESTIMONIALS"),
        Line::from(""),
        Line::from("  h / ←              Previous testimonial"),
        Line::from("  l / →              Next testimonial"),
        Line::from("  Alt-1 .. Alt-9     Jump to testimonial"),
        Line::from(""),
        heading("ACTIONS"),
        Line::from(""),
        Line::from("  o                  Order now"),
        Line::from("  m                  Learn more"),
        Line::from("  p / P              Next/previous pricing plan"),
        Line::from("  Enter              Choose highlighted plan"),
        Line::from("  c                  Edit contact form (Tab moves, Enter sends)"),
        Line::from("  x                  Dismiss latest notification"),
        Line::from("  d                  Toggle dark mode"),
        Line::from(""),
        heading("APPLICATION"),
        Line::from(""),
        Line::from("  ? / F1             Toggle this help"),
        Line::from("  q / Ctrl-c         Quit"),
        Line::from("  Esc                Close popup/form"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(palette.muted),
        )]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.primary))
                .style(Style::default().bg(palette.background).fg(palette.text)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

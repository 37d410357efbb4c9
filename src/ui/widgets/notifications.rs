//! Toast stack in the top-right corner

use crate::notifications::{Notification, NotificationKind};
use crate::types::{ERROR_COLOR, Palette, SUCCESS_COLOR, WARNING_COLOR};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

fn kind_color(kind: NotificationKind, palette: Palette) -> Color {
    match kind {
        NotificationKind::Success => SUCCESS_COLOR,
        NotificationKind::Error => ERROR_COLOR,
        NotificationKind::Warning => WARNING_COLOR,
        NotificationKind::Info => palette.primary,
    }
}

/// Stack toasts downward from just below the navbar, newest on top
pub fn render_notifications(f: &mut Frame, items: &[Notification], area: Rect, palette: Palette) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1);
    let mut y = area.y + 1;

    for notification in items.iter().rev() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }

        let toast_area = Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        let color = kind_color(notification.kind, palette);

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", notification.kind.glyph()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(notification.message.clone(), Style::default().fg(palette.text)),
        ]);

        let toast = Paragraph::new(line).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(notification.title())
                .title_style(Style::default().fg(palette.muted))
                .style(Style::default().bg(palette.background)),
        );

        f.render_widget(Clear, toast_area);
        f.render_widget(toast, toast_area);
        y += TOAST_HEIGHT;
    }
}

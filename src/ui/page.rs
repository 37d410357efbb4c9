//! Builds the scrollable page, one fixed-height block per section

use crate::app::AppState;
use crate::contact_form::FormField;
use crate::content::{HERO_BLURB, PRODUCT_NAME, SectionId, TAGLINE};
use crate::scheduler::Scheduler;
use crate::types::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// All page lines, top to bottom
pub fn page_lines<S: Scheduler + Clone>(app: &AppState<S>, width: usize) -> Vec<Line<'static>> {
    let palette = app.theme.palette();
    let mut lines = Vec::new();

    for span in app.scroll.layout().spans() {
        let section = match span.id {
            SectionId::Home => home_lines(palette, width),
            SectionId::Features => feature_lines(app, palette, width),
            SectionId::Stats => stat_lines(app, palette),
            SectionId::Testimonials => testimonial_lines(app, palette, width),
            SectionId::Pricing => pricing_lines(app, palette),
            SectionId::Contact => contact_lines(app, palette),
        };

        let mut section = fit(section, span.height);
        if !app.scroll.is_revealed(span.id) {
            section = section
                .into_iter()
                .map(|l| l.patch_style(Style::default().add_modifier(Modifier::DIM)))
                .collect();
        }
        lines.extend(section);
    }

    lines
}

/// Pad or truncate to exactly `height` lines
fn fit(mut lines: Vec<Line<'static>>, height: usize) -> Vec<Line<'static>> {
    lines.truncate(height);
    lines.resize(height, Line::raw(""));
    lines
}

fn heading(title: &str, palette: Palette) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            format!("  {}", title),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ]
}

fn wrapped(text: &str, width: usize, indent: &str, style: Style) -> Vec<Line<'static>> {
    let wrap_width = width.saturating_sub(indent.len() * 2).max(20);
    textwrap::wrap(text, wrap_width)
        .into_iter()
        .map(|chunk| Line::styled(format!("{}{}", indent, chunk), style))
        .collect()
}

fn home_lines(palette: Palette, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(""),
        Line::styled(
            format!("  {}", PRODUCT_NAME),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("  {}", TAGLINE),
            Style::default().fg(palette.accent),
        ),
        Line::raw(""),
    ];
    lines.extend(wrapped(
        HERO_BLURB,
        width,
        "  ",
        Style::default().fg(palette.text),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "[ o  Order Now ]",
            Style::default()
                .fg(palette.background)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[ m  Learn More ]", Style::default().fg(palette.primary)),
    ]));
    lines
}

fn feature_lines<S: Scheduler + Clone>(
    app: &AppState<S>,
    palette: Palette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = heading("Features", palette);
    for feature in &app.features {
        lines.push(Line::styled(
            format!("  ◆ {}", feature.title),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ));
        lines.extend(wrapped(
            feature.description,
            width,
            "    ",
            Style::default().fg(palette.muted),
        ));
        lines.push(Line::raw(""));
    }
    lines
}

fn stat_lines<S: Scheduler + Clone>(app: &AppState<S>, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = heading("By the Numbers", palette);
    for (stat, counter) in app.stats.iter().zip(app.counters.counters()) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>8}{:<2}", counter.displayed(), stat.suffix),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", stat.label), Style::default().fg(palette.text)),
        ]));
    }
    lines
}

fn testimonial_lines<S: Scheduler + Clone>(
    app: &AppState<S>,
    palette: Palette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = heading("What Our Customers Say", palette);
    let card = app
        .carousel
        .presenter()
        .lines(app.carousel.state().items(), palette, width.saturating_sub(4));
    lines.extend(card.into_iter().map(|l| {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(l.spans);
        Line::from(spans)
    }));
    lines
}

fn pricing_lines<S: Scheduler + Clone>(app: &AppState<S>, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = heading("Pricing", palette);
    for (idx, plan) in app.plans.iter().enumerate() {
        let selected = idx == app.selected_plan;
        let marker = if selected { "▶" } else { " " };
        let name_style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };

        let mut header = vec![
            Span::styled(format!("  {} {:<12}", marker, plan.name), name_style),
            Span::styled(
                format!("{:>6}", plan.price),
                Style::default().fg(palette.primary),
            ),
        ];
        if selected {
            header.push(Span::styled(
                "   [Enter] Choose Plan",
                Style::default().fg(palette.muted),
            ));
        }
        lines.push(Line::from(header));
        lines.push(Line::styled(
            format!("      {}", plan.highlights.join(" · ")),
            Style::default().fg(palette.muted),
        ));
        lines.push(Line::raw(""));
    }
    lines
}

fn contact_lines<S: Scheduler + Clone>(app: &AppState<S>, palette: Palette) -> Vec<Line<'static>> {
    let form = &app.contact_form;
    let mut lines = heading("Get in Touch", palette);

    for field in FormField::ALL {
        let focused = form.focused() == Some(field);
        let value = form.value(field);

        // Floating label sits above the input; otherwise it is the placeholder
        if form.is_label_floating(field) {
            lines.push(Line::styled(
                format!("    {}", field.label()),
                Style::default().fg(palette.primary),
            ));
        } else {
            lines.push(Line::raw(""));
        }

        let border_style = if focused {
            Style::default().fg(palette.primary)
        } else {
            Style::default().fg(palette.bar)
        };
        let content = if value.is_empty() && !focused {
            Span::styled(field.label().to_string(), Style::default().fg(palette.muted))
        } else {
            let cursor = if focused { "▏" } else { "" };
            Span::styled(format!("{}{}", value, cursor), Style::default().fg(palette.text))
        };
        lines.push(Line::from(vec![
            Span::styled("  │ ", border_style),
            content,
        ]));
    }

    lines.push(Line::raw(""));
    let button_style = if form.is_sending() {
        Style::default().fg(palette.muted).bg(palette.bar)
    } else {
        Style::default()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {} ]", form.button_label()), button_style),
    ]));
    lines
}

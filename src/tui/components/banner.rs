// Banner component - hero text over the particle field
//
// The particle field is drawn on a Canvas whose coordinate space matches
// the simulation viewport, so particle positions project 1:1. Hero title
// and subtitle are centered on top of the animation.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Paragraph,
    },
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(field) = app.banner() else {
        f.render_widget(block, area);
        return;
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, field.width()])
        .y_bounds([0.0, field.height()])
        .paint(|ctx| {
            for p in field.particles() {
                ctx.draw(&Circle {
                    x: p.x,
                    // Canvas y grows upward, the simulation's grows downward
                    y: field.height() - p.y,
                    radius: p.r / 4.0,
                    color: app.theme.accent,
                });
            }
        });

    f.render_widget(canvas, area);

    // Hero text centered over the animation
    if let Some(store) = app.store() {
        let site = store.site();
        let mut lines: Vec<Line> = Vec::new();
        if !site.hero_title.is_empty() {
            lines.push(Line::from(site.hero_title.as_str()).style(
                Style::default()
                    .fg(app.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if !site.hero_subtitle.is_empty() {
            lines.push(
                Line::from(site.hero_subtitle.as_str())
                    .style(Style::default().fg(app.theme.muted)),
            );
        }

        if !lines.is_empty() {
            let text_height = lines.len() as u16;
            let inner_top = area.y + (area.height.saturating_sub(text_height)) / 2;
            let text_area = Rect::new(
                area.x + 1,
                inner_top,
                area.width.saturating_sub(2),
                text_height.min(area.height),
            );
            let hero = Paragraph::new(lines).centered();
            f.render_widget(hero, text_area);
        }
    }
}

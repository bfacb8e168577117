// Title bar component
//
// Top line of the screen: site name, bundle source, and a reload spinner
// while a fetch is in flight.

use crate::tui::app::{App, LoadState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let site_name = app
        .store()
        .map(|s| s.site().site_name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("kiosk");

    let activity = if app.reloading {
        " ⟳ reloading"
    } else if app.load == LoadState::Loading {
        " ⟳ loading"
    } else {
        ""
    };

    let title_text = format!(" ▣ {}{} ── {}", site_name, activity, app.source_label());

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.accent))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}

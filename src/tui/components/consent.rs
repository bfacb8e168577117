// Consent banner component
//
// A one-line overlay pinned above the status bar until the user accepts.
// Acceptance is persisted once; the banner never comes back on later runs.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if !app.consent_visible {
        return;
    }

    let height = 3;
    let banner_area = Rect::new(
        area.x,
        area.bottom().saturating_sub(height + 1),
        area.width,
        height,
    );

    let line = Line::from(vec![
        Span::styled(
            " This reader stores a small settings file on disk. ",
            Style::default().fg(app.theme.foreground),
        ),
        Span::styled(
            "[a] accept",
            Style::default()
                .fg(app.theme.ok)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let banner = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.highlight))
            .style(Style::default().bg(app.theme.background)),
    );

    f.render_widget(Clear, banner_area);
    f.render_widget(banner, banner_area);
}

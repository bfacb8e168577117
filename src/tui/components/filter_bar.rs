// Filter bar component
//
// One line of category controls plus the search input. The active control
// is highlighted; while a search is active no category is highlighted and
// the search term shows on the right.

use crate::filter::FilterState;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    let active = app.active_filter_pos();
    for (i, label) in app.filter_labels().iter().enumerate() {
        let style = if active == Some(i) {
            Style::default()
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.muted)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    // Search segment
    if app.search_mode {
        spans.push(Span::styled(
            format!("│ search: {}█", app.search_input),
            Style::default().fg(app.theme.highlight),
        ));
    } else if let Some(filter) = &app.filter {
        if let FilterState::BySearch(term) = filter.state() {
            spans.push(Span::styled(
                format!("│ search: \"{}\"", term),
                Style::default().fg(app.theme.highlight),
            ));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Filter "),
    );

    f.render_widget(bar, area);
}

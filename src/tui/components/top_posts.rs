// Top posts panel
//
// Sidebar list of the three highest-ranked articles (pinned first, then by
// views). Shows title plus the hard-truncated excerpt.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .top_posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let marker = if post.pinned { "⬘" } else { " " };
            let title = Line::from(vec![
                Span::styled(
                    format!(" {}. {} ", i + 1, marker),
                    Style::default().fg(app.theme.accent),
                ),
                Span::styled(
                    post.title.as_str(),
                    Style::default()
                        .fg(app.theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({} views)", post.views),
                    Style::default().fg(app.theme.muted),
                ),
            ]);
            let excerpt = Line::from(Span::styled(
                format!("      {}", post.excerpt),
                Style::default().fg(app.theme.muted),
            ));
            ListItem::new(vec![title, excerpt])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Top Posts "),
    );

    f.render_widget(list, area);
}

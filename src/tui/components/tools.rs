// Tools panel
//
// Sidebar list of external tool links. Icons arrive as CSS class names
// from the CMS ("fa-code"); they render as-is, muted.

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
        .tools
        .iter()
        .map(|t| {
            let name = Line::from(vec![
                Span::styled(
                    format!(" ⚒ {} ", t.name),
                    Style::default()
                        .fg(app.theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("[{}]", t.icon),
                    Style::default().fg(app.theme.muted),
                ),
            ]);
            let detail = Line::from(Span::styled(
                format!("   {} → {}", t.description, t.link),
                Style::default().fg(app.theme.muted),
            ));
            ListItem::new(vec![name, detail])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Tools "),
    );

    f.render_widget(list, area);
}

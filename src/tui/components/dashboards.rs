// Dashboards panel
//
// Sidebar list of externally hosted dashboards: title, description, and
// the link. The image path shows as muted metadata (a terminal cannot
// render the artwork, but the placeholder substitution is still visible).

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
        .dashboards
        .iter()
        .map(|d| {
            let title = Line::from(Span::styled(
                format!(" ▦ {}", d.title),
                Style::default()
                    .fg(app.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ));
            let description = Line::from(Span::styled(
                format!("   {}", d.description),
                Style::default().fg(app.theme.foreground),
            ));
            let meta = Line::from(Span::styled(
                format!("   {} → {}", d.image, d.link),
                Style::default().fg(app.theme.muted),
            ));
            ListItem::new(vec![title, description, meta])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Dashboards "),
    );

    f.render_widget(list, area);
}

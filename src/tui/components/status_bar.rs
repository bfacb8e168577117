// Status bar component
//
// Bottom line: active filter, visible/total article counts, uptime, the
// footer line (current year and sponsor link), and the most recent log
// entry. Narrow terminals drop the footer segment.

use crate::tui::app::App;
use chrono::{Datelike, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let filter_label = app
        .filter
        .as_ref()
        .map(|fc| fc.state().label())
        .unwrap_or_else(|| "all".to_string());

    let total = app
        .store()
        .map(|s| s.articles().len())
        .unwrap_or(0);

    // Footer line the page template computes at render time
    let footer = {
        let sponsor = app
            .store()
            .map(|s| s.site().sponsor_link.as_str())
            .filter(|l| !l.is_empty());
        match sponsor {
            Some(link) => format!("© {} · sponsor: {}", Utc::now().year(), link),
            None => format!("© {}", Utc::now().year()),
        }
    };

    let log_line = app
        .log_buffer
        .latest()
        .map(|e| format!("{:5} {}", e.level.as_str(), e.message))
        .unwrap_or_default();

    let status_text = if area.width < 100 {
        format!(
            " {} │ {}/{} articles │ {} │ {}",
            filter_label,
            app.card_count(),
            total,
            app.uptime(),
            log_line,
        )
    } else {
        format!(
            " {} │ {}/{} articles │ {} │ {} │ ?:help │ {}",
            filter_label,
            app.card_count(),
            total,
            app.uptime(),
            footer,
            log_line,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.muted))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

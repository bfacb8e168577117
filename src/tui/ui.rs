// Screen layout and modal rendering
//
// draw() composes the fixed page regions top to bottom, then layers the
// overlays (modal, consent banner, toast) on top. All region rendering is
// delegated to the components module.

use super::app::{App, LoadState};
use super::components;
use super::markdown::render_markdown;
use super::modal::Modal;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Themed background for the whole frame, unless the user keeps the
    // terminal's own
    if app.use_theme_background {
        f.render_widget(
            Block::default().style(Style::default().bg(app.theme.background)),
            area,
        );
    }

    let banner_height = if area.height >= 24 { 8 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // title bar
            Constraint::Length(banner_height), // hero banner
            Constraint::Length(3),             // filter bar
            Constraint::Min(5),                // main content
            Constraint::Length(2),             // status bar
        ])
        .split(area);

    components::title_bar::render(f, chunks[0], app);
    if banner_height > 0 {
        components::banner::render(f, chunks[1], app);
    }
    components::filter_bar::render(f, chunks[2], app);
    render_main(f, chunks[3], app);
    components::status_bar::render(f, chunks[4], app);

    if let Some(modal) = &app.modal {
        render_modal(f, area, app, modal);
    }

    components::consent::render(f, area, app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}

/// Article list on the left, sidebar panels on the right. The sidebar
/// collapses on narrow terminals.
fn render_main(f: &mut Frame, area: Rect, app: &App) {
    if area.width < 80 || app.load != LoadState::Ready {
        components::articles::render(f, area, app);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    components::articles::render(f, columns[0], app);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((app.top_posts.len() as u16 * 2) + 2),
            Constraint::Min(5),
            Constraint::Min(4),
        ])
        .split(columns[1]);

    components::top_posts::render(f, sidebar[0], app);
    components::dashboards::render(f, sidebar[1], app);
    components::tools::render(f, sidebar[2], app);
}

fn render_modal(f: &mut Frame, area: Rect, app: &App, modal: &Modal) {
    match modal {
        Modal::Help => render_help(f, area, app),
        Modal::Detail(position) => render_detail(f, area, app, *position),
        Modal::Citation { text, .. } => render_citation(f, area, app, text, modal),
    }
}

fn modal_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let rows = [
        ("←/→", "cycle category filter"),
        ("/", "search (Enter applies, Esc cancels)"),
        ("↑/↓ j/k", "select article"),
        ("Enter", "open article"),
        ("Space", "like article"),
        ("y", "copy (long selections get a citation)"),
        ("r", "reload content bundle"),
        ("a", "accept consent banner"),
        ("?", "this help"),
        ("q", "quit"),
    ];

    let mut lines: Vec<Line> = rows
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>8}  ", key),
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(app.theme.foreground)),
            ])
        })
        .collect();

    // The site's about text, when the bundle carries one
    if let Some(about) = app
        .store()
        .map(|s| s.site().about_text.as_str())
        .filter(|t| !t.is_empty())
    {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {}", about),
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let popup = modal_area(area, 50, 60);
    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(modal_block(app, " Help "));
    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn render_detail(f: &mut Frame, area: Rect, app: &App, position: usize) {
    let Some(article) = app.article_at(position) else {
        return;
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} · {} · {} views",
                article.category, article.date, article.views
            ),
            Style::default().fg(app.theme.muted),
        )),
        Line::default(),
    ];
    lines.extend(render_markdown(&article.content, &app.theme));

    let popup = modal_area(area, 80, 85);
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(modal_block(app, " Article  [y copy · Esc close] "));
    f.render_widget(Clear, popup);
    f.render_widget(detail, popup);
}

fn render_citation(f: &mut Frame, area: Rect, app: &App, text: &str, modal: &Modal) {
    let mut lines: Vec<Line> = text
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(app.theme.foreground))))
        .collect();
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            modal.citation_button_label(),
            Style::default()
                .fg(app.theme.ok)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    let popup = modal_area(area, 60, 40);
    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(modal_block(app, " Citation  [Esc close] "));
    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

fn modal_block<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight))
        .style(Style::default().bg(app.theme.background))
        .title(title)
}

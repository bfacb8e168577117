// Article list component
//
// The main content region. Shows one card per visible article (title,
// category, date, views, summary), the placeholder when nothing matches,
// a loading line while the fetch is in flight, or the load failure
// message. Never rendered empty.

use crate::projector::CardModel;
use crate::tui::app::{App, LoadState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Articles ");

    match &app.load {
        LoadState::Loading => {
            let item = ListItem::new(Line::from(Span::styled(
                " Loading content…",
                Style::default().fg(app.theme.muted),
            )));
            f.render_widget(List::new(vec![item]).block(block), area);
        }
        LoadState::Failed(message) => {
            let item = ListItem::new(Line::from(Span::styled(
                format!(" {}", message),
                Style::default()
                    .fg(app.theme.err)
                    .add_modifier(Modifier::BOLD),
            )));
            f.render_widget(List::new(vec![item]).block(block), area);
        }
        LoadState::Ready => render_cards(f, area, app, block),
    }
}

fn render_cards(f: &mut Frame, area: Rect, app: &App, block: Block) {
    let items: Vec<ListItem> = app
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| card_item(app, i, card))
        .collect();

    let list = List::new(items).block(block);

    // Each card is three rows tall; drive scrolling through ListState so
    // the selected card stays visible
    let mut state = ListState::default();
    if app.card_count() > 0 {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn card_item<'a>(app: &'a App, index: usize, card: &'a CardModel) -> ListItem<'a> {
    let card = match card {
        CardModel::Placeholder => {
            return ListItem::new(Line::from(Span::styled(
                " No articles to show.",
                Style::default()
                    .fg(app.theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        CardModel::Article(card) => card,
    };

    let selected = index == app.selected;
    let title_style = if selected {
        Style::default()
            .fg(app.theme.selection_fg)
            .bg(app.theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.theme.foreground)
            .add_modifier(Modifier::BOLD)
    };

    let mut title_spans = vec![Span::styled(
        format!(" {}{}", if selected { "▸ " } else { "  " }, card.title),
        title_style,
    )];
    if card.pinned {
        title_spans.push(Span::styled(
            " ⬘ pinned",
            Style::default().fg(app.theme.accent),
        ));
    }
    if app.is_liked(index) {
        title_spans.push(Span::styled(" ♥", Style::default().fg(app.theme.err)));
    }

    let meta = Line::from(Span::styled(
        format!(
            "    {} · {} · {} views",
            card.category, card.date, card.views
        ),
        Style::default().fg(app.theme.muted),
    ));

    let summary = Line::from(Span::styled(
        format!("    {}", card.summary),
        Style::default().fg(app.theme.foreground),
    ));

    ListItem::new(vec![Line::from(title_spans), meta, summary])
}

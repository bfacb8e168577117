// TUI application state
//
// The App is the single owner of all mutable view state: the loaded
// content store, the filter controller, the projected view-models, the
// particle banner, overlays, and the consent flag. Components receive
// read access during render; every mutation goes through a method here.

use super::components::Toast;
use super::guard::SelectionGuard;
use super::input::InputHandler;
use super::modal::Modal;
use crate::consent::ConsentStore;
use crate::content::{Article, ContentBundle, ContentStore, LoadError};
use crate::filter::{FilterController, FilterState, ALL_CATEGORY};
use crate::logging::LogBuffer;
use crate::particles::ParticleField;
use crate::projector::{
    self, derive_summary, CardModel, DashboardModel, ToolModel, TopPostModel,
};
use crate::theme::Theme;
use std::collections::HashSet;
use std::time::Instant;

/// Lifecycle of the content bundle
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Fetch in flight; the UI is inert apart from the banner
    Loading,
    /// Bundle loaded, all regions render
    Ready,
    /// Load failed; the article region shows this message
    Failed(String),
}

/// Main application state for the TUI
pub struct App {
    /// Bundle lifecycle; drives what the article region shows
    pub load: LoadState,

    /// Exclusive owner of the canonical dataset (None until loaded)
    store: Option<ContentStore>,

    /// The one mutable filter/search state object
    pub filter: Option<FilterController>,

    /// Projected article cards for the visible set (recomputed exactly
    /// once per filter/search transition or reload)
    pub cards: Vec<CardModel>,
    /// Canonical index of each visible card, parallel to `cards` when
    /// cards are articles (empty when the placeholder shows)
    visible_indices: Vec<usize>,

    /// Sidebar view-models, recomputed on load/reload only
    pub top_posts: Vec<TopPostModel>,
    pub dashboards: Vec<DashboardModel>,
    pub tools: Vec<ToolModel>,

    /// Selected position within the visible card list
    pub selected: usize,

    /// Locally liked articles, by canonical index. Purely visual,
    /// never persisted.
    liked: HashSet<usize>,

    /// Search input state ('/' opens the prompt)
    pub search_mode: bool,
    pub search_input: String,

    /// Banner simulation; replaced (old one dropped first) on resize
    banner: Option<ParticleField>,

    /// Copy interception; built from site config once the bundle loads
    pub guard: Option<SelectionGuard>,

    /// Overlays
    pub modal: Option<Modal>,
    pub detail_scroll: u16,
    pub toast: Option<Toast>,

    /// Cookie-consent banner
    consent: Option<ConsentStore>,
    pub consent_visible: bool,

    /// Whether a reload is currently in flight
    pub reloading: bool,

    pub should_quit: bool,
    pub log_buffer: LogBuffer,
    pub theme: Theme,
    /// Paint the theme background, or leave the terminal's own
    pub use_theme_background: bool,
    pub start_time: Instant,
    input_handler: InputHandler,

    /// Bundle location, for attribution and the status bar
    source_label: String,
}

impl App {
    pub fn new(
        log_buffer: LogBuffer,
        theme: Theme,
        consent: Option<ConsentStore>,
        source_label: String,
    ) -> Self {
        let consent_visible = consent.as_ref().is_some_and(|c| !c.is_accepted());

        Self {
            load: LoadState::Loading,
            store: None,
            filter: None,
            cards: Vec::new(),
            visible_indices: Vec::new(),
            top_posts: Vec::new(),
            dashboards: Vec::new(),
            tools: Vec::new(),
            selected: 0,
            liked: HashSet::new(),
            search_mode: false,
            search_input: String::new(),
            banner: None,
            guard: None,
            modal: None,
            detail_scroll: 0,
            toast: None,
            consent,
            consent_visible,
            reloading: false,
            should_quit: false,
            log_buffer,
            theme,
            use_theme_background: true,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
            source_label,
        }
    }

    // ── Bundle lifecycle ─────────────────────────────────────────────

    /// Install a load result. A successful reload replaces the store
    /// wholesale and re-derives the category vocabulary; a failure leaves
    /// nothing partially rendered.
    pub fn bundle_loaded(&mut self, result: Result<ContentBundle, LoadError>) {
        self.reloading = false;
        match result {
            Ok(bundle) => {
                let site_name = if bundle.config.site_name.is_empty() {
                    "kiosk".to_string()
                } else {
                    bundle.config.site_name.clone()
                };
                self.guard = Some(SelectionGuard::new(format!(
                    "{} ({})",
                    site_name, self.source_label
                )));

                let store = ContentStore::new(bundle);
                self.filter = Some(FilterController::new(store.articles()));
                self.top_posts = projector::project_top_posts(store.articles());
                self.dashboards = projector::project_dashboards(store.dashboards());
                self.tools = projector::project_tools(store.tools());
                self.store = Some(store);
                self.liked.clear();
                self.selected = 0;
                self.load = LoadState::Ready;
                self.reproject();
                tracing::info!("Content bundle loaded from {}", self.source_label);
            }
            Err(e) => {
                // No partial content: clear everything the regions render
                self.store = None;
                self.filter = None;
                self.cards.clear();
                self.visible_indices.clear();
                self.top_posts.clear();
                self.dashboards.clear();
                self.tools.clear();
                self.load = LoadState::Failed(format!(
                    "Failed to load content bundle: {}. Check {}.",
                    e, self.source_label
                ));
                tracing::error!("Bundle load failed: {}", e);
            }
        }
    }

    pub fn store(&self) -> Option<&ContentStore> {
        self.store.as_ref()
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Recompute the visible card list from the canonical articles.
    /// The single re-projection per state transition.
    fn reproject(&mut self) {
        let (Some(store), Some(filter)) = (&self.store, &self.filter) else {
            return;
        };

        let indexed = filter.visible_indexed(store.articles());
        self.visible_indices = indexed.iter().map(|(i, _)| *i).collect();
        let articles: Vec<&Article> = indexed.into_iter().map(|(_, a)| a).collect();
        self.cards = projector::project_article_cards(&articles);

        // Keep the selection in range after the visible set changed
        if self.selected >= self.visible_indices.len() {
            self.selected = self.visible_indices.len().saturating_sub(1);
        }
    }

    // ── Filter & search ──────────────────────────────────────────────

    /// All selectable filter labels: "all" plus the derived vocabulary
    pub fn filter_labels(&self) -> Vec<String> {
        let mut labels = vec![ALL_CATEGORY.to_string()];
        if let Some(filter) = &self.filter {
            labels.extend(filter.categories().iter().cloned());
        }
        labels
    }

    /// Position of the active category in `filter_labels` (None while a
    /// search is active)
    pub fn active_filter_pos(&self) -> Option<usize> {
        let filter = self.filter.as_ref()?;
        match filter.state() {
            FilterState::All => Some(0),
            FilterState::ByCategory(cat) => self
                .filter_labels()
                .iter()
                .position(|l| l == cat),
            FilterState::BySearch(_) => None,
        }
    }

    /// Cycle the category filter left/right through the control set
    pub fn cycle_category(&mut self, forward: bool) {
        let labels = self.filter_labels();
        if labels.len() <= 1 {
            return;
        }
        let current = self.active_filter_pos().unwrap_or(0);
        let next = if forward {
            (current + 1) % labels.len()
        } else {
            (current + labels.len() - 1) % labels.len()
        };

        if let Some(filter) = &mut self.filter {
            filter.select_category(&labels[next]);
        }
        self.reproject();
    }

    /// Apply the pending search input and leave search mode
    pub fn apply_search(&mut self) {
        let term = std::mem::take(&mut self.search_input);
        self.search_mode = false;
        if let Some(filter) = &mut self.filter {
            filter.search(term.trim());
        }
        self.reproject();
    }

    /// Leave search mode without changing the active filter
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.search_input.clear();
    }

    // ── Selection & likes ────────────────────────────────────────────

    /// Number of selectable cards (0 when the placeholder shows)
    pub fn card_count(&self) -> usize {
        self.visible_indices.len()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.card_count() {
            self.selected += 1;
        }
    }

    /// The article behind a visible card position
    pub fn article_at(&self, position: usize) -> Option<&Article> {
        let canonical = *self.visible_indices.get(position)?;
        self.store.as_ref()?.articles().get(canonical)
    }

    /// The currently selected article, if any card is selectable
    pub fn selected_article(&self) -> Option<&Article> {
        self.article_at(self.selected)
    }

    /// Whether the card at a visible position is liked
    pub fn is_liked(&self, position: usize) -> bool {
        self.visible_indices
            .get(position)
            .is_some_and(|i| self.liked.contains(i))
    }

    /// Toggle the like mark on the selected card (local visual state only)
    pub fn toggle_like(&mut self) {
        if let Some(&canonical) = self.visible_indices.get(self.selected) {
            if !self.liked.remove(&canonical) {
                self.liked.insert(canonical);
            }
        }
    }

    // ── Copy & citation ──────────────────────────────────────────────

    /// The text a copy action operates on: the summary in the list view,
    /// the full content in the detail view
    pub fn selection_text(&self) -> Option<String> {
        let article = match self.modal {
            Some(Modal::Detail(position)) => self.article_at(position)?,
            _ => self.selected_article()?,
        };
        match self.modal {
            Some(Modal::Detail(_)) => Some(article.content.clone()),
            _ => Some(derive_summary(article)),
        }
    }

    // ── Banner ───────────────────────────────────────────────────────

    /// Replace the particle field for a new viewport size.
    /// The running simulation is discarded first so two fields never tick
    /// over the same surface.
    pub fn restart_banner(&mut self, width: f64, height: f64) {
        self.banner = None;
        if width > 0.0 && height > 0.0 {
            self.banner = Some(ParticleField::new(width, height));
        }
    }

    /// Advance the banner by one tick (called from the tick arm only)
    pub fn tick_banner(&mut self) {
        if let Some(field) = &mut self.banner {
            field.tick();
        }
    }

    pub fn banner(&self) -> Option<&ParticleField> {
        self.banner.as_ref()
    }

    // ── Consent ──────────────────────────────────────────────────────

    /// Record consent; the banner hides and stays hidden on later runs
    pub fn accept_consent(&mut self) {
        if let Some(store) = &self.consent {
            if let Err(e) = store.accept() {
                tracing::warn!("Could not persist consent flag: {}", e);
            }
        }
        self.consent_visible = false;
    }

    // ── Toast & misc ─────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Uptime as HH:MM:SS for the status bar
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    fn ready_app() -> App {
        let mut app = App::new(
            LogBuffer::new(),
            Theme::dark(),
            None,
            "demo".to_string(),
        );
        app.bundle_loaded(Ok(demo::sample_bundle()));
        app
    }

    #[test]
    fn test_load_success_populates_all_regions() {
        let app = ready_app();
        assert_eq!(app.load, LoadState::Ready);
        assert!(app.card_count() > 0);
        assert_eq!(app.top_posts.len(), 3);
        assert!(!app.dashboards.is_empty());
        assert!(!app.tools.is_empty());
        assert!(app.guard.is_some());
    }

    #[test]
    fn test_load_failure_shows_message_and_no_partial_content() {
        let mut app = ready_app();
        app.bundle_loaded(Err(LoadError::Status(500)));
        match &app.load {
            LoadState::Failed(msg) => assert!(msg.contains("HTTP 500")),
            other => panic!("expected failure state, got {:?}", other),
        }
        assert_eq!(app.card_count(), 0);
        assert!(app.cards.is_empty());
        assert!(app.top_posts.is_empty());
        assert!(app.dashboards.is_empty());
        assert!(app.tools.is_empty());
    }

    #[test]
    fn test_cycle_category_reprojects_from_canonical() {
        let mut app = ready_app();
        let all = app.card_count();
        app.cycle_category(true);
        let filtered = app.card_count();
        assert!(filtered < all);

        // Cycling all the way around returns to the full set
        let labels = app.filter_labels().len();
        for _ in 1..labels {
            app.cycle_category(true);
        }
        assert_eq!(app.card_count(), all);
    }

    #[test]
    fn test_search_then_category_are_exclusive() {
        let mut app = ready_app();
        app.search_mode = true;
        app.search_input = "window".to_string();
        app.apply_search();
        assert_eq!(app.card_count(), 1);

        app.cycle_category(true);
        // Category selection replaced the search view
        assert!(matches!(
            app.filter.as_ref().unwrap().state(),
            FilterState::ByCategory(_)
        ));
    }

    #[test]
    fn test_empty_search_restores_full_set() {
        let mut app = ready_app();
        let all = app.card_count();
        app.search_input = "window".to_string();
        app.apply_search();
        assert!(app.card_count() < all);

        app.search_input = String::new();
        app.apply_search();
        assert_eq!(app.card_count(), all);
    }

    #[test]
    fn test_no_match_search_shows_placeholder_card() {
        let mut app = ready_app();
        app.search_input = "zzz-nothing".to_string();
        app.apply_search();
        assert_eq!(app.card_count(), 0);
        assert_eq!(app.cards, vec![CardModel::Placeholder]);
    }

    #[test]
    fn test_selection_clamped_when_visible_set_shrinks() {
        let mut app = ready_app();
        app.selected = app.card_count() - 1;
        app.search_input = "window".to_string();
        app.apply_search();
        assert!(app.selected < app.card_count());
    }

    #[test]
    fn test_like_toggle_is_local_and_follows_article() {
        let mut app = ready_app();
        app.selected = 0;
        app.toggle_like();
        assert!(app.is_liked(0));
        app.toggle_like();
        assert!(!app.is_liked(0));
    }

    #[test]
    fn test_restart_banner_replaces_simulation() {
        let mut app = ready_app();
        app.restart_banner(100.0, 30.0);
        assert!(app.banner().is_some());
        let w = app.banner().unwrap().width();
        app.restart_banner(80.0, 20.0);
        assert!(app.banner().unwrap().width() != w);
    }

    #[test]
    fn test_tick_without_banner_is_noop() {
        let mut app = ready_app();
        app.tick_banner(); // no banner yet, must not panic
        app.restart_banner(100.0, 30.0);
        app.tick_banner();
    }

    #[test]
    fn test_selection_text_uses_summary_in_list_view() {
        let app = ready_app();
        let text = app.selection_text().unwrap();
        let article = app.selected_article().unwrap();
        assert_eq!(text, derive_summary(article));
    }
}

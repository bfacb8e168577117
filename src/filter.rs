// FilterSearchController - the one mutable piece of view state
//
// Exactly one instance exists per page session. The controller owns the
// active filter/search state and recomputes the visible article set from
// the canonical list on every transition - never from the previously
// filtered list, so repeated filtering cannot compound or narrow.
//
// Category filtering and text search are mutually exclusive: invoking one
// transitions away from the other. An empty search term clears back to
// `All` (documented policy; see DESIGN.md).

use crate::content::Article;
use crate::projector::derive_summary;

/// The reserved category name that shows everything
pub const ALL_CATEGORY: &str = "all";

/// Mutually exclusive filter states
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    All,
    ByCategory(String),
    BySearch(String),
}

impl FilterState {
    /// Short label for the status bar
    pub fn label(&self) -> String {
        match self {
            FilterState::All => "all".to_string(),
            FilterState::ByCategory(cat) => format!("category: {}", cat),
            FilterState::BySearch(term) => format!("search: \"{}\"", term),
        }
    }
}

/// Owns the active category filter and search term
#[derive(Debug, Default)]
pub struct FilterController {
    state: FilterState,
    /// Distinct category values in first-seen order, for building the
    /// filter control set
    categories: Vec<String>,
}

impl FilterController {
    /// Build a controller for a canonical article list, deriving the
    /// category vocabulary. Called at startup and again after a reload.
    pub fn new(articles: &[Article]) -> Self {
        Self {
            state: FilterState::All,
            categories: derive_categories(articles),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Select a category; `"all"` resets to the unfiltered view.
    /// Clears any active search.
    pub fn select_category(&mut self, category: &str) {
        self.state = if category == ALL_CATEGORY {
            FilterState::All
        } else {
            FilterState::ByCategory(category.to_string())
        };
    }

    /// Apply a search term; the empty term clears back to `All`.
    /// Clears any active category filter.
    pub fn search(&mut self, term: &str) {
        self.state = if term.is_empty() {
            FilterState::All
        } else {
            FilterState::BySearch(term.to_string())
        };
    }

    /// Compute the visible article set from the canonical list
    ///
    /// Search matches case-insensitively against the title and the derived
    /// summary. Returns references in canonical order; the input is never
    /// reordered or mutated.
    pub fn visible<'a>(&self, canonical: &'a [Article]) -> Vec<&'a Article> {
        self.visible_indexed(canonical)
            .into_iter()
            .map(|(_, a)| a)
            .collect()
    }

    /// Like `visible`, but paired with each article's canonical index so
    /// callers can correlate selection state with the canonical list
    pub fn visible_indexed<'a>(&self, canonical: &'a [Article]) -> Vec<(usize, &'a Article)> {
        let matches = |a: &Article| -> bool {
            match &self.state {
                FilterState::All => true,
                FilterState::ByCategory(cat) => &a.category == cat,
                FilterState::BySearch(term) => {
                    let needle = term.to_lowercase();
                    a.title.to_lowercase().contains(&needle)
                        || derive_summary(a).to_lowercase().contains(&needle)
                }
            }
        };

        canonical
            .iter()
            .enumerate()
            .filter(|(_, a)| matches(a))
            .collect()
    }
}

/// Distinct categories in first-seen order
fn derive_categories(articles: &[Article]) -> Vec<String> {
    let mut seen = Vec::new();
    for article in articles {
        if !seen.contains(&article.category) {
            seen.push(article.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, category: &str, summary: Option<&str>) -> Article {
        Article {
            id: None,
            title: title.to_string(),
            category: category.to_string(),
            date: String::new(),
            summary: summary.map(str::to_string),
            content: String::new(),
            views: 0,
            pinned: false,
        }
    }

    fn fixture() -> Vec<Article> {
        vec![
            article("Rust ownership", "rust", Some("borrow checker basics")),
            article("Data pipelines", "data", None),
            article("Async Rust", "rust", Some("tokio and futures")),
            article("Chart design", "viz", Some("color scales")),
        ]
    }

    #[test]
    fn test_categories_first_seen_order() {
        let ctl = FilterController::new(&fixture());
        assert_eq!(ctl.categories(), &["rust", "data", "viz"]);
    }

    #[test]
    fn test_select_category_filters_from_canonical() {
        let articles = fixture();
        let mut ctl = FilterController::new(&articles);
        ctl.select_category("rust");
        let visible = ctl.visible(&articles);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|a| a.category == "rust"));
    }

    #[test]
    fn test_select_all_restores_full_set_regardless_of_history() {
        let articles = fixture();
        let mut ctl = FilterController::new(&articles);
        ctl.select_category("viz");
        ctl.search("rust");
        ctl.select_category("data");
        ctl.select_category(ALL_CATEGORY);
        assert_eq!(ctl.state(), &FilterState::All);
        assert_eq!(ctl.visible(&articles).len(), articles.len());
    }

    #[test]
    fn test_repeated_filtering_does_not_narrow() {
        let articles = fixture();
        let mut ctl = FilterController::new(&articles);
        ctl.select_category("rust");
        ctl.select_category("rust");
        assert_eq!(ctl.visible(&articles).len(), 2);
        ctl.select_category("viz");
        // Recomputed from canonical, not from the previous rust-only view
        assert_eq!(ctl.visible(&articles).len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_summary() {
        let articles = fixture();
        let mut ctl = FilterController::new(&articles);

        ctl.search("RUST");
        assert_eq!(ctl.visible(&articles).len(), 2);

        ctl.search("color");
        let visible = ctl.visible(&articles);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Chart design");
    }

    #[test]
    fn test_search_matches_derived_summary() {
        // "Data pipelines" has no explicit summary; search must hit the
        // summary derived from its content
        let mut articles = fixture();
        articles[1].content = "streaming aggregation windows".to_string();
        let mut ctl = FilterController::new(&articles);
        ctl.search("aggregation");
        let visible = ctl.visible(&articles);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Data pipelines");
    }

    #[test]
    fn test_empty_search_clears_to_all() {
        let articles = fixture();
        let mut ctl = FilterController::new(&articles);
        ctl.select_category("rust");
        ctl.search("");
        assert_eq!(ctl.state(), &FilterState::All);
        assert_eq!(ctl.visible(&articles).len(), articles.len());
    }

    #[test]
    fn test_category_and_search_are_mutually_exclusive() {
        let articles = fixture();
        let mut ctl = FilterController::new(&articles);

        ctl.search("rust");
        ctl.select_category("viz");
        assert_eq!(ctl.state(), &FilterState::ByCategory("viz".to_string()));

        ctl.search("chart");
        assert_eq!(ctl.state(), &FilterState::BySearch("chart".to_string()));
    }

    #[test]
    fn test_search_no_match_yields_empty_set() {
        let articles = fixture();
        let mut ctl = FilterController::new(&articles);
        ctl.search("zzz-no-such-term");
        assert!(ctl.visible(&articles).is_empty());
    }
}

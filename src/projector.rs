// ViewProjector - pure transformations from domain entities to view-models
//
// Every function here is stateless and side-effect free: callable repeatedly,
// never mutating its input. The TUI components render view-models only, so
// all presentation decisions (summary derivation, truncation, placeholder
// substitution, top-post ordering) live here and are unit-testable without
// a terminal.

use crate::content::{Article, Dashboard, Tool};
use crate::util::excerpt;

/// Characters of `content` used when deriving a missing summary
const SUMMARY_DERIVE_LEN: usize = 100;

/// Characters of summary shown in the top-posts panel
const TOP_POST_EXCERPT_LEN: usize = 40;

/// How many posts the top-posts panel shows
const TOP_POST_COUNT: usize = 3;

/// Default artwork for dashboards that ship without an image
const DASHBOARD_PLACEHOLDER_IMAGE: &str = "assets/images/placeholder.png";

/// One entry of the article display region
#[derive(Debug, Clone, PartialEq)]
pub enum CardModel {
    Article(ArticleCard),
    /// Explicit "no articles" marker; the region is never rendered empty
    Placeholder,
}

/// Presentation-ready article card
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    pub title: String,
    pub category: String,
    pub date: String,
    pub summary: String,
    pub views: u64,
    pub pinned: bool,
}

/// Presentation-ready top-post entry
#[derive(Debug, Clone, PartialEq)]
pub struct TopPostModel {
    pub title: String,
    /// Summary hard-truncated for the compact panel; the underlying
    /// article summary is untouched
    pub excerpt: String,
    pub views: u64,
    pub pinned: bool,
}

/// Presentation-ready dashboard entry
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

/// Presentation-ready tool entry
#[derive(Debug, Clone, PartialEq)]
pub struct ToolModel {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub link: String,
}

/// Derive the display summary for an article
///
/// Deterministic: an explicit summary is used verbatim, otherwise the first
/// 100 characters of the content plus an ellipsis. Computed at projection
/// time, never written back to the article.
pub fn derive_summary(article: &Article) -> String {
    match &article.summary {
        Some(summary) => summary.clone(),
        None => excerpt(&article.content, SUMMARY_DERIVE_LEN),
    }
}

/// Project articles into card view-models, preserving input order
///
/// Empty input yields exactly one placeholder entry so the article region
/// always has something explicit to show.
pub fn project_article_cards(articles: &[&Article]) -> Vec<CardModel> {
    if articles.is_empty() {
        return vec![CardModel::Placeholder];
    }

    articles
        .iter()
        .map(|art| {
            CardModel::Article(ArticleCard {
                title: art.title.clone(),
                category: art.category.clone(),
                date: art.date.clone(),
                summary: derive_summary(art),
                views: art.views,
                pinned: art.pinned,
            })
        })
        .collect()
}

/// Project the top three posts: pinned first, then by views, ties stable
///
/// Sorts a copy of the input; the caller's ordering is unaffected.
/// `sort_by` is a stable sort, so articles with equal pinned-ness and equal
/// views keep their relative input order.
pub fn project_top_posts(articles: &[Article]) -> Vec<TopPostModel> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| b.pinned.cmp(&a.pinned).then(b.views.cmp(&a.views)));

    sorted
        .into_iter()
        .take(TOP_POST_COUNT)
        .map(|art| TopPostModel {
            title: art.title.clone(),
            excerpt: excerpt(&derive_summary(art), TOP_POST_EXCERPT_LEN),
            views: art.views,
            pinned: art.pinned,
        })
        .collect()
}

/// Project dashboards 1:1, substituting the placeholder image when absent
pub fn project_dashboards(dashboards: &[Dashboard]) -> Vec<DashboardModel> {
    dashboards
        .iter()
        .map(|d| DashboardModel {
            title: d.title.clone(),
            description: d.description.clone(),
            image: d
                .image
                .clone()
                .unwrap_or_else(|| DASHBOARD_PLACEHOLDER_IMAGE.to_string()),
            link: d.link.clone(),
        })
        .collect()
}

/// Project tools 1:1, order preserved
pub fn project_tools(tools: &[Tool]) -> Vec<ToolModel> {
    tools
        .iter()
        .map(|t| ToolModel {
            name: t.name.clone(),
            description: t.description.clone(),
            icon: t.icon.clone(),
            link: t.link.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, views: u64, pinned: bool) -> Article {
        Article {
            id: None,
            title: title.to_string(),
            category: "general".to_string(),
            date: "2026-01-01".to_string(),
            summary: Some(format!("summary of {}", title)),
            content: String::new(),
            views,
            pinned,
        }
    }

    #[test]
    fn test_empty_input_yields_single_placeholder() {
        let cards = project_article_cards(&[]);
        assert_eq!(cards, vec![CardModel::Placeholder]);
    }

    #[test]
    fn test_cards_preserve_input_order() {
        let a = article("first", 1, false);
        let b = article("second", 2, false);
        let cards = project_article_cards(&[&a, &b]);
        match (&cards[0], &cards[1]) {
            (CardModel::Article(x), CardModel::Article(y)) => {
                assert_eq!(x.title, "first");
                assert_eq!(y.title, "second");
            }
            _ => panic!("expected two article cards"),
        }
    }

    #[test]
    fn test_summary_derived_from_content_first_100_chars() {
        let mut art = article("long", 0, false);
        art.summary = None;
        art.content = "x".repeat(150);
        let derived = derive_summary(&art);
        assert_eq!(derived.chars().count(), 101); // 100 chars + ellipsis
        assert!(derived.ends_with('…'));
        // Derivation happens at projection time, nothing is stored
        assert!(art.summary.is_none());
    }

    #[test]
    fn test_explicit_summary_used_verbatim() {
        let art = article("a", 0, false);
        assert_eq!(derive_summary(&art), "summary of a");
    }

    #[test]
    fn test_top_posts_returns_at_most_three() {
        let articles: Vec<Article> = (0..5).map(|i| article(&format!("a{}", i), i, false)).collect();
        assert_eq!(project_top_posts(&articles).len(), 3);
        assert_eq!(project_top_posts(&articles[..2]).len(), 2);
    }

    #[test]
    fn test_top_posts_pinned_dominates_views() {
        let articles = vec![
            article("popular", 100, false),
            article("pinned-low", 1, true),
        ];
        let top = project_top_posts(&articles);
        assert_eq!(top[0].title, "pinned-low");
        assert_eq!(top[1].title, "popular");
    }

    #[test]
    fn test_top_posts_ties_keep_input_order() {
        let articles = vec![
            article("tie-a", 10, false),
            article("tie-b", 10, false),
            article("tie-c", 10, false),
        ];
        let top = project_top_posts(&articles);
        assert_eq!(top[0].title, "tie-a");
        assert_eq!(top[1].title, "tie-b");
        assert_eq!(top[2].title, "tie-c");
    }

    #[test]
    fn test_top_posts_does_not_mutate_input() {
        let articles = vec![
            article("c", 1, false),
            article("a", 3, false),
            article("b", 2, true),
        ];
        let before: Vec<String> = articles.iter().map(|a| a.title.clone()).collect();
        let _ = project_top_posts(&articles);
        let after: Vec<String> = articles.iter().map(|a| a.title.clone()).collect();
        assert_eq!(before, after);
    }

    /// End-to-end ordering scenario from the product requirements:
    /// 2 pinned (views 10, 50) + 3 unpinned (views 100, 5, 30) ->
    /// pinned sorted by views desc, then the 100-view unpinned article.
    #[test]
    fn test_top_posts_mixed_pinned_scenario() {
        let articles = vec![
            article("pin-10", 10, true),
            article("pin-50", 50, true),
            article("un-100", 100, false),
            article("un-5", 5, false),
            article("un-30", 30, false),
        ];
        let top = project_top_posts(&articles);
        assert_eq!(top[0].title, "pin-50");
        assert_eq!(top[1].title, "pin-10");
        assert_eq!(top[2].title, "un-100");
    }

    #[test]
    fn test_top_post_excerpt_is_hard_truncated() {
        let mut art = article("verbose", 1, false);
        art.summary = Some("s".repeat(60));
        let top = project_top_posts(std::slice::from_ref(&art));
        assert_eq!(top[0].excerpt.chars().count(), 41); // 40 chars + ellipsis
        assert!(top[0].excerpt.ends_with('…'));
        // Presentational only: the article keeps its full summary
        assert_eq!(art.summary.as_ref().unwrap().len(), 60);
    }

    #[test]
    fn test_dashboard_placeholder_image() {
        let dashboards = vec![Dashboard {
            title: "d".to_string(),
            description: String::new(),
            image: None,
            link: "https://example.org".to_string(),
        }];
        let models = project_dashboards(&dashboards);
        assert_eq!(models[0].image, DASHBOARD_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_tools_map_one_to_one() {
        let tools = vec![
            Tool {
                name: "first".to_string(),
                description: "d1".to_string(),
                icon: "fa-code".to_string(),
                link: "l1".to_string(),
            },
            Tool {
                name: "second".to_string(),
                description: "d2".to_string(),
                icon: "fa-chart".to_string(),
                link: "l2".to_string(),
            },
        ];
        let models = project_tools(&tools);
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "first");
        assert_eq!(models[1].name, "second");
    }
}

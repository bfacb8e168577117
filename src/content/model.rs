// Content bundle data model
//
// These structs mirror the JSON document the site is generated from. The
// bundle is loaded once per session and treated as immutable; a reload
// replaces it wholesale. Unknown JSON keys are ignored by serde's default
// behavior, and optional fields fall back to defaults at the boundary so
// the rest of the application never sees a partially-formed entity.

use serde::Deserialize;

/// The whole content bundle: one JSON document, object-rooted
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContentBundle {
    #[serde(default)]
    pub config: SiteConfig,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub dashboards: Vec<Dashboard>,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// Site-wide scalar text/link fields, applied verbatim to fixed page slots
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default, rename = "siteName")]
    pub site_name: String,
    #[serde(default, rename = "heroTitle")]
    pub hero_title: String,
    #[serde(default, rename = "heroSubtitle")]
    pub hero_subtitle: String,
    #[serde(default, rename = "aboutText")]
    pub about_text: String,
    #[serde(default, rename = "sponsorLink")]
    pub sponsor_link: String,
}

/// A single article
///
/// `views` is unsigned on purpose: a bundle carrying a negative or
/// non-numeric view count fails to parse at the ContentStore boundary
/// instead of flowing malformed data into the projections.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub date: String,
    /// Optional editor-written summary; when absent a summary is derived
    /// from `content` at projection time (never stored back)
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub pinned: bool,
}

/// A dashboard entry (interactive chart hosted elsewhere)
#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: String,
}

/// A tool entry (external link with icon)
#[derive(Debug, Clone, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_parses_minimal_document() {
        let json = r#"{
            "config": {"siteName": "Demo"},
            "articles": [{"title": "A", "category": "rust", "content": "body", "views": 3, "pinned": false}],
            "dashboards": [],
            "tools": []
        }"#;
        let bundle: ContentBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.config.site_name, "Demo");
        assert_eq!(bundle.articles.len(), 1);
        assert_eq!(bundle.articles[0].views, 3);
        assert!(bundle.articles[0].summary.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"config": {}, "articles": [], "dashboards": [], "tools": [], "extra": 42}"#;
        assert!(serde_json::from_str::<ContentBundle>(json).is_ok());
    }

    #[test]
    fn test_negative_views_rejected_at_boundary() {
        let json = r#"{"articles": [{"title": "A", "category": "c", "views": -1}]}"#;
        assert!(serde_json::from_str::<ContentBundle>(json).is_err());
    }

    #[test]
    fn test_missing_optional_sections_default() {
        let bundle: ContentBundle = serde_json::from_str("{}").unwrap();
        assert!(bundle.articles.is_empty());
        assert!(bundle.dashboards.is_empty());
        assert!(bundle.tools.is_empty());
    }
}

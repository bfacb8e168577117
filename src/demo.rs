// Demo mode: a built-in sample bundle to showcase the reader
//
// Run with: kiosk --demo (or KIOSK_DEMO=1)
//
// The sample exercises every display region: pinned and unpinned articles
// across several categories, an article without an explicit summary, a
// dashboard without an image, and a tools list.

use crate::content::ContentBundle;
use serde_json::json;

/// Build the sample bundle
///
/// Goes through the same serde path as a real bundle so demo mode also
/// exercises the boundary parsing.
pub fn sample_bundle() -> ContentBundle {
    let doc = json!({
        "config": {
            "siteName": "Fieldnotes",
            "heroTitle": "Notes from the field",
            "heroSubtitle": "Data engineering, visualization, and the occasional detour",
            "aboutText": "A personal collection of write-ups and interactive charts.",
            "sponsorLink": "https://example.org/sponsor"
        },
        "articles": [
            {
                "title": "Why your pipeline backfills are slow",
                "category": "data",
                "date": "2026-07-18",
                "summary": "Partition pruning, small files, and the three fixes that actually matter.",
                "content": "## The usual suspects\n\nBackfills crawl for boring reasons...",
                "views": 412,
                "pinned": true
            },
            {
                "title": "A field guide to window functions",
                "category": "data",
                "date": "2026-06-02",
                "content": "Window functions confuse everyone at first. The trick is to stop thinking in rows and start thinking in frames. A frame is the set of rows the function can see...",
                "views": 1287,
                "pinned": false
            },
            {
                "title": "Choosing color scales that don't lie",
                "category": "viz",
                "date": "2026-05-21",
                "summary": "Sequential, diverging, and the cases where rainbow maps mislead.",
                "content": "Perceptual uniformity is the property that equal steps in data read as equal steps in color...",
                "views": 856,
                "pinned": false
            },
            {
                "title": "Terminal dashboards with braille canvases",
                "category": "viz",
                "date": "2026-04-09",
                "summary": "Plotting at 2x4 subcell resolution straight into your terminal.",
                "content": "Braille patterns give each character cell eight addressable dots...",
                "views": 231,
                "pinned": true
            },
            {
                "title": "Yearly reading roundup",
                "category": "misc",
                "date": "2026-01-05",
                "summary": "Twelve books, three regrets.",
                "content": "This year's list skews technical again...",
                "views": 97,
                "pinned": false
            }
        ],
        "dashboards": [
            {
                "title": "Commute patterns",
                "description": "Interactive flow map of city commute data.",
                "image": "assets/images/commute.png",
                "link": "https://example.org/viz/commute"
            },
            {
                "title": "Rainfall anomalies",
                "description": "Monthly deviation from the 30-year baseline.",
                "link": "https://example.org/viz/rainfall"
            }
        ],
        "tools": [
            {
                "name": "CSV Inspector",
                "description": "Paste a CSV, get types and quality warnings.",
                "icon": "fa-table",
                "link": "https://example.org/tools/csv"
            },
            {
                "name": "Palette Picker",
                "description": "Colorblind-safe scales for charts.",
                "icon": "fa-palette",
                "link": "https://example.org/tools/palette"
            }
        ]
    });

    serde_json::from_value(doc).expect("sample bundle is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_bundle_parses_and_covers_regions() {
        let bundle = sample_bundle();
        assert_eq!(bundle.config.site_name, "Fieldnotes");
        assert!(bundle.articles.len() >= 5);
        assert!(bundle.articles.iter().any(|a| a.pinned));
        assert!(bundle.articles.iter().any(|a| a.summary.is_none()));
        assert!(bundle.dashboards.iter().any(|d| d.image.is_none()));
        assert!(!bundle.tools.is_empty());
    }
}

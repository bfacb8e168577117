// Markdown rendering for the article detail overlay
//
// Article `content` is authored as markdown in the CMS. This converts it to
// styled ratatui Lines via pulldown-cmark. The tag set is deliberately
// small: headings, paragraphs, emphasis, inline code, fenced code blocks,
// and bullet lists cover the corpus; anything else falls back to its
// plain text.

use crate::theme::Theme;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render markdown into owned lines ready for a Paragraph widget
pub fn render_markdown(markdown: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    let mut in_code_block = false;
    let mut in_heading: Option<HeadingLevel> = None;
    let mut bold = false;
    let mut italic = false;
    let mut in_list_item = false;

    let base = Style::default().fg(theme.foreground);
    let heading_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let code_style = Style::default().fg(theme.highlight);

    let mut flush = |current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>| {
        if !current.is_empty() {
            lines.push(Line::from(std::mem::take(current)));
        }
    };

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut current, &mut lines);
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                in_heading = Some(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                flush(&mut current, &mut lines);
                in_heading = None;
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut current, &mut lines);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
            }
            Event::Start(Tag::Item) => {
                flush(&mut current, &mut lines);
                in_list_item = true;
                current.push(Span::styled("  • ", Style::default().fg(theme.accent)));
            }
            Event::End(TagEnd::Item) => {
                flush(&mut current, &mut lines);
                in_list_item = false;
            }
            Event::Start(Tag::Emphasis) => italic = true,
            Event::End(TagEnd::Emphasis) => italic = false,
            Event::Start(Tag::Strong) => bold = true,
            Event::End(TagEnd::Strong) => bold = false,
            Event::End(TagEnd::Paragraph) => {
                flush(&mut current, &mut lines);
                if !in_list_item {
                    lines.push(Line::default());
                }
            }
            Event::Text(text) => {
                if in_code_block {
                    for code_line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("    {}", code_line),
                            code_style,
                        )));
                    }
                } else if in_heading.is_some() {
                    current.push(Span::styled(text.to_string(), heading_style));
                } else {
                    let mut style = base;
                    if bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if italic {
                        style = style.add_modifier(Modifier::ITALIC);
                    }
                    current.push(Span::styled(text.to_string(), style));
                }
            }
            Event::Code(code) => {
                current.push(Span::styled(format!("`{}`", code), code_style));
            }
            Event::SoftBreak => {
                current.push(Span::styled(" ".to_string(), base));
            }
            Event::HardBreak => {
                flush(&mut current, &mut lines);
            }
            Event::Rule => {
                flush(&mut current, &mut lines);
                lines.push(Line::from(Span::styled(
                    "─".repeat(24),
                    Style::default().fg(theme.border),
                )));
            }
            _ => {}
        }
    }
    flush(&mut current, &mut lines);

    // Trim a trailing blank line left by the last paragraph
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_heading_and_paragraph() {
        let lines = render_markdown("## Title\n\nBody text.", &Theme::dark());
        let text = text_of(&lines);
        assert!(text.contains(&"Title".to_string()));
        assert!(text.contains(&"Body text.".to_string()));
    }

    #[test]
    fn test_code_block_indented() {
        let lines = render_markdown("```\nlet x = 1;\n```", &Theme::dark());
        let text = text_of(&lines);
        assert!(text.iter().any(|l| l == "    let x = 1;"));
    }

    #[test]
    fn test_list_items_get_bullets() {
        let lines = render_markdown("- one\n- two", &Theme::dark());
        let text = text_of(&lines);
        assert!(text.iter().any(|l| l.contains("• ") && l.contains("one")));
    }

    #[test]
    fn test_plain_text_passes_through() {
        let lines = render_markdown("just a sentence", &Theme::dark());
        assert_eq!(text_of(&lines), vec!["just a sentence".to_string()]);
    }
}

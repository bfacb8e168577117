//! Toast notification component
//!
//! A non-blocking overlay in the bottom-right corner that auto-dismisses
//! after a fixed duration. Used for copy confirmations and reload status.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a toast with the default 2-second lifetime
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render in the bottom-right corner, on top of everything else
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Display width, not byte length: messages carry ✓/✗ glyphs
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let mut toast = Toast::new("copied");
        assert!(!toast.is_expired());
        toast.created_at = Instant::now() - Duration::from_secs(3);
        assert!(toast.is_expired());
    }
}

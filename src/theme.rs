// Color themes for the TUI
//
// Two built-in palettes selected by config. Every render function takes a
// &Theme so components never hardcode colors.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Resolved color palette used by all components
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Accent for headings, the hero banner, pinned markers
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub muted: Color,
    pub ok: Color,
    pub err: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Default dark palette (cyan accent, slate tones)
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            foreground: Color::Rgb(226, 232, 240),
            accent: Color::Rgb(6, 182, 212),
            border: Color::Rgb(51, 65, 85),
            highlight: Color::Rgb(251, 191, 36),
            selection: Color::Rgb(30, 58, 95),
            selection_fg: Color::Rgb(240, 249, 255),
            muted: Color::Rgb(148, 163, 184),
            ok: Color::Rgb(74, 222, 128),
            err: Color::Rgb(248, 113, 113),
            border_type: BorderType::Rounded,
        }
    }

    /// Light palette for bright terminals
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 250, 252),
            foreground: Color::Rgb(30, 41, 59),
            accent: Color::Rgb(8, 145, 178),
            border: Color::Rgb(203, 213, 225),
            highlight: Color::Rgb(217, 119, 6),
            selection: Color::Rgb(186, 230, 253),
            selection_fg: Color::Rgb(12, 74, 110),
            muted: Color::Rgb(100, 116, 139),
            ok: Color::Rgb(22, 163, 74),
            err: Color::Rgb(220, 38, 38),
            border_type: BorderType::Rounded,
        }
    }

    /// Look up a theme by config name, falling back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

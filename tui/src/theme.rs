//! Color themes and glyphs for the Folio TUI.
//!
//! Gold and green on ink for the dark theme, the same hues darkened on
//! paper for the light one, plus a high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use folio_engine::{ThemeMode, UiOptions};

mod colors {
    use super::Color;

    // === Dark ===
    pub const INK: Color = Color::Rgb(10, 12, 10);
    pub const INK_PANEL: Color = Color::Rgb(20, 24, 20);
    pub const INK_HIGHLIGHT: Color = Color::Rgb(34, 40, 32);
    pub const INK_BORDER: Color = Color::Rgb(70, 78, 62);
    pub const TEXT_ON_INK: Color = Color::Rgb(232, 228, 210);
    pub const MUTED_ON_INK: Color = Color::Rgb(138, 140, 124);
    pub const GOLD: Color = Color::Rgb(255, 196, 0);
    pub const GREEN: Color = Color::Rgb(0, 214, 120);
    pub const TEAL: Color = Color::Rgb(64, 200, 190);

    // === Light ===
    pub const PAPER: Color = Color::Rgb(250, 248, 240);
    pub const PAPER_PANEL: Color = Color::Rgb(238, 234, 220);
    pub const PAPER_HIGHLIGHT: Color = Color::Rgb(224, 218, 196);
    pub const PAPER_BORDER: Color = Color::Rgb(180, 172, 148);
    pub const TEXT_ON_PAPER: Color = Color::Rgb(28, 30, 26);
    pub const MUTED_ON_PAPER: Color = Color::Rgb(104, 104, 92);
    pub const DARK_GOLD: Color = Color::Rgb(168, 120, 0);
    pub const DARK_GREEN: Color = Color::Rgb(0, 132, 72);
    pub const DARK_TEAL: Color = Color::Rgb(0, 120, 120);

    // === Shared ===
    pub const RED: Color = Color::Rgb(230, 72, 72);
    pub const ORANGE: Color = Color::Rgb(240, 150, 60);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: colors::INK,
            bg_panel: colors::INK_PANEL,
            bg_highlight: colors::INK_HIGHLIGHT,
            border: colors::INK_BORDER,
            text: colors::TEXT_ON_INK,
            text_muted: colors::MUTED_ON_INK,
            primary: colors::GOLD,
            secondary: colors::GREEN,
            accent: colors::TEAL,
            success: colors::GREEN,
            warning: colors::ORANGE,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: colors::PAPER,
            bg_panel: colors::PAPER_PANEL,
            bg_highlight: colors::PAPER_HIGHLIGHT,
            border: colors::PAPER_BORDER,
            text: colors::TEXT_ON_PAPER,
            text_muted: colors::MUTED_ON_PAPER,
            primary: colors::DARK_GOLD,
            secondary: colors::DARK_GREEN,
            accent: colors::DARK_TEAL,
            success: colors::DARK_GREEN,
            warning: colors::ORANGE,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            border: Color::Gray,
            text: Color::White,
            text_muted: Color::Gray,
            primary: Color::Yellow,
            secondary: Color::Green,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

/// High contrast wins over the stored theme.
#[must_use]
pub fn palette(options: UiOptions, mode: ThemeMode) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else if mode.is_dark() {
        Palette::dark()
    } else {
        Palette::light()
    }
}

/// ASCII/Unicode glyphs for icons and meters.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub brand: &'static str,
    pub bullet: &'static str,
    pub check: &'static str,
    pub selected: &'static str,
    pub collapsed: &'static str,
    pub expanded: &'static str,
    pub meter_full: &'static str,
    pub meter_empty: &'static str,
    /// Shown while dark: toggling switches to light.
    pub sun: &'static str,
    pub moon: &'static str,
    pub arrow_up: &'static str,
    pub rule: &'static str,
    /// Box corners and edges: top-left, top-right, bottom-left,
    /// bottom-right, horizontal, vertical.
    pub frame: [&'static str; 6],
    pub success: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            brand: ">_",
            bullet: "*",
            check: "+",
            selected: ">",
            collapsed: "+",
            expanded: "-",
            meter_full: "#",
            meter_empty: ".",
            sun: "(sun)",
            moon: "(moon)",
            arrow_up: "^",
            rule: "-",
            frame: ["+", "+", "+", "+", "-", "|"],
            success: "OK",
            info: "i",
            warning: "!",
        }
    } else {
        Glyphs {
            brand: "▣",
            bullet: "•",
            check: "✓",
            selected: "▸",
            collapsed: "▸",
            expanded: "▾",
            meter_full: "█",
            meter_empty: "░",
            sun: "☀",
            moon: "☾",
            arrow_up: "↑",
            rule: "─",
            frame: ["╭", "╮", "╰", "╯", "─", "│"],
            success: "✓",
            info: "ℹ",
            warning: "⚠",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn base(palette: &Palette) -> Style {
        Style::default().fg(palette.text).bg(palette.bg)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn kicker(palette: &Palette) -> Style {
        Style::default().fg(palette.secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default().fg(palette.error)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}

//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions.
//! Provides both ratatui styles (for the autocue view) and ANSI escape codes
//! (for plain command output).

use ratatui::style::{Color, Modifier, Style};

use crate::sync::LineHighlight;

/// Theme configuration for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (in-window lines, most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color (edge lines, hints)
    pub text_secondary: Color,
    /// Accent color for handles, keybindings and the selected range
    pub accent: Color,
    /// Foreground of the active line
    pub active_fg: Color,
    /// Background of the active line
    pub active_bg: Color,
    /// Words flagged as search hits
    pub match_fg: Color,
    pub error: Color,
    pub success: Color,
    /// Whether CLI text helpers emit ANSI codes
    pub ansi: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::autocue()
    }
}

impl Theme {
    /// Default theme: black on pale yellow for the spoken line, red search hits.
    pub fn autocue() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            active_fg: Color::Black,
            active_bg: Color::LightYellow,
            match_fg: Color::Red,
            error: Color::Red,
            success: Color::Green,
            ansi: true,
        }
    }

    /// Monochrome theme for NO_COLOR environments.
    pub fn plain() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            active_fg: Color::Reset,
            active_bg: Color::Reset,
            match_fg: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
            ansi: false,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of a transcript line for its highlight class.
    pub fn line_style(&self, highlight: LineHighlight) -> Style {
        match highlight {
            LineHighlight::Active => Style::default()
                .fg(self.active_fg)
                .bg(self.active_bg)
                .add_modifier(if self.ansi {
                    Modifier::empty()
                } else {
                    Modifier::REVERSED
                }),
            LineHighlight::InWindow => self.text_style(),
            LineHighlight::Dimmed => self.text_secondary_style().add_modifier(Modifier::DIM),
            LineHighlight::Hidden => Style::default(),
        }
    }

    /// Emphasis for search-hit words.
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_fg)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.ansi {
            format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors are not used by the themes
        _ => "",
    }
}

/// Theme for this process: plain when `NO_COLOR` is set.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() {
        Theme::plain()
    } else {
        Theme::default()
    }
}

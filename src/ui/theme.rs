//! # Theme System
//!
//! Centralized colors for the Hexa TUI.
//!
//! Rendering code never hardcodes `ratatui::style::Color` values; it reads
//! semantic fields off the active [`Theme`]. The theme is chosen by name
//! from the config file or the `--theme` flag.
//!
//! Difficulty badges get their color through [`DifficultyTone`], a total
//! mapping from a difficulty label to a semantic tone: labels outside the
//! known set fall back to the neutral tone instead of failing.

use ratatui::style::Color;

/// All colors used by the Hexa TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name matched (case-insensitively) against config.
    pub name: &'static str,

    /// Main background color for panels and modals.
    pub bg: Color,
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (hints, separators, footer).
    pub fg_dim: Color,

    /// Primary accent: branding, focused borders, selected-item background.
    pub accent: Color,
    /// Secondary accent: highlighted names, tags.
    pub secondary: Color,

    /// Success / green indicator. Also the Beginner badge color.
    pub success: Color,
    /// Warning / yellow indicator. Also the Intermediate badge color.
    pub warning: Color,
    /// Error / red indicator. Also the Advanced badge color.
    pub error: Color,
}

/// Semantic tone for a difficulty badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTone {
    Beginner,
    Intermediate,
    Advanced,
    /// Anything outside the known difficulty set.
    Neutral,
}

impl DifficultyTone {
    /// Total mapping from a difficulty label. Unknown labels map to
    /// [`DifficultyTone::Neutral`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Beginner" => DifficultyTone::Beginner,
            "Intermediate" => DifficultyTone::Intermediate,
            "Advanced" => DifficultyTone::Advanced,
            _ => DifficultyTone::Neutral,
        }
    }
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// Resolve a difficulty tone to a concrete color.
    pub fn difficulty_color(&self, tone: DifficultyTone) -> Color {
        match tone {
            DifficultyTone::Beginner => self.success,
            DifficultyTone::Intermediate => self.warning,
            DifficultyTone::Advanced => self.error,
            DifficultyTone::Neutral => self.fg_dim,
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 6] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(203, 166, 247), // mauve
        success: Color::Rgb(166, 227, 161),   // green
        warning: Color::Rgb(249, 226, 175),   // yellow
        error: Color::Rgb(243, 139, 168),     // red
    },
    // 1 - Catppuccin Macchiato
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),           // base
        fg: Color::Rgb(202, 211, 245),        // text
        fg_dim: Color::Rgb(110, 115, 141),    // overlay0
        accent: Color::Rgb(138, 173, 244),    // blue
        secondary: Color::Rgb(198, 160, 246), // mauve
        success: Color::Rgb(166, 218, 149),   // green
        warning: Color::Rgb(238, 212, 159),   // yellow
        error: Color::Rgb(237, 135, 150),     // red
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(189, 147, 249), // purple
        success: Color::Rgb(80, 250, 123),
        warning: Color::Rgb(241, 250, 140),
        error: Color::Rgb(255, 85, 85),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(180, 142, 173), // aurora purple
        success: Color::Rgb(163, 190, 140),
        warning: Color::Rgb(235, 203, 139),
        error: Color::Rgb(191, 97, 106),
    },
    // 4 - Tokyo Night
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(122, 162, 247),    // blue
        secondary: Color::Rgb(187, 154, 247), // magenta
        success: Color::Rgb(158, 206, 106),
        warning: Color::Rgb(224, 175, 104),
        error: Color::Rgb(247, 118, 142),
    },
    // 5 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),    // aqua
        secondary: Color::Rgb(211, 134, 155), // purple
        success: Color::Rgb(184, 187, 38),
        warning: Color::Rgb(250, 189, 47),
        error: Color::Rgb(251, 73, 52),
    },
];

// Verify Catppuccin themes use the actual palette values at compile time.
#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_all_themes_count() {
        assert_eq!(Theme::all().len(), 6);
    }

    #[test]
    fn test_default_is_mocha() {
        assert_eq!(Theme::default_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("catppuccin mocha").is_some());
        assert!(Theme::by_name("CATPPUCCIN MOCHA").is_some());
        assert!(Theme::by_name("dracula").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::default_theme();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.fg_dim, ctp(mocha.overlay0));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.secondary, ctp(mocha.mauve));
        assert_eq!(theme.success, ctp(mocha.green));
        assert_eq!(theme.warning, ctp(mocha.yellow));
        assert_eq!(theme.error, ctp(mocha.red));
    }

    #[test]
    fn test_catppuccin_macchiato_matches_palette() {
        let macchiato = catppuccin::PALETTE.macchiato.colors;
        let theme = Theme::by_name("Catppuccin Macchiato").expect("theme exists");
        assert_eq!(theme.bg, ctp(macchiato.base));
        assert_eq!(theme.fg, ctp(macchiato.text));
        assert_eq!(theme.accent, ctp(macchiato.blue));
        assert_eq!(theme.secondary, ctp(macchiato.mauve));
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(names.len(), unique.len(), "duplicate theme names found");
    }

    #[test]
    fn test_difficulty_tone_is_total() {
        assert_eq!(
            DifficultyTone::from_label("Beginner"),
            DifficultyTone::Beginner
        );
        assert_eq!(
            DifficultyTone::from_label("Intermediate"),
            DifficultyTone::Intermediate
        );
        assert_eq!(
            DifficultyTone::from_label("Advanced"),
            DifficultyTone::Advanced
        );
        assert_eq!(
            DifficultyTone::from_label("Impossible"),
            DifficultyTone::Neutral
        );
        assert_eq!(DifficultyTone::from_label(""), DifficultyTone::Neutral);
    }

    #[test]
    fn test_difficulty_colors_follow_theme() {
        let theme = Theme::default_theme();
        assert_eq!(
            theme.difficulty_color(DifficultyTone::Beginner),
            theme.success
        );
        assert_eq!(
            theme.difficulty_color(DifficultyTone::Intermediate),
            theme.warning
        );
        assert_eq!(theme.difficulty_color(DifficultyTone::Advanced), theme.error);
        assert_eq!(theme.difficulty_color(DifficultyTone::Neutral), theme.fg_dim);
    }
}

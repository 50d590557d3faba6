//! # Theme System
//!
//! Centralized colors for the TUI. Rendering code never hardcodes a
//! `ratatui::style::Color`; it asks the active [`Theme`] for a semantic role.
//! Press `t` to cycle through the built-in themes; the choice is saved to
//! the config file.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**

use ratatui::style::Color;

/// All colors used by the TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    /// Panel background.
    pub bg: Color,

    /// Primary text.
    pub fg: Color,
    /// Hints, separators, footer.
    pub fg_dim: Color,

    /// Focused borders, title, selected-row background.
    pub accent: Color,
    /// Friend names and the active form field.
    pub secondary: Color,

    /// A friend owes you.
    pub owed: Color,
    /// You owe a friend.
    pub owing: Color,

    /// Background of the row under the cursor.
    pub cursor_bg: Color,
}

impl Theme {
    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |i| (i + 1) % BUILT_IN_THEMES.len());
        &BUILT_IN_THEMES[index]
    }
}

static BUILT_IN_THEMES: [Theme; 4] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),            // base
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        accent: Color::Rgb(137, 180, 250),     // blue
        secondary: Color::Rgb(249, 226, 175),  // yellow
        owed: Color::Rgb(166, 227, 161),       // green
        owing: Color::Rgb(243, 139, 168),      // red
        cursor_bg: Color::Rgb(69, 71, 90),     // surface1
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),
        secondary: Color::Rgb(241, 250, 140),
        owed: Color::Rgb(80, 250, 123),
        owing: Color::Rgb(255, 85, 85),
        cursor_bg: Color::Rgb(68, 71, 90),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(235, 203, 139),
        owed: Color::Rgb(163, 190, 140),
        owing: Color::Rgb(191, 97, 106),
        cursor_bg: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        secondary: Color::Rgb(250, 189, 47),
        owed: Color::Rgb(184, 187, 38),
        owing: Color::Rgb(251, 73, 52),
        cursor_bg: Color::Rgb(80, 73, 69),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_default_is_mocha() {
        assert_eq!(Theme::default_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("catppuccin mocha").is_some());
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::default_theme();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.owed, ctp(mocha.green));
        assert_eq!(theme.owing, ctp(mocha.red));
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut theme = Theme::default_theme();
        let mut seen = vec![theme.name];
        for _ in 1..BUILT_IN_THEMES.len() {
            theme = theme.next();
            seen.push(theme.name);
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), BUILT_IN_THEMES.len());
        assert_eq!(theme.next().name, Theme::default_theme().name);
    }
}

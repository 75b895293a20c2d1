/// Visual theme derived from [`UiState::dark_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Class placed on the document element. Tailwind's `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "",
        }
    }

    /// Background applied to the page wrapper.
    pub fn wrapper_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark bg-slate-950",
            Theme::Light => "bg-slate-50",
        }
    }

    /// Glyph shown on the theme button; it names the theme a click switches to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }

    pub fn color_scheme(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// The only mutable state on the page.
///
/// Owned by the top-level view inside a signal and handed to children as a
/// prop. Nothing else caches the theme or the menu visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            menu_open: false,
        }
    }
}

impl UiState {
    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        log::debug!("theme toggled, dark_mode={}", self.dark_mode);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        log::debug!("menu toggled, menu_open={}", self.menu_open);
    }

    /// Called when a navigation link is activated.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_glyph(&self) -> &'static str {
        if self.menu_open {
            "✕"
        } else {
            "☰"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert!(state.dark_mode);
        assert!(!state.menu_open);
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_theme_twice_is_identity() {
        let mut state = UiState::default();
        state.toggle_theme();
        assert!(!state.dark_mode);
        assert_eq!(state.theme(), Theme::Light);
        state.toggle_theme();
        assert_eq!(state, UiState::default());
    }

    #[test]
    fn test_toggle_menu_twice_is_identity() {
        let mut state = UiState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert_eq!(state, UiState::default());
    }

    #[test]
    fn test_theme_and_menu_are_independent() {
        let mut state = UiState::default();
        state.toggle_menu();
        state.toggle_theme();
        assert!(state.menu_open);
        assert!(!state.dark_mode);

        state.toggle_menu();
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_close_menu() {
        let mut state = UiState::default();
        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open);

        // already closed stays closed
        state.close_menu();
        assert!(!state.menu_open);
        assert!(state.dark_mode);
    }

    #[test]
    fn test_theme_marker() {
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::Light.class(), "");
        assert!(Theme::Dark.wrapper_class().split_whitespace().any(|c| c == "dark"));
        assert!(!Theme::Light.wrapper_class().split_whitespace().any(|c| c == "dark"));
        assert_eq!(Theme::Dark.color_scheme(), "dark");
        assert_eq!(Theme::Light.color_scheme(), "light");
    }

    #[test]
    fn test_glyphs_follow_state() {
        let mut state = UiState::default();
        assert_eq!(state.theme().toggle_glyph(), "☀");
        assert_eq!(state.menu_glyph(), "☰");
        state.toggle_theme();
        state.toggle_menu();
        assert_eq!(state.theme().toggle_glyph(), "☾");
        assert_eq!(state.menu_glyph(), "✕");
    }
}

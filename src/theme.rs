/// Color scheme of the page. Owned by the top-level view and handed down as a
/// value plus a setter; nothing else stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Media query matching visitors whose system prefers a dark scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

impl Theme {
    /// Theme for the first render. `None` means the browser couldn't answer
    /// [`PREFERS_DARK_QUERY`], which falls back to light.
    pub fn initial(prefers_dark: Option<bool>) -> Self {
        prefers_dark.map(Self::from_preference).unwrap_or_default()
    }

    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Classes for the root element. Tailwind's `dark:` variants key off the
    /// `dark` class on an ancestor.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "min-h-screen bg-gray-50 transition-colors duration-300",
            Self::Dark => "min-h-screen dark bg-gray-900 transition-colors duration-300",
        }
    }

    /// Glyph for the toggle button, showing the theme it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

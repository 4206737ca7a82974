//! Theme state: dark/light mode plus the design token palettes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Whether the UI is in dark mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// The token palette for the current mode.
    pub fn palette(self) -> &'static Palette {
        if self.dark { &DARK } else { &LIGHT }
    }
}

/// Design tokens shared by both modes.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub text_primary: &'static str,
    pub surface: &'static str,
    pub accent1: &'static str,
    pub accent2: &'static str,
    pub accent3: &'static str,
    pub border: &'static str,
}

pub const LIGHT: Palette = Palette {
    bg: "#ffffff",
    text_primary: "#1F2937",
    surface: "#f9fafb",
    accent1: "#f97316",
    accent2: "#a855f7",
    accent3: "#ec4899",
    border: "#e5e7eb",
};

pub const DARK: Palette = Palette {
    bg: "#121212",
    text_primary: "#f3f4f6",
    surface: "#1e1e1e",
    accent1: "#fb923c",
    accent2: "#c084fc",
    accent3: "#f472b6",
    border: "#2e2e2e",
};

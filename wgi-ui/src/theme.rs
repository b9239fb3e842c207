//! Light and dark palettes shared by every page.

/// Color palette for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub dark: bool,
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
    pub hero_gradient: &'static str,
    pub primary_gradient: &'static str,
}

pub const LIGHT: Theme = Theme {
    dark: false,
    primary: "#3a7bd5",
    primary_light: "#6fa6ff",
    primary_dark: "#0054a3",
    secondary: "#f07b3f",
    success: "#2ecc71",
    warning: "#f39c12",
    error: "#e74c3c",
    background: "#f9fafb",
    paper: "#ffffff",
    text: "#2c3e50",
    text_secondary: "#607080",
    divider: "rgba(0, 0, 0, 0.08)",
    hero_gradient: "linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%)",
    primary_gradient: "linear-gradient(135deg, #3a7bd5 0%, #00d2ff 100%)",
};

pub const DARK: Theme = Theme {
    dark: true,
    primary: "#3a7bd5",
    primary_light: "#6fa6ff",
    primary_dark: "#0054a3",
    secondary: "#f07b3f",
    success: "#2ecc71",
    warning: "#f39c12",
    error: "#e74c3c",
    background: "#1c2331",
    paper: "#2c3e50",
    text: "#ecf0f1",
    text_secondary: "#b0bec5",
    divider: "rgba(255, 255, 255, 0.12)",
    hero_gradient: "linear-gradient(135deg, #1c2331 0%, #2c3e50 100%)",
    primary_gradient: "linear-gradient(135deg, #3a7bd5 0%, #00d2ff 100%)",
};

impl Theme {
    pub fn for_mode(dark: bool) -> Theme {
        if dark {
            DARK
        } else {
            LIGHT
        }
    }

    /// Inline style of a raised card surface.
    pub fn card_style(&self) -> String {
        let shadow = if self.dark {
            "0 8px 32px rgba(0, 0, 0, 0.5)"
        } else {
            "0 4px 12px rgba(0, 0, 0, 0.08)"
        };
        format!(
            "background: {}; color: {}; border-radius: 12px; border: 1px solid {}; box-shadow: {};",
            self.paper, self.text, self.divider, shadow
        )
    }
}

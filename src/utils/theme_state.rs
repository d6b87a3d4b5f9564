use std::str::FromStr;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }

    /// Class applied to the application root.
    pub fn root_class(&self) -> &'static str {
        if self.is_dark { "dark" } else { "" }
    }

    /// Glyph shown on the toggle button: the theme a click switches to.
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_dark { "🌞" } else { "🌙" }
    }
}

impl FromStr for ThemeState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeState { is_dark: false }),
            "dark" => Ok(ThemeState { is_dark: true }),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}

use crate::error::ConfigError;
use crate::utils::ThemeState;

pub const THEME_ENV_VAR: &str = "TITANIC_THEME";

/// Initial colour theme, read from `TITANIC_THEME`. Unset means light.
pub fn get_theme_preference() -> Result<ThemeState, ConfigError> {
    match std::env::var(THEME_ENV_VAR) {
        Ok(value) => {
            let theme: ThemeState = value.parse()?;
            log::info!("Using {} theme from {}", if theme.is_dark { "dark" } else { "light" }, THEME_ENV_VAR);
            Ok(theme)
        }
        Err(_) => {
            log::debug!("{} not set, using light theme", THEME_ENV_VAR);
            Ok(ThemeState::default())
        }
    }
}

/// Theme for the first render; an invalid setting is logged and ignored.
pub fn initial_theme() -> ThemeState {
    get_theme_preference().unwrap_or_else(|e| {
        log::warn!("{}, falling back to light theme", e);
        ThemeState::default()
    })
}

use crate::configs::env_validate::THEME_ENV_VAR;
use crate::{ get_theme_preference, initial_theme, ConfigError, ThemeState };

// Single test so the environment variable is never touched concurrently.
#[test]
fn theme_preference_from_environment() {
    std::env::remove_var(THEME_ENV_VAR);
    assert_eq!(get_theme_preference(), Ok(ThemeState::default()));

    std::env::set_var(THEME_ENV_VAR, "DARK");
    assert_eq!(get_theme_preference(), Ok(ThemeState { is_dark: true }));
    assert!(initial_theme().is_dark);

    std::env::set_var(THEME_ENV_VAR, "sepia");
    assert_eq!(get_theme_preference(), Err(ConfigError::InvalidTheme("sepia".to_string())));
    assert_eq!(initial_theme(), ThemeState::default());

    std::env::remove_var(THEME_ENV_VAR);
}

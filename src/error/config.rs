use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTheme(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTheme(value) =>
                write!(f, "Config Error: unknown theme '{}' (expected 'light' or 'dark')", value),
        }
    }
}

impl std::error::Error for ConfigError {}

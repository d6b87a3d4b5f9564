mod config;
mod page;

pub use config::ConfigError;
pub use page::PageError;

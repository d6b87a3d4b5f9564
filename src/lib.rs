mod views;
mod components;
mod utils;
mod routes;
mod configs;
mod error;
pub mod page;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ get_theme_preference, initial_theme };
pub use crate::error::{ ConfigError, PageError };
pub use crate::views::{ analysis_page, landing_page };

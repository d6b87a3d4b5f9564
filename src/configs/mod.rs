pub mod env_validate;

pub use env_validate::{ get_theme_preference, initial_theme };

// Crate-level behaviour tests; unit tests live next to their modules.
pub mod common;
mod config;
mod navigation;

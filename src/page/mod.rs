//! Declarative page model.
//!
//! A page is assembled with [`PageBuilder`] into a [`PageView`], which the
//! `PageRenderer` component turns into elements. Building is pure, so the
//! same sequence of calls always yields the same view.

mod builder;
mod config;
mod view;
pub mod markdown;
pub mod registry;

pub use builder::PageBuilder;
pub use config::{ Layout, PageConfig };
pub use registry::PageId;
pub use view::{ Block, PageView, RenderEvent };

mod markdown;
mod page_view;

pub use markdown::Markdown;
pub use page_view::PageRenderer;

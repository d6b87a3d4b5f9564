use dioxus::prelude::*;
use crate::components::PageRenderer;
use crate::error::PageError;
use crate::page::{ Layout, PageBuilder, PageConfig, PageId, PageView };

pub const PAGE_TITLE: &str = "Titanic App - Home";
pub const PAGE_ICON: &str = "🚢";
pub const HEADING: &str = "🚢 Welcome to Titanic App";
pub const SUBTITLE: &str = "### Explore the Titanic dataset with interactive analysis and prediction!";
pub const ANALYSIS_LINK_LABEL: &str = "👉 Go to Titanic Analysis";

/// The landing page. Rebuilt from scratch on every load.
pub fn landing_page() -> Result<PageView, PageError> {
    let mut page = PageBuilder::new();
    page.set_page_config(PageConfig::new(PAGE_TITLE, PAGE_ICON, Layout::Wide))?;

    page.title(HEADING);
    page.markdown(SUBTITLE);
    page.page_link(PageId::Analysis, ANALYSIS_LINK_LABEL, true);

    Ok(page.finish())
}

#[component]
pub fn Home() -> Element {
    match landing_page() {
        Ok(view) => {
            log::debug!("Rendering landing page with {} blocks", view.blocks.len());
            rsx! { PageRenderer { view } }
        }
        Err(e) => {
            log::error!("Failed to build landing page: {}", e);
            rsx! {
                div {
                    class: "page-error",
                    "{e}"
                }
            }
        }
    }
}

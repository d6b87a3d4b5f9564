use dioxus::prelude::*;
use crate::components::PageRenderer;
use crate::error::PageError;
use crate::page::{ Layout, PageBuilder, PageConfig, PageId, PageView };

pub fn analysis_page() -> Result<PageView, PageError> {
    let mut page = PageBuilder::new();
    page.set_page_config(PageConfig::new("Titanic App - Analysis", PageId::Analysis.icon(), Layout::Wide))?;

    page.title("📊 Titanic Analysis");
    page.markdown(
        "Dataset exploration and survival prediction are served by a separate workspace.\n\n\
         *It is not bundled with this build.*"
    );
    page.page_link(PageId::Home, "🏠 Back to Home", false);

    Ok(page.finish())
}

#[component]
pub fn Analysis() -> Element {
    match analysis_page() {
        Ok(view) => rsx! { PageRenderer { view } },
        Err(e) => {
            log::error!("Failed to build analysis page: {}", e);
            rsx! {
                div {
                    class: "page-error",
                    "{e}"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use crate::components::Markdown;
use crate::page::{ Block, PageView };

/// Renders a built page: document metadata first, then the blocks in order.
#[component]
pub fn PageRenderer(view: PageView) -> Element {
    let config = view.effective_config();
    let blocks = view.blocks;
    let title = config.page_title.clone();
    let icon_href = config.icon_href();

    rsx! {
        if let Some(title) = title {
            document::Title { "{title}" }
        }
        if let Some(href) = icon_href {
            document::Link { rel: "icon", href }
        }
        div {
            class: config.layout.container_class(),
            "data-layout": config.layout.as_str(),
            for block in blocks {
                PageBlock { block }
            }
        }
    }
}

#[component]
fn PageBlock(block: Block) -> Element {
    match block {
        Block::Heading { text } => rsx! {
            h1 {
                class: "page-title",
                "{text}"
            }
        },
        Block::Markdown { body } => rsx! {
            Markdown { body }
        },
        Block::PageLink { target, label, full_width } => rsx! {
            Link {
                class: if full_width { "page-link page-link-full" } else { "page-link" },
                to: target.route(),
                "{label}"
            }
        },
    }
}

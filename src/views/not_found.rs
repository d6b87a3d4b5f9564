use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::warn!("No page registered for {}", path);

    rsx! {
        document::Title { "Page not found" }
        div {
            class: "page page-narrow",
            h1 { class: "page-title", "Page not found" }
            p { "Nothing is registered at " code { "{path}" } "." }
            Link {
                class: "page-link",
                to: Route::Home {},
                "🏠 Back to Home"
            }
        }
    }
}

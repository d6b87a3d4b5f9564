use dioxus::prelude::*;
use crate::page::PageId;
use crate::utils::ThemeState;
use crate::Route;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Multipage shell: one entry per registered page, a theme toggle, and the
/// active page to the right.
#[component]
pub fn Sidebar() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();
    let route = use_route::<Route>();
    let active = PageId::from_route(&route);
    let toggle_icon = theme().toggle_icon();

    rsx! {
        document::Link { rel: "stylesheet", href: SIDEBAR_CSS }
        div {
            class: "shell",
            aside {
                id: "sidebar",
                class: "sidebar",
                nav {
                    ul {
                        {PageId::ALL.into_iter().map(|page| {
                            let key = page.logical_path();
                            let label = format!("{} {}", page.icon(), page.label());
                            rsx! {
                                li {
                                    key: "{key}",
                                    Link {
                                        class: if active == Some(page) { "sidebar-link active" } else { "sidebar-link" },
                                        to: page.route(),
                                        "{label}"
                                    }
                                }
                            }
                        })}
                    }
                }
                button {
                    class: "theme-toggle",
                    onclick: move |_| {
                        let next = theme().toggled();
                        log::info!("Switching to {} theme", if next.is_dark { "dark" } else { "light" });
                        theme.set(next);
                    },
                    "{toggle_icon}"
                }
            }
            main {
                class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

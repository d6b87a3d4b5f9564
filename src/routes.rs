use dioxus::prelude::*;
use crate::views::{ Analysis, Home, PageNotFound, Sidebar };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Sidebar)]
    #[route("/")]
    Home {},
    #[route("/analysis")]
    Analysis {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound {
        segments: Vec<String>,
    },
}

use crate::page::{ Block, PageView };

#[allow(dead_code)]
pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The single navigation block of a page, if it has exactly one.
pub fn only_link(view: &PageView) -> Option<&Block> {
    let mut links = view.blocks.iter().filter(|b| matches!(b, Block::PageLink { .. }));
    let first = links.next();
    if links.next().is_some() { None } else { first }
}

use super::common::only_link;
use crate::page::markdown::{ parse, plain_text, MdBlock };
use crate::page::{ Block, PageId };
use crate::{ analysis_page, landing_page, PageError };

#[test]
fn landing_link_resolves_through_legacy_path() {
    let view = landing_page().unwrap();
    let (target, _, _) = view.links().next().unwrap();
    assert_eq!(PageId::from_logical_path(target.logical_path()), Ok(PageId::Analysis));
    assert_eq!(target.route().to_string(), "/analysis");
}

#[test]
fn unknown_target_is_reported() {
    assert!(matches!(PageId::from_logical_path("pages/predict.py"), Err(PageError::UnknownPage(_))));
}

#[test]
fn analysis_page_links_back_home() {
    let view = analysis_page().unwrap();
    assert_eq!(view.config.as_ref().and_then(|c| c.page_title.as_deref()), Some("Titanic App - Analysis"));
    match only_link(&view) {
        Some(Block::PageLink { target, full_width, .. }) => {
            assert_eq!(*target, PageId::Home);
            assert!(!*full_width);
        }
        other => panic!("expected a single page link, got {:?}", other),
    }
}

#[test]
fn every_registered_page_has_a_distinct_url() {
    let mut urls: Vec<String> = PageId::ALL.iter().map(|p| p.route().to_string()).collect();
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), PageId::ALL.len());
}

#[test]
fn subtitle_renders_as_level_three_heading() {
    let view = landing_page().unwrap();
    let body = view
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Markdown { body } => Some(body.clone()),
            _ => None,
        })
        .unwrap();
    match parse(&body).as_slice() {
        [MdBlock::Heading { level: 3, spans }] => {
            assert_eq!(plain_text(spans), "Explore the Titanic dataset with interactive analysis and prediction!");
        }
        other => panic!("unexpected markdown: {:?}", other),
    }
}

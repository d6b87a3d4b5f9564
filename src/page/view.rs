use serde::{ Deserialize, Serialize };
use super::{ PageConfig, PageId };

/// One element of a page body, in render order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
    },
    Markdown {
        body: String,
    },
    PageLink {
        target: PageId,
        label: String,
        full_width: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// `None` when the page never called `set_page_config`.
    pub config: Option<PageConfig>,
    pub blocks: Vec<Block>,
}

/// A single step of a render pass, as observed by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent<'a> {
    ConfigurePage(&'a PageConfig),
    Block(&'a Block),
}

impl PageView {
    /// The render pass: the configuration call, if one was made, then every
    /// block in order.
    pub fn events(&self) -> Vec<RenderEvent<'_>> {
        self.config
            .iter()
            .map(RenderEvent::ConfigurePage)
            .chain(self.blocks.iter().map(RenderEvent::Block))
            .collect()
    }

    /// Configuration in effect at render time.
    pub fn effective_config(&self) -> PageConfig {
        self.config.clone().unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn links(&self) -> impl Iterator<Item = (&PageId, &str, bool)> {
        self.blocks.iter().filter_map(|block| match block {
            Block::PageLink { target, label, full_width } => Some((target, label.as_str(), *full_width)),
            _ => None,
        })
    }
}

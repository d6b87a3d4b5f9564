use crate::error::PageError;
use super::{ Block, PageConfig, PageId, PageView };

/// Collects the calls of one page load into a [`PageView`].
///
/// Page configuration may be set at most once and only before any block;
/// both rules are reported as [`PageError`]s rather than silently ignored.
#[derive(Debug, Default)]
pub struct PageBuilder {
    config: Option<PageConfig>,
    blocks: Vec<Block>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page_config(&mut self, config: PageConfig) -> Result<&mut Self, PageError> {
        if self.config.is_some() {
            return Err(PageError::ConfigAlreadySet);
        }
        if !self.blocks.is_empty() {
            return Err(PageError::ConfigAfterContent);
        }
        self.config = Some(config);
        Ok(self)
    }

    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Heading { text: text.into() })
    }

    pub fn markdown(&mut self, body: impl Into<String>) -> &mut Self {
        self.push(Block::Markdown { body: body.into() })
    }

    pub fn page_link(&mut self, target: PageId, label: impl Into<String>, full_width: bool) -> &mut Self {
        self.push(Block::PageLink {
            target,
            label: label.into(),
            full_width,
        })
    }

    pub fn finish(self) -> PageView {
        PageView {
            config: self.config,
            blocks: self.blocks,
        }
    }

    fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ Layout, RenderEvent };

    fn config() -> PageConfig {
        PageConfig::new("Test", "🧪", Layout::Wide)
    }

    #[test]
    fn config_twice_is_rejected() {
        let mut page = PageBuilder::new();
        page.set_page_config(config()).unwrap();
        assert_eq!(page.set_page_config(config()).unwrap_err(), PageError::ConfigAlreadySet);
    }

    #[test]
    fn config_after_content_is_rejected() {
        let mut page = PageBuilder::new();
        page.title("early");
        assert_eq!(page.set_page_config(config()).unwrap_err(), PageError::ConfigAfterContent);
    }

    #[test]
    fn missing_config_falls_back_to_default() {
        let mut page = PageBuilder::new();
        page.markdown("body");
        let view = page.finish();
        assert_eq!(view.config, None);
        assert_eq!(view.effective_config(), PageConfig::default());
        assert_eq!(view.blocks, vec![Block::Markdown { body: "body".to_string() }]);
    }

    #[test]
    fn unconfigured_page_emits_no_config_event() {
        let mut page = PageBuilder::new();
        page.title("no config");
        let view = page.finish();
        let events = view.events();
        assert_eq!(events.len(), 1);
        assert!(!events.iter().any(|e| matches!(e, RenderEvent::ConfigurePage(_))));
    }

    #[test]
    fn configured_page_emits_config_event_first() {
        let mut page = PageBuilder::new();
        page.set_page_config(config()).unwrap().title("a");
        let cfg = config();
        let view = page.finish();
        assert_eq!(view.events()[0], RenderEvent::ConfigurePage(&cfg));
        assert_eq!(view.events().len(), 2);
    }

    #[test]
    fn blocks_keep_call_order() {
        let mut page = PageBuilder::new();
        page.set_page_config(config()).unwrap().title("a").markdown("b").page_link(PageId::Home, "c", false);
        let view = page.finish();
        assert_eq!(view.blocks.len(), 3);
        assert!(matches!(view.blocks[0], Block::Heading { .. }));
        assert!(matches!(view.blocks[1], Block::Markdown { .. }));
        assert!(matches!(view.blocks[2], Block::PageLink { target: PageId::Home, .. }));
    }
}

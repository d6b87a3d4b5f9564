use std::fmt::{ Display, Formatter };

/// Errors raised while assembling a page before it is handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// `set_page_config` was called a second time for the same page load.
    ConfigAlreadySet,
    /// `set_page_config` was called after a block had already been rendered.
    ConfigAfterContent,
    /// A logical path that no registered page answers to.
    UnknownPage(String),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::ConfigAlreadySet => {
                write!(f, "Page Config Error: set_page_config can only be called once per page")
            }
            PageError::ConfigAfterContent => {
                write!(
                    f,
                    "Page Config Error: set_page_config must be called before any other element"
                )
            }
            PageError::UnknownPage(path) => write!(f, "Navigation Error: no page registered for '{}'", path),
        }
    }
}

impl std::error::Error for PageError {}

use serde::{ Deserialize, Serialize };
use crate::error::PageError;
use crate::routes::Route;

/// Every page the application can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    Analysis,
}

impl PageId {
    /// Sidebar order.
    pub const ALL: [PageId; 2] = [PageId::Home, PageId::Analysis];

    /// Path the page was historically addressed by. Links written against
    /// those paths still resolve through [`PageId::from_logical_path`].
    pub fn logical_path(&self) -> &'static str {
        match self {
            PageId::Home => "home.py",
            PageId::Analysis => "pages/app.py",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Analysis => "Titanic Analysis",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageId::Home => "🚢",
            PageId::Analysis => "📊",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            PageId::Home => Route::Home {},
            PageId::Analysis => Route::Analysis {},
        }
    }

    pub fn from_route(route: &Route) -> Option<PageId> {
        match route {
            Route::Home {} => Some(PageId::Home),
            Route::Analysis {} => Some(PageId::Analysis),
            Route::PageNotFound { .. } => None,
        }
    }

    pub fn from_logical_path(path: &str) -> Result<PageId, PageError> {
        let normalized = path.trim().trim_start_matches("./");
        PageId::ALL
            .into_iter()
            .find(|page| page.logical_path() == normalized)
            .ok_or_else(|| PageError::UnknownPage(path.to_string()))
    }
}

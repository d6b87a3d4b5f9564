mod analysis;
mod home;
mod not_found;
mod sidebar;

pub use analysis::{ analysis_page, Analysis };
pub use home::{ landing_page, Home };
pub use not_found::PageNotFound;
pub use sidebar::Sidebar;

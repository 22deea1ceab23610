pub mod footer;
pub mod navbar;
pub mod sidebar;

pub use footer::Footer;
pub use navbar::Navbar;
pub use sidebar::Sidebar;

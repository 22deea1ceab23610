pub mod api;
pub mod resolve;
pub mod ui;

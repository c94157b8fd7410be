pub mod dashboard;
pub mod hero;
pub mod navbar;
pub mod results_panel;
pub mod showcase;
pub mod upload_area;

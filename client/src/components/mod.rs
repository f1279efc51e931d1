//! Reusable UI components.

pub mod canvas_host;
pub mod navbar;
pub mod product_panel;
pub mod section_list;
pub mod starfield;
pub mod status_bar;

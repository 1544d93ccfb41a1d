pub mod catalog;
mod helpers;
pub mod menu_bar;
pub mod modal;
pub mod shirt;
pub mod status;
mod zoom_pane;

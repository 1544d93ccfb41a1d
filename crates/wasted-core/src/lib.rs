pub mod assets;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod modal;
pub mod scroll_lock;
pub mod share;
pub mod texture;
pub mod variant;
pub mod viewer;
pub mod viewport;

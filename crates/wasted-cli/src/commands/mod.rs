pub mod catalog;
pub mod config;
pub mod link;
pub mod show;
pub mod simulate;
pub mod split;

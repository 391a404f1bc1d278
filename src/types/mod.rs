pub mod catalog;
pub mod config;
pub mod scoring;
pub mod state;

pub mod client;
pub mod config;
pub mod error;
pub mod profile;
pub mod prompt;
pub mod quiz;
pub mod render;

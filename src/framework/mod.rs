pub mod config;
pub use config::ConfigSetup;

pub mod data;

pub mod event_handler;
pub mod logging;
pub mod poise;

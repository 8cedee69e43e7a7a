pub mod audit;
pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod credentials;
pub mod errors;
pub mod key_management;
pub mod models;
pub mod notify;
pub mod utils;
pub mod view;

pub use client::{HttpKeyService, KeyService};
pub use config::Config;
pub use errors::ConsoleError;
pub use models::ApiKey;
pub use view::{ActionOutcome, KeyListView};

// Re-export CLI types for main.rs
pub use cli::*;

// Integration tests
#[cfg(test)]
pub mod integration_test;

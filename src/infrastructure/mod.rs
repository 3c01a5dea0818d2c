//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Greeting service client.
pub mod greeting;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use greeting::HttpGreetingClient;

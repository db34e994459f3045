//! Common error type, configuration loading and shared dependencies for the Rigger crates.

pub mod config;
pub mod error;

// Re-export the shared stack so that all Rigger crates agree on one version.
pub use anyhow;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;

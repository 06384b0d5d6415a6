//! prospera-common — Shared types and configuration used across all Prospera crates.

pub mod config;
pub mod error;
pub mod owner;

pub use config::AppConfig;
pub use error::{ProsperaError, Result};
pub use owner::OwnerId;

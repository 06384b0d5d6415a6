//! Runtime configuration for the Prospera server.
//!
//! Loaded from an optional TOML file (`PROSPERA_CONFIG`) with environment
//! variables taking precedence. `.env` files are honoured via dotenvy.

use crate::error::{ProsperaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Postgres connection string.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default)]
    pub auth: AuthConfig,
}

/// Bearer-token table for the default identity provider.
///
/// Maps opaque token -> stable owner id. A real deployment swaps this for an
/// external identity provider behind the same trait.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub tokens: HashMap<String, String>,
}

fn default_bind() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_database_url() -> String {
    "postgres://localhost/prospera".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            database_url: default_database_url(),
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: `.env`, then optional TOML file, then env overrides.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match std::env::var("PROSPERA_CONFIG") {
            Ok(path) => Self::from_toml(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(bind) = std::env::var("PROSPERA_BIND") {
            config.bind = bind;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }
        // PROSPERA_TOKENS="token1:alice,token2:bob"
        if let Ok(tokens) = std::env::var("PROSPERA_TOKENS") {
            for pair in tokens.split(',').filter(|p| !p.is_empty()) {
                let (token, owner) = pair.split_once(':').ok_or_else(|| {
                    ProsperaError::Config(format!("invalid PROSPERA_TOKENS entry: {pair}"))
                })?;
                config
                    .auth
                    .tokens
                    .insert(token.trim().to_string(), owner.trim().to_string());
            }
        }

        Ok(config)
    }

    /// Load from a TOML file.
    pub fn from_toml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ProsperaError::Config(e.to_string()))
    }
}

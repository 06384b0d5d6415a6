//! Bearer-token authentication.
//!
//! The HTTP layer only ever sees the stable [`OwnerId`] the token resolves
//! to; request bodies never carry identity. The default provider is a static
//! token table from configuration, swappable for an external identity
//! service behind the same trait.

use crate::error::ApiError;
use crate::state::SharedState;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use prospera_common::config::AuthConfig;
use prospera_common::OwnerId;
use std::collections::HashMap;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve an opaque bearer token to an owner, if it is known.
    async fn resolve(&self, token: &str) -> Option<OwnerId>;
}

/// Static token -> owner table loaded from [`AuthConfig`].
#[derive(Debug, Default)]
pub struct TokenTable {
    tokens: HashMap<String, OwnerId>,
}

impl TokenTable {
    pub fn from_config(config: &AuthConfig) -> Self {
        let tokens = config
            .tokens
            .iter()
            .map(|(token, owner)| (token.clone(), OwnerId::new(owner.clone())))
            .collect();
        Self { tokens }
    }
}

#[async_trait]
impl IdentityProvider for TokenTable {
    async fn resolve(&self, token: &str) -> Option<OwnerId> {
        self.tokens.get(token).cloned()
    }
}

/// Extractor for the authenticated owner of a request.
#[derive(Debug, Clone)]
pub struct Owner(pub OwnerId);

impl FromRequestParts<SharedState> for Owner {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthorized)?;
        let owner = state
            .identity
            .resolve(token)
            .await
            .ok_or(ApiError::Unauthorized)?;
        Ok(Owner(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_table_resolves_known_token() {
        let mut config = AuthConfig::default();
        config
            .tokens
            .insert("secret".to_string(), "alice".to_string());
        let table = TokenTable::from_config(&config);

        assert_eq!(table.resolve("secret").await, Some(OwnerId::from("alice")));
        assert_eq!(table.resolve("wrong").await, None);
    }
}

//! Shared application state for the web server.

use crate::auth::IdentityProvider;
use crate::drafts::DraftStore;
use prospera_db::RecordStore;
use std::sync::Arc;

/// Capabilities injected into every handler.
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub drafts: Arc<dyn DraftStore>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecordStore>,
        identity: Arc<dyn IdentityProvider>,
        drafts: Arc<dyn DraftStore>,
    ) -> Self {
        Self {
            store,
            identity,
            drafts,
        }
    }
}

pub type SharedState = Arc<AppState>;

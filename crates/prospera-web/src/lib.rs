//! prospera-web — HTTP surface of the Prospera calculation service.

pub mod auth;
pub mod drafts;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};

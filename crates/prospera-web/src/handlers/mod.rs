//! Request handlers, one module per resource.

pub mod calculations;
pub mod drafts;
pub mod indicators;
pub mod system;

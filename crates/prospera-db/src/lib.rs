//! prospera-db — The Calculation Record Store.
//!
//! One wide record per (owner, city, country); writes are field-level merges
//! performed atomically at the store boundary. `PgRecordStore` is the
//! production backend, `MemoryRecordStore` mirrors its semantics for tests.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::{DbError, Result};
pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;
pub use store::RecordStore;

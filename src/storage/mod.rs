//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - brands(id, name, description)
//! - products(id, name, price, size, color, quantity, brand_id)

pub mod schema;
pub mod session;
pub mod sqlite;

pub use session::Session;
pub use sqlite::Store;

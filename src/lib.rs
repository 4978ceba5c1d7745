//! # ShoeWear - Inventory management for shoe brands and products
//!
//! ShoeWear keeps a small relational inventory in SQLite:
//! - Brands (manufacturers), each owning zero or more products
//! - Products (sellable items), each referencing one brand
//! - A generic persistence base shared by both entities
//! - A command surface rendering plain, boxed, or JSON tables

pub mod model;
pub mod storage;
pub mod commands;
pub mod ui;
pub mod config;

// Re-exports for convenient access
pub use model::{Brand, Entity, Product, ProductListing, ValidationError};
pub use storage::{Session, Store};

/// Result type alias for ShoeWear operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ShoeWear operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short machine-readable kind, used by the JSON error envelope
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::Storage(_) => "storage",
            Error::Io(_) => "io",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

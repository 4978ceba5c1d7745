//! Entity layer - Brands, products, and the shared persistence contract
//!
//! Every entity maps onto one table with a surrogate `id INTEGER PRIMARY KEY`
//! followed by its own columns, in the order given by [`Entity::COLUMNS`].

pub mod brand;
pub mod product;

pub use brand::Brand;
pub use product::{Product, ProductListing};

use rusqlite::Row;
use rusqlite::types::Value;

/// Identity of an entity that has not been written to the store yet.
pub const UNSAVED_ID: i64 = 0;

/// Persistence contract shared by all entities.
///
/// The generic operations on [`crate::Session`] (`save`, `delete`, `get_all`,
/// `find_by_id`) are parameterized over this trait, so each entity only
/// describes its table layout and row conversion.
pub trait Entity: Sized {
    /// Table holding rows of this entity
    const TABLE: &'static str;

    /// Non-key columns, in the order used by [`Entity::values`] and
    /// [`Entity::from_row`] (offset by one for the leading `id`)
    const COLUMNS: &'static [&'static str];

    /// Store-assigned identity, [`UNSAVED_ID`] before the first save
    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Build an entity from a row selected with [`Entity::select_list`]
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Column values matching [`Entity::COLUMNS`]
    fn values(&self) -> Vec<Value>;

    fn is_persisted(&self) -> bool {
        self.id() != UNSAVED_ID
    }

    /// `id` plus every column, qualified with `alias` when given
    fn select_list(alias: Option<&str>) -> String {
        let prefix = alias.map(|a| format!("{}.", a)).unwrap_or_default();
        std::iter::once("id")
            .chain(Self::COLUMNS.iter().copied())
            .map(|col| format!("{}{}", prefix, col))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Out-of-contract input rejected by an entity factory.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Brand name cannot be empty")]
    EmptyBrandName,

    #[error("Brand name cannot exceed {max} characters")]
    BrandNameTooLong { max: usize },

    #[error("Product name cannot be empty")]
    EmptyProductName,

    #[error("Product name cannot exceed {max} characters")]
    ProductNameTooLong { max: usize },

    #[error("Price must be positive")]
    NonPositivePrice,

    #[error("Size must be positive")]
    NonPositiveSize,

    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    #[error("Color cannot exceed {max} characters")]
    ColorTooLong { max: usize },
}

/// Length in characters, not bytes
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

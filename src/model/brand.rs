//! Brand entity - a manufacturer owning zero or more products

use rusqlite::Row;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};
use crate::Result;
use crate::storage::Session;
use super::{char_len, Entity, ValidationError, UNSAVED_ID};

/// A shoe manufacturer.
///
/// Products referencing a brand are looked up with
/// [`Product::find_by_brand`](super::Product::find_by_brand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Store-assigned identity (0 until saved)
    pub id: i64,
    /// Unique brand name, 1..=100 characters
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
}

impl Brand {
    /// Maximum brand name length in characters
    pub const MAX_NAME_LEN: usize = 100;

    /// Build and validate an unsaved brand
    pub fn new(name: impl Into<String>, description: Option<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyBrandName.into());
        }
        if char_len(&name) > Self::MAX_NAME_LEN {
            return Err(ValidationError::BrandNameTooLong { max: Self::MAX_NAME_LEN }.into());
        }

        Ok(Self {
            id: UNSAVED_ID,
            name,
            description,
        })
    }

    /// Validate, persist, and return the new brand with its id assigned
    pub fn create(
        session: &Session<'_>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self> {
        let brand = Self::new(name, description)?;
        session.save(brand)
    }

    /// Exact-match lookup by name
    pub fn find_by_name(session: &Session<'_>, name: &str) -> Result<Option<Self>> {
        let mut matches = session.select_where::<Self, _>("name = ?1", [name])?;
        Ok(if matches.is_empty() { None } else { Some(matches.swap_remove(0)) })
    }
}

impl Entity for Brand {
    const TABLE: &'static str = "brands";
    const COLUMNS: &'static [&'static str] = &["name", "description"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.name.clone()),
            Value::from(self.description.clone()),
        ]
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Brand {}>", self.name)
    }
}

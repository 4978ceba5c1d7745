//! Command surface - brand and product command handlers
//!
//! Each handler opens one session, runs its operation, reports the result
//! through a [`Console`], and releases the session on every path. Handled
//! failures are reported, not returned; only output errors propagate.

pub mod brand;
pub mod init;
pub mod product;

use std::io::{self, Write};
use tabled::Tabled;
use crate::model::{Product, ProductListing};
use crate::storage::{Session, Store};
use crate::ui::Console;

const NOT_AVAILABLE: &str = "N/A";

/// Run `op` in a fresh session, reporting any failure under `command`
pub(crate) fn run<W, E, F>(store: &Store, console: &mut Console<W, E>, command: &str, op: F) -> io::Result<()>
where
    W: Write,
    E: Write,
    F: FnOnce(&Session<'_>, &mut Console<W, E>) -> crate::Result<()>,
{
    let result = store.with_session(|session| op(session, console));
    if let Err(err) = result {
        tracing::debug!("{} failed: {}", command, err);
        console.error(command, &err)?;
    }
    Ok(())
}

/// Product row without the brand column (listing under a brand)
#[derive(Tabled)]
pub struct ProductRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Size")]
    pub size: i64,
    #[tabled(rename = "Color")]
    pub color: String,
    #[tabled(rename = "Quantity")]
    pub quantity: i64,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            price: format_price(p.price),
            size: p.size,
            color: p.color.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            quantity: p.quantity,
        }
    }
}

/// Product row including its brand name
#[derive(Tabled)]
pub struct ListingRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Brand")]
    pub brand: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Size")]
    pub size: i64,
    #[tabled(rename = "Color")]
    pub color: String,
    #[tabled(rename = "Quantity")]
    pub quantity: i64,
}

impl From<&ProductListing> for ListingRow {
    fn from(l: &ProductListing) -> Self {
        let p = ProductRow::from(&l.product);
        Self {
            id: p.id,
            name: p.name,
            brand: l.brand_name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            price: p.price,
            size: p.size,
            color: p.color,
            quantity: p.quantity,
        }
    }
}

/// Prices always show a fractional part (`120.0`, `99.95`)
pub fn format_price(price: f64) -> String {
    format!("{:?}", price)
}

/// Treat a blank optional answer as absent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

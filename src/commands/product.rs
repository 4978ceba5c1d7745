use std::io::{self, BufRead, Write};
use crate::model::{Product, ProductListing};
use crate::storage::Store;
use crate::ui::{Console, Prompter};
use super::{non_empty, run, ListingRow};

/// Arguments of `product add`
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub size: i64,
    pub brand_id: i64,
    pub color: Option<String>,
    pub quantity: i64,
}

impl ProductInput {
    /// Fill in values missing from the command line by prompting
    #[allow(clippy::too_many_arguments)]
    pub fn resolve<R: BufRead, W: Write>(
        name: Option<String>,
        price: Option<f64>,
        size: Option<i64>,
        brand_id: Option<i64>,
        color: Option<String>,
        quantity: Option<i64>,
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<Self> {
        let name = match name {
            Some(v) => v,
            None => prompter.text("Product name", None)?,
        };
        let price = match price {
            Some(v) => v,
            None => prompter.parsed("Price", None)?,
        };
        let size = match size {
            Some(v) => v,
            None => prompter.parsed("Size", None)?,
        };
        let brand_id = match brand_id {
            Some(v) => v,
            None => prompter.parsed("Brand ID", None)?,
        };
        let color = match color {
            Some(v) => v,
            None => prompter.text("Color (optional)", Some(""))?,
        };
        let quantity = match quantity {
            Some(v) => v,
            None => prompter.parsed("Quantity", Some(0))?,
        };

        Ok(Self {
            name,
            price,
            size,
            brand_id,
            color: non_empty(Some(color)),
            quantity,
        })
    }
}

pub fn add<W: Write, E: Write>(store: &Store, console: &mut Console<W, E>, input: ProductInput) -> io::Result<()> {
    run(store, console, "product add", |session, console| {
        let product = Product::create(
            session,
            input.name,
            input.price,
            input.size,
            input.brand_id,
            input.color,
            input.quantity,
        )?;
        let message = format!("Product '{}' added successfully with ID: {}", product.name, product.id);
        console.done("product add", &message, &product)?;
        Ok(())
    })
}

pub fn list<W: Write, E: Write>(store: &Store, console: &mut Console<W, E>) -> io::Result<()> {
    run(store, console, "product list", |session, console| {
        let listings = ProductListing::all(session)?;
        let rows: Vec<ListingRow> = listings.iter().map(ListingRow::from).collect();
        console.listing("product list", None, "No products found.", &rows, &listings)?;
        Ok(())
    })
}

pub fn delete<W: Write, E: Write>(store: &Store, console: &mut Console<W, E>, product_id: i64) -> io::Result<()> {
    run(store, console, "product delete", |session, console| {
        let Some(product) = session.find_by_id::<Product>(product_id)? else {
            console.not_found("product delete", &format!("Product with ID {} not found.", product_id))?;
            return Ok(());
        };

        let message = format!("Product '{}' deleted successfully.", product.name);
        session.delete(product.clone())?;
        console.done("product delete", &message, &product)?;
        Ok(())
    })
}

pub fn search<W: Write, E: Write>(store: &Store, console: &mut Console<W, E>, term: &str) -> io::Result<()> {
    run(store, console, "product search", |session, console| {
        let listings = ProductListing::search(session, term)?;
        let rows: Vec<ListingRow> = listings.iter().map(ListingRow::from).collect();
        console.listing(
            "product search",
            Some(&format!("Products matching '{}':", term)),
            &format!("No products found matching '{}'.", term),
            &rows,
            &listings,
        )?;
        Ok(())
    })
}

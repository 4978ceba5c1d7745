use std::io::{self, BufRead, Write};
use tabled::Tabled;
use crate::model::{Brand, Product};
use crate::storage::Store;
use crate::ui::{Console, Prompter};
use super::{non_empty, run, ProductRow, NOT_AVAILABLE};

#[derive(Tabled)]
pub struct BrandRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

impl From<&Brand> for BrandRow {
    fn from(b: &Brand) -> Self {
        Self {
            id: b.id,
            name: b.name.clone(),
            description: b.description.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// Arguments of `brand add`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandInput {
    pub name: String,
    pub description: Option<String>,
}

impl BrandInput {
    /// Fill in values missing from the command line by prompting
    pub fn resolve<R: BufRead, W: Write>(
        name: Option<String>,
        description: Option<String>,
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<Self> {
        let name = match name {
            Some(name) => name,
            None => prompter.text("Brand name", None)?,
        };
        let description = match description {
            Some(description) => description,
            None => prompter.text("Description (optional)", Some(""))?,
        };
        Ok(Self {
            name,
            description: non_empty(Some(description)),
        })
    }
}

pub fn add<W: Write, E: Write>(store: &Store, console: &mut Console<W, E>, input: BrandInput) -> io::Result<()> {
    run(store, console, "brand add", |session, console| {
        let brand = Brand::create(session, input.name, input.description)?;
        let message = format!("Brand '{}' added successfully with ID: {}", brand.name, brand.id);
        console.done("brand add", &message, &brand)?;
        Ok(())
    })
}

pub fn list<W: Write, E: Write>(store: &Store, console: &mut Console<W, E>) -> io::Result<()> {
    run(store, console, "brand list", |session, console| {
        let brands: Vec<Brand> = session.get_all()?;
        let rows: Vec<BrandRow> = brands.iter().map(BrandRow::from).collect();
        console.listing("brand list", None, "No brands found.", &rows, &brands)?;
        Ok(())
    })
}

pub fn delete<W: Write, E: Write>(store: &Store, console: &mut Console<W, E>, brand_id: i64) -> io::Result<()> {
    run(store, console, "brand delete", |session, console| {
        let Some(brand) = session.find_by_id::<Brand>(brand_id)? else {
            console.not_found("brand delete", &format!("Brand with ID {} not found.", brand_id))?;
            return Ok(());
        };

        let message = format!("Brand '{}' deleted successfully.", brand.name);
        session.delete(brand.clone())?;
        console.done("brand delete", &message, &brand)?;
        Ok(())
    })
}

pub fn products<W: Write, E: Write>(store: &Store, console: &mut Console<W, E>, brand_id: i64) -> io::Result<()> {
    run(store, console, "brand products", |session, console| {
        let Some(brand) = session.find_by_id::<Brand>(brand_id)? else {
            console.not_found("brand products", &format!("Brand with ID {} not found.", brand_id))?;
            return Ok(());
        };

        let products = Product::find_by_brand(session, brand.id)?;
        let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
        console.listing(
            "brand products",
            Some(&format!("Products for brand '{}':", brand.name)),
            &format!("No products found for brand '{}'.", brand.name),
            &rows,
            &products,
        )?;
        Ok(())
    })
}

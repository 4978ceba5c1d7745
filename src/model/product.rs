//! Product entity - a sellable item belonging to one brand

use rusqlite::Row;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};
use crate::Result;
use crate::storage::Session;
use super::{char_len, Brand, Entity, ValidationError, UNSAVED_ID};

/// A shoe model held in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identity (0 until saved)
    pub id: i64,
    pub name: String,
    /// Unit price, always > 0
    pub price: f64,
    /// Shoe size, always > 0
    pub size: i64,
    pub color: Option<String>,
    /// Units in stock, never negative
    pub quantity: i64,
    /// Owning brand. Not checked for existence; rows written by other
    /// tools may carry no brand at all.
    pub brand_id: Option<i64>,
}

impl Product {
    pub const MAX_NAME_LEN: usize = 100;
    pub const MAX_COLOR_LEN: usize = 50;

    /// Build and validate an unsaved product
    pub fn new(
        name: impl Into<String>,
        price: f64,
        size: i64,
        brand_id: i64,
        color: Option<String>,
        quantity: i64,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyProductName.into());
        }
        if char_len(&name) > Self::MAX_NAME_LEN {
            return Err(ValidationError::ProductNameTooLong { max: Self::MAX_NAME_LEN }.into());
        }
        if price.is_nan() || price <= 0.0 {
            return Err(ValidationError::NonPositivePrice.into());
        }
        if size <= 0 {
            return Err(ValidationError::NonPositiveSize.into());
        }
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity.into());
        }
        if color.as_deref().is_some_and(|c| char_len(c) > Self::MAX_COLOR_LEN) {
            return Err(ValidationError::ColorTooLong { max: Self::MAX_COLOR_LEN }.into());
        }

        Ok(Self {
            id: UNSAVED_ID,
            name,
            price,
            size,
            color,
            quantity,
            brand_id: Some(brand_id),
        })
    }

    /// Validate, persist, and return the new product with its id assigned.
    ///
    /// `brand_id` is stored as given; no brand lookup is performed.
    pub fn create(
        session: &Session<'_>,
        name: impl Into<String>,
        price: f64,
        size: i64,
        brand_id: i64,
        color: Option<String>,
        quantity: i64,
    ) -> Result<Self> {
        let product = Self::new(name, price, size, brand_id, color, quantity)?;
        session.save(product)
    }

    /// Case-insensitive substring search on the product name
    pub fn find_by_name(session: &Session<'_>, term: &str) -> Result<Vec<Self>> {
        session.select_where(r"name LIKE ?1 ESCAPE '\'", [like_pattern(term)])
    }

    /// All products whose `brand_id` equals `brand_id`
    pub fn find_by_brand(session: &Session<'_>, brand_id: i64) -> Result<Vec<Self>> {
        session.select_where("brand_id = ?1", [brand_id])
    }
}

impl Entity for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] =
        &["name", "price", "size", "color", "quantity", "brand_id"];

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
            price: row.get(2)?,
            size: row.get(3)?,
            color: row.get(4)?,
            quantity: row.get::<_, Option<i64>>(5)?.unwrap_or(0),
            brand_id: row.get(6)?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.name.clone()),
            Value::from(self.price),
            Value::from(self.size),
            Value::from(self.color.clone()),
            Value::from(self.quantity),
            Value::from(self.brand_id),
        ]
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Product {}>", self.name)
    }
}

/// A product joined with the name of its brand.
///
/// `brand_name` is `None` when the referenced brand no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    #[serde(flatten)]
    pub product: Product,
    pub brand_name: Option<String>,
}

impl ProductListing {
    /// Every product with its brand name, ordered by product id
    pub fn all(session: &Session<'_>) -> Result<Vec<Self>> {
        Self::query(session, "1 = 1", [])
    }

    /// Products whose name contains `term` (case-insensitive), with brand names
    pub fn search(session: &Session<'_>, term: &str) -> Result<Vec<Self>> {
        Self::query(session, r"p.name LIKE ?1 ESCAPE '\'", [like_pattern(term)])
    }

    fn query<P: rusqlite::Params>(session: &Session<'_>, clause: &str, params: P) -> Result<Vec<Self>> {
        let sql = format!(
            "SELECT {}, b.name FROM {} p LEFT JOIN {} b ON b.id = p.brand_id WHERE {} ORDER BY p.id",
            Product::select_list(Some("p")),
            Product::TABLE,
            Brand::TABLE,
            clause
        );
        let brand_col = Product::COLUMNS.len() + 1;

        let mut stmt = session.connection().prepare(&sql)?;
        let listings = stmt
            .query_map(params, |row| {
                Ok(Self {
                    product: Product::from_row(row)?,
                    brand_name: row.get(brand_col)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(listings)
    }
}

/// `%term%` with LIKE wildcards in `term` escaped
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::storage::Store;

    fn seed_brand(session: &Session<'_>, name: &str) -> Brand {
        Brand::create(session, name, None).unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        let brand = seed_brand(&session, "Nike");

        let product = Product::create(&session, "Air Max", 129.99, 42, brand.id, None, 0).unwrap();
        let fetched = session.find_by_id::<Product>(product.id).unwrap().unwrap();

        assert_eq!(fetched, product);
        assert_eq!(fetched.quantity, 0);
        assert!(fetched.color.is_none());
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        let brand = seed_brand(&session, "Nike");
        let writes = session.writes();

        let cases = [
            (Product::create(&session, "", 10.0, 42, brand.id, None, 0), ValidationError::EmptyProductName),
            (Product::create(&session, "Air", 0.0, 42, brand.id, None, 0), ValidationError::NonPositivePrice),
            (Product::create(&session, "Air", -5.0, 42, brand.id, None, 0), ValidationError::NonPositivePrice),
            (Product::create(&session, "Air", f64::NAN, 42, brand.id, None, 0), ValidationError::NonPositivePrice),
            (Product::create(&session, "Air", 10.0, 0, brand.id, None, 0), ValidationError::NonPositiveSize),
            (Product::create(&session, "Air", 10.0, -3, brand.id, None, 0), ValidationError::NonPositiveSize),
            (Product::create(&session, "Air", 10.0, 42, brand.id, None, -1), ValidationError::NegativeQuantity),
            (
                Product::create(&session, "Air", 10.0, 42, brand.id, Some("c".repeat(51)), 0),
                ValidationError::ColorTooLong { max: 50 },
            ),
            (
                Product::create(&session, "a".repeat(101), 10.0, 42, brand.id, None, 0),
                ValidationError::ProductNameTooLong { max: 100 },
            ),
        ];

        for (result, expected) in cases {
            match result {
                Err(Error::Validation(err)) => assert_eq!(err, expected),
                other => panic!("expected {:?}, got {:?}", expected, other),
            }
        }

        assert!(session.get_all::<Product>().unwrap().is_empty());
        assert_eq!(session.writes(), writes);
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        let brand = seed_brand(&session, "Nike");

        let name = "n".repeat(100);
        let color = "c".repeat(50);
        let product = Product::create(&session, name.clone(), 10.0, 42, brand.id, Some(color.clone()), 0).unwrap();

        let fetched = session.find_by_id::<Product>(product.id).unwrap().unwrap();
        assert_eq!(fetched.name, name);
        assert_eq!(fetched.color, Some(color));
    }

    #[test]
    fn test_rows_without_brand_still_load() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        session
            .connection()
            .execute(
                "INSERT INTO products (name, price, size, color, quantity, brand_id) VALUES ('Air Force', 90.0, 44, NULL, 2, NULL)",
                [],
            )
            .unwrap();

        let products: Vec<Product> = session.get_all().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].brand_id, None);

        let listings = ProductListing::all(&session).unwrap();
        assert_eq!(listings[0].product.name, "Air Force");
        assert_eq!(listings[0].brand_name, None);

        let hits = ProductListing::search(&session, "air").unwrap();
        assert_eq!(hits.len(), 1);
        assert!(Product::find_by_brand(&session, 1).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_name_case_insensitive_substring() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        let brand = seed_brand(&session, "Nike");

        Product::create(&session, "Air Max", 120.0, 42, brand.id, None, 1).unwrap();
        Product::create(&session, "air zoom", 110.0, 43, brand.id, None, 2).unwrap();
        Product::create(&session, "Pegasus", 100.0, 44, brand.id, None, 3).unwrap();

        let names: Vec<_> = Product::find_by_name(&session, "air")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Air Max", "air zoom"]);

        assert_eq!(Product::find_by_name(&session, "ZOOM").unwrap().len(), 1);
        assert!(Product::find_by_name(&session, "boot").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_name_matches_wildcards_literally() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        let brand = seed_brand(&session, "Nike");

        Product::create(&session, "Runner 50% off", 60.0, 42, brand.id, None, 0).unwrap();
        Product::create(&session, "Runner 500", 90.0, 42, brand.id, None, 0).unwrap();
        Product::create(&session, "Trail_X", 90.0, 42, brand.id, None, 0).unwrap();

        assert_eq!(Product::find_by_name(&session, "50%").unwrap().len(), 1);
        assert_eq!(Product::find_by_name(&session, "_").unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_brand() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        let nike = seed_brand(&session, "Nike");
        let adidas = seed_brand(&session, "Adidas");
        let empty = seed_brand(&session, "NoStock");

        Product::create(&session, "Air Max", 120.0, 42, nike.id, None, 0).unwrap();
        Product::create(&session, "Pegasus", 100.0, 42, nike.id, None, 0).unwrap();
        Product::create(&session, "Samba", 90.0, 41, adidas.id, None, 0).unwrap();

        let nike_products = Product::find_by_brand(&session, nike.id).unwrap();
        assert_eq!(nike_products.len(), 2);
        assert!(nike_products.iter().all(|p| p.brand_id == Some(nike.id)));

        assert_eq!(Product::find_by_brand(&session, adidas.id).unwrap().len(), 1);
        assert!(Product::find_by_brand(&session, empty.id).unwrap().is_empty());
        assert!(Product::find_by_brand(&session, 9999).unwrap().is_empty());
    }

    #[test]
    fn test_create_accepts_unknown_brand_id() {
        // No existence check on the referenced brand
        let store = Store::open_in_memory().unwrap();
        let session = store.session();

        let product = Product::create(&session, "Orphan", 50.0, 40, 777, None, 0).unwrap();
        assert_eq!(product.brand_id, Some(777));

        let listings = ProductListing::all(&session).unwrap();
        assert_eq!(listings.len(), 1);
        assert!(listings[0].brand_name.is_none());
    }

    #[test]
    fn test_deleting_brand_leaves_products_dangling() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        let brand = seed_brand(&session, "Nike");
        let brand_id = brand.id;

        Product::create(&session, "Air Max", 120.0, 42, brand_id, Some("Red".into()), 3).unwrap();
        session.delete(brand).unwrap();

        let products: Vec<Product> = session.get_all().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].brand_id, Some(brand_id));
        assert!(session.find_by_id::<Brand>(brand_id).unwrap().is_none());

        let listings = ProductListing::all(&session).unwrap();
        assert_eq!(listings[0].brand_name, None);
    }

    #[test]
    fn test_listing_search_joins_brand() {
        let store = Store::open_in_memory().unwrap();
        let session = store.session();
        let nike = seed_brand(&session, "Nike");
        let asics = seed_brand(&session, "Asics");

        Product::create(&session, "Air Max", 120.0, 42, nike.id, None, 0).unwrap();
        Product::create(&session, "Gel Air", 130.0, 43, asics.id, None, 0).unwrap();
        Product::create(&session, "Pegasus", 100.0, 44, nike.id, None, 0).unwrap();

        let hits = ProductListing::search(&session, "AIR").unwrap();
        let pairs: Vec<_> = hits
            .iter()
            .map(|l| (l.product.name.as_str(), l.brand_name.as_deref()))
            .collect();
        assert_eq!(pairs, vec![("Air Max", Some("Nike")), ("Gel Air", Some("Asics"))]);
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("air"), "%air%");
        assert_eq!(like_pattern("50%"), r"%50\%%");
        assert_eq!(like_pattern(r"a_b\c"), r"%a\_b\\c%");
    }
}

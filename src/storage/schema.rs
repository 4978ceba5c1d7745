//! Database schema definitions

/// SQL to create the brands table
pub const CREATE_BRANDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS brands (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL UNIQUE,
    description TEXT
)
"#;

/// SQL to create the products table
/// `brand_id` is declared as a reference but foreign keys are not enforced
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL,
    price REAL NOT NULL,
    size INTEGER NOT NULL,
    color VARCHAR(50),
    quantity INTEGER DEFAULT 0,
    brand_id INTEGER REFERENCES brands(id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_products_brand ON products(brand_id)",
    "CREATE INDEX IF NOT EXISTS idx_products_name ON products(name)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_BRANDS_TABLE, CREATE_PRODUCTS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

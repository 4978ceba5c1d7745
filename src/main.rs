//! ShoeWear CLI - Inventory management for shoe brands and products

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use shoewear::commands::{self, brand::BrandInput, product::ProductInput};
use shoewear::config::{self, default_config_path};
use shoewear::storage::Store;
use shoewear::ui::{Console, OutputFormat, Prompter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "shoewear")]
#[command(version)]
#[command(about = "ShoeWear Inventory Management System")]
#[command(long_about = r#"
ShoeWear keeps track of shoe brands and the products they make.

Example usage:
  shoewear brand add --name Nike --description "Just do it"
  shoewear product add --name "Air Max" --price 129.99 --size 42 --brand-id 1
  shoewear product search air
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file for this directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Manage brands
    #[command(subcommand)]
    Brand(BrandCommand),

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommand),
}

#[derive(Subcommand)]
enum BrandCommand {
    /// Add a new brand
    Add {
        /// Name of the brand
        #[arg(long)]
        name: Option<String>,

        /// Description of the brand
        #[arg(long)]
        description: Option<String>,
    },

    /// List all brands
    List,

    /// Delete a brand by ID
    Delete {
        #[arg(allow_negative_numbers = true)]
        brand_id: i64,
    },

    /// List all products for a brand
    Products {
        #[arg(allow_negative_numbers = true)]
        brand_id: i64,
    },
}

#[derive(Subcommand)]
enum ProductCommand {
    /// Add a new product
    Add {
        /// Name of the product
        #[arg(long)]
        name: Option<String>,

        /// Price of the product
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,

        /// Size of the product
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// ID of the brand
        #[arg(long, allow_negative_numbers = true)]
        brand_id: Option<i64>,

        /// Color of the product
        #[arg(long)]
        color: Option<String>,

        /// Quantity in stock
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,
    },

    /// List all products
    List,

    /// Delete a product by ID
    Delete {
        #[arg(allow_negative_numbers = true)]
        product_id: i64,
    },

    /// Search products by name
    Search {
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let loaded = config::load_config(Some(config_path.as_path()))?;
    let database = config::resolve_database(cli.database.as_deref(), loaded.as_ref());
    tracing::debug!("Using database {:?}", database);

    let mut console = Console::stdio(cli.format);

    match cli.command {
        Commands::Init { force } => {
            commands::init::run_init(&mut console, &config_path, &database, force)?;
        }
        Commands::Brand(command) => {
            let store = open_store(&database)?;
            run_brand(&store, &mut console, command)?;
            store.close()?;
        }
        Commands::Product(command) => {
            let store = open_store(&database)?;
            run_product(&store, &mut console, command)?;
            store.close()?;
        }
    }

    Ok(())
}

fn open_store(database: &Path) -> anyhow::Result<Store> {
    config::ensure_db_dir(database)?;
    Ok(Store::open(database)?)
}

fn run_brand(store: &Store, console: &mut Console, command: BrandCommand) -> anyhow::Result<()> {
    match command {
        BrandCommand::Add { name, description } => {
            let input = BrandInput::resolve(name, description, &mut Prompter::stdio())?;
            commands::brand::add(store, console, input)?;
        }
        BrandCommand::List => commands::brand::list(store, console)?,
        BrandCommand::Delete { brand_id } => commands::brand::delete(store, console, brand_id)?,
        BrandCommand::Products { brand_id } => commands::brand::products(store, console, brand_id)?,
    }
    Ok(())
}

fn run_product(store: &Store, console: &mut Console, command: ProductCommand) -> anyhow::Result<()> {
    match command {
        ProductCommand::Add { name, price, size, brand_id, color, quantity } => {
            let input = ProductInput::resolve(
                name,
                price,
                size,
                brand_id,
                color,
                quantity,
                &mut Prompter::stdio(),
            )?;
            commands::product::add(store, console, input)?;
        }
        ProductCommand::List => commands::product::list(store, console)?,
        ProductCommand::Delete { product_id } => commands::product::delete(store, console, product_id)?,
        ProductCommand::Search { name } => commands::product::search(store, console, &name)?,
    }
    Ok(())
}

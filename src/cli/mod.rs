//! Command line interface
//!
//! The `storefront` binary: browse the catalog, inspect a product, edit the
//! saved cart and list past orders.

use std::{fs, io, path::Path};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    cart::{Cart, CartSnapshot, SnapshotError},
    catalog::Catalog,
    display::{
        DisplayError, write_cart, write_catalog, write_categories, write_not_found, write_orders,
        write_product_detail,
    },
    fixtures::{Fixture, FixtureError},
    products::ProductId,
    query::{PriceBracket, QueryParameters, SortKey},
    reviews::ReviewCounts,
};

pub mod actions;
pub mod config;

use actions::{AddAction, SetAction};
use config::{LoggingConfig, StoreConfig};

/// Errors raised while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Fixture data could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Saved cart could not be read or written.
    #[error("cart file {0}: {1}")]
    CartFile(String, io::Error),

    /// Saved cart is malformed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// `--add` named a product the catalog does not have.
    #[error("no product with id {0}")]
    UnknownProduct(ProductId),

    /// Output could not be rendered.
    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Storefront command line
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog and cart", long_about = None)]
pub struct Cli {
    /// Data locations.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Storefront subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, optionally filtered and sorted
    Browse(BrowseArgs),

    /// Show one product
    Show {
        /// Product id
        id: ProductId,
    },

    /// Edit and show the saved cart
    Cart(CartArgs),

    /// List past orders
    Orders,

    /// List product categories
    Categories,
}

/// Catalog filters. Unrecognised bracket and sort names fall back to the defaults.
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive text to find in titles and descriptions
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category to restrict to
    #[arg(short, long)]
    pub category: Option<String>,

    /// Price bracket (all, under-25, 25-50, 50-100, 100-200, over-200)
    #[arg(short, long, default_value = "all")]
    pub price: String,

    /// Sort order (featured, price-low, price-high, rating, newest)
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

impl BrowseArgs {
    /// Query parameters for these arguments.
    pub fn parameters(&self) -> QueryParameters {
        let mut params = QueryParameters::default()
            .with_price_bracket(PriceBracket::from(self.price.as_str()))
            .with_sort_key(SortKey::from(self.sort.as_str()));

        if let Some(search) = &self.search {
            params = params.with_search_text(search.as_str());
        }

        if let Some(category) = &self.category {
            params = params.with_category(category.as_str());
        }

        params
    }
}

/// Cart edits, applied as adds, then sets, then removes, then clear.
#[derive(Debug, Args)]
pub struct CartArgs {
    /// Add a product: `ID` or `ID:QTY`
    #[arg(long = "add", value_name = "ID[:QTY]")]
    pub add: Vec<AddAction>,

    /// Set a line's quantity: `ID=QTY`
    #[arg(long = "set", value_name = "ID=QTY")]
    pub set: Vec<SetAction>,

    /// Remove a product's line
    #[arg(long = "remove", value_name = "ID")]
    pub remove: Vec<ProductId>,

    /// Empty the cart
    #[arg(long)]
    pub clear: bool,
}

impl CartArgs {
    /// Whether any edit was requested.
    pub fn has_changes(&self) -> bool {
        !self.add.is_empty() || !self.set.is_empty() || !self.remove.is_empty() || self.clear
    }

    /// Apply the requested edits to `cart`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownProduct`] if an added id is not in the catalog.
    pub fn apply<'a>(&self, cart: &mut Cart<'a>, catalog: &Catalog<'a>) -> Result<(), CliError> {
        for action in &self.add {
            let product = catalog
                .product(action.id)
                .ok_or(CliError::UnknownProduct(action.id))?;

            cart.add_item(product, action.quantity);
        }

        for action in &self.set {
            cart.set_quantity(action.id, action.quantity);
        }

        for id in &self.remove {
            cart.remove_item(*id);
        }

        if self.clear {
            cart.clear();
        }

        Ok(())
    }
}

/// Run the parsed command, writing its output to `out`.
///
/// # Errors
///
/// Returns an error if the fixtures or saved cart cannot be loaded, or output
/// cannot be written.
pub fn run(cli: &Cli, mut out: impl io::Write) -> Result<(), CliError> {
    let fixture = Fixture::from_set_in(cli.store.fixtures_dir.clone(), &cli.store.fixture_set)?;
    let catalog = fixture.catalog()?;
    let mut reviews = ReviewCounts::seeded(cli.store.review_seed);

    info!(
        fixture_set = %cli.store.fixture_set,
        products = catalog.len(),
        "catalog loaded"
    );

    match &cli.command {
        Command::Browse(args) => {
            let params = args.parameters();
            let results = catalog.query(&params);

            write_catalog(&mut out, &params.heading(), &results, &mut reviews)?;
        }
        Command::Show { id } => match catalog.product(*id) {
            Some(product) => write_product_detail(&mut out, product, &mut reviews)?,
            None => write_not_found(&mut out, *id)?,
        },
        Command::Cart(args) => {
            let mut cart = Cart::restore(&load_snapshot(&cli.store.cart_file)?, &catalog);

            if args.has_changes() {
                args.apply(&mut cart, &catalog)?;
                save_snapshot(&cli.store.cart_file, &cart.snapshot())?;
            }

            write_cart(&mut out, &cart)?;
        }
        Command::Orders => write_orders(&mut out, &fixture.orders())?,
        Command::Categories => write_categories(&mut out, &catalog.categories())?,
    }

    Ok(())
}

/// Read a saved cart. A missing file is an empty cart.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_snapshot(path: &Path) -> Result<CartSnapshot, CliError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(CartSnapshot::from_yaml(&contents)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no saved cart");

            Ok(CartSnapshot::default())
        }
        Err(err) => Err(CliError::CartFile(path.display().to_string(), err)),
    }
}

/// Write a cart snapshot.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be serialised or written.
pub fn save_snapshot(path: &Path, snapshot: &CartSnapshot) -> Result<(), CliError> {
    let yaml = snapshot.to_yaml()?;

    if let Err(err) = fs::write(path, yaml) {
        warn!(path = %path.display(), "failed to save cart");

        return Err(CliError::CartFile(path.display().to_string(), err));
    }

    debug!(path = %path.display(), lines = snapshot.len(), "saved cart");

    Ok(())
}

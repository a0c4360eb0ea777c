//! Fixtures
//!
//! Catalogs and starting carts described in YAML, e.g. `fixtures/default.yml`:
//!
//! ```yaml
//! sellers:
//!   1: TechStore Pro
//! products:
//!   - id: 1
//!     name: Wireless Headphones Pro Max
//!     price: 4999 INR
//!     original_price: 7999 INR
//!     seller: 1
//! cart:
//!   - product: 1
//!     quantity: 1
//! ```

use std::{
    fs,
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    fixtures::products::{OfferFixture, ProductFixture, parse_price},
    offers::SellerOffers,
    products::ProductId,
    sellers::{Seller, SellerId},
};

pub mod products;

/// Default directory fixture sets are read from.
pub const DEFAULT_FIXTURES_DIR: &str = "./fixtures";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Seller referenced but not defined
    #[error("Seller not found: {0}")]
    SellerNotFound(SellerId),

    /// A quantity that must be positive was zero
    #[error("Invalid zero quantity for product {0}")]
    InvalidQuantity(ProductId),

    /// No products, so the currency is unknown
    #[error("No products defined; currency unknown")]
    NoProducts,

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Cart construction error
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Top-level YAML document
#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    sellers: FxHashMap<SellerId, String>,

    products: Vec<ProductFixture>,

    #[serde(default)]
    offers: FxHashMap<ProductId, Vec<OfferFixture>>,

    #[serde(default)]
    cart: Vec<CartLineFixture>,
}

/// Starting cart line
#[derive(Debug, Deserialize)]
struct CartLineFixture {
    product: ProductId,
    quantity: u32,
}

/// A catalog plus the lines of the starting cart.
#[derive(Debug)]
pub struct Fixture<'a> {
    catalog: Catalog<'a>,
    cart: Vec<(ProductId, NonZeroU32)>,
}

impl<'a> Fixture<'a> {
    /// Load a fixture set by name from [`DEFAULT_FIXTURES_DIR`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in(DEFAULT_FIXTURES_DIR, name)
    }

    /// Load a fixture set by name from `base_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let file_path = base_path.into().join(format!("{name}.yml"));

        Self::from_file(&file_path)
    }

    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        debug!(path = %path.display(), "loading fixture");

        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price or quantity is
    /// invalid, a seller or product reference is unknown, or prices disagree on
    /// currency.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let fixture: FixtureFile = serde_norway::from_str(contents)?;

        let sellers: FxHashMap<SellerId, Seller> = fixture
            .sellers
            .into_iter()
            .map(|(id, name)| (id, Seller::new(id, name)))
            .collect();

        let currency = match fixture.products.first() {
            Some(first) => parse_price(&first.price)?.1,
            None => return Err(FixtureError::NoProducts),
        };

        let lookup = |id: SellerId| sellers.get(&id).cloned();

        let mut catalog = Catalog::new(currency);

        for seller in sellers.values() {
            catalog.insert_seller(seller.clone());
        }

        for product in fixture.products {
            catalog.insert(product.try_into_product(lookup)?)?;
        }

        for (product, offers) in fixture.offers {
            let offers = offers
                .into_iter()
                .map(|offer| offer.try_into_offer(lookup))
                .collect::<Result<Vec<_>, _>>()?;

            catalog.insert_offers(SellerOffers::new(product, offers))?;
        }

        let cart = fixture
            .cart
            .into_iter()
            .map(|line| {
                NonZeroU32::new(line.quantity)
                    .map(|quantity| (line.product, quantity))
                    .ok_or(FixtureError::InvalidQuantity(line.product))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            products = catalog.len(),
            cart_lines = cart.len(),
            currency = catalog.currency().iso_alpha_code,
            "loaded fixture"
        );

        Ok(Self { catalog, cart })
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// Build the starting cart.
    ///
    /// # Errors
    ///
    /// Returns an error if a cart line references a product missing from the catalog.
    pub fn cart(&self) -> Result<Cart<'a>, FixtureError> {
        let lines = self
            .cart
            .iter()
            .map(|&(product, quantity)| -> Result<CartLine<'a>, FixtureError> {
                let product = self.catalog.get(product)?;

                Ok(CartLine::new(product.clone(), quantity))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::with_lines(lines, self.catalog.currency())?)
    }
}

//! Catalog
//!
//! Read-only product and seller reference data, in a single currency.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    offers::SellerOffers,
    products::{Product, ProductId},
    sellers::{Seller, SellerId},
};

/// Errors building or querying a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A product with this identifier is already in the catalog.
    #[error("Product {0} already exists")]
    DuplicateProduct(ProductId),

    /// A price is in a different currency (product, price currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// No product with this identifier.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    product_index: FxHashMap<ProductId, usize>,
    sellers: FxHashMap<SellerId, Seller>,
    offers: FxHashMap<ProductId, SellerOffers<'a>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: Vec::new(),
            product_index: FxHashMap::default(),
            sellers: FxHashMap::default(),
            offers: FxHashMap::default(),
            currency,
        }
    }

    /// Add or replace a seller.
    pub fn insert_seller(&mut self, seller: Seller) {
        self.sellers.insert(seller.id, seller);
    }

    /// Add a product.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the identifier is taken or the product is
    /// priced in another currency.
    pub fn insert(&mut self, product: Product<'a>) -> Result<(), CatalogError> {
        if self.product_index.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        self.check_currency(product.id, product.currency())?;

        if let Some(original) = product.original_price {
            self.check_currency(product.id, original.currency())?;
        }

        for tier in product.tiers.iter() {
            self.check_currency(product.id, tier.price.currency())?;
        }

        self.product_index.insert(product.id, self.products.len());
        self.products.push(product);

        Ok(())
    }

    /// Attach seller offers to a product already in the catalog.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the product is unknown or an offer is priced
    /// in another currency.
    pub fn insert_offers(&mut self, offers: SellerOffers<'a>) -> Result<(), CatalogError> {
        let product = offers.product();

        if !self.product_index.contains_key(&product) {
            return Err(CatalogError::ProductNotFound(product));
        }

        for offer in offers.iter() {
            self.check_currency(product, offer.price.currency())?;
        }

        self.offers.insert(product, offers);

        Ok(())
    }

    /// Get a product.
    pub fn product(&self, id: ProductId) -> Option<&Product<'a>> {
        self.product_index
            .get(&id)
            .and_then(|&idx| self.products.get(idx))
    }

    /// Get a product, or an error naming the missing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if there is no such product.
    pub fn get(&self, id: ProductId) -> Result<&Product<'a>, CatalogError> {
        self.product(id).ok_or(CatalogError::ProductNotFound(id))
    }

    /// Products listed for wholesale buyers, in insertion order.
    pub fn wholesale(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products
            .iter()
            .filter(|product| product.vendor_type.is_wholesale())
    }

    /// Get a seller.
    pub fn seller(&self, id: SellerId) -> Option<&Seller> {
        self.sellers.get(&id)
    }

    /// Seller offers for a product, if any were listed.
    pub fn offers(&self, id: ProductId) -> Option<&SellerOffers<'a>> {
        self.offers.get(&id)
    }

    /// Iterate over products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency of every price in the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn check_currency(&self, product: ProductId, currency: &Currency) -> Result<(), CatalogError> {
        if currency == self.currency {
            Ok(())
        } else {
            Err(CatalogError::CurrencyMismatch(
                product,
                currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{INR, USD},
    };
    use testresult::TestResult;

    use crate::{
        offers::{DeliveryEstimate, SellerOffer},
        wholesale::VendorType,
    };

    use super::*;

    #[test]
    fn insert_and_lookup_preserves_order() -> TestResult {
        let mut catalog = Catalog::new(INR);

        catalog.insert(Product::new(3, "Premium Running Shoes", Money::from_minor(3499, INR)))?;
        catalog.insert(Product::new(1, "Wireless Headphones Pro Max", Money::from_minor(4999, INR)))?;

        let ids: Vec<u32> = catalog.iter().map(|p| p.id.get()).collect();

        assert_eq!(ids, vec![3, 1]);
        assert_eq!(catalog.get(ProductId::new(1))?.name, "Wireless Headphones Pro Max");
        assert_eq!(catalog.len(), 2);

        Ok(())
    }

    #[test]
    fn duplicate_product_is_rejected() -> TestResult {
        let mut catalog = Catalog::new(INR);

        catalog.insert(Product::new(1, "A", Money::from_minor(100, INR)))?;

        let result = catalog.insert(Product::new(1, "B", Money::from_minor(200, INR)));

        assert_eq!(result, Err(CatalogError::DuplicateProduct(ProductId::new(1))));

        Ok(())
    }

    #[test]
    fn currency_mismatch_is_rejected() {
        let mut catalog = Catalog::new(INR);

        let result = catalog.insert(
            Product::new(1, "A", Money::from_minor(100, INR))
                .with_original_price(Money::from_minor(200, USD)),
        );

        assert_eq!(
            result,
            Err(CatalogError::CurrencyMismatch(ProductId::new(1), "USD", "INR"))
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_product_lookup() {
        let catalog = Catalog::new(INR);

        assert!(catalog.product(ProductId::new(9)).is_none());
        assert_eq!(
            catalog.get(ProductId::new(9)).err(),
            Some(CatalogError::ProductNotFound(ProductId::new(9)))
        );
    }

    #[test]
    fn wholesale_lists_bulk_and_dual_listings() -> TestResult {
        let mut catalog = Catalog::new(INR);

        catalog.insert(Product::new(1, "Headphones", Money::from_minor(4999, INR)))?;
        catalog.insert(
            Product::new(2, "Rice Sack", Money::from_minor(2500, INR))
                .with_vendor_type(VendorType::Wholesale),
        )?;
        catalog.insert(
            Product::new(3, "Watch", Money::from_minor(12999, INR)).with_vendor_type(VendorType::Both),
        )?;

        let ids: Vec<u32> = catalog.wholesale().map(|p| p.id.get()).collect();

        assert_eq!(ids, vec![2, 3]);

        Ok(())
    }

    #[test]
    fn offers_require_known_product() -> TestResult {
        let mut catalog = Catalog::new(INR);
        let offer = SellerOffer {
            seller: Seller::new(1, "TechStore Pro"),
            price: Money::from_minor(4999, INR),
            original_price: None,
            delivery: DeliveryEstimate::new(2, 3),
        };

        let result = catalog.insert_offers(SellerOffers::new(ProductId::new(1), [offer.clone()]));

        assert_eq!(result, Err(CatalogError::ProductNotFound(ProductId::new(1))));

        catalog.insert(Product::new(1, "Headphones", Money::from_minor(4999, INR)))?;
        catalog.insert_offers(SellerOffers::new(ProductId::new(1), [offer]))?;

        assert_eq!(catalog.offers(ProductId::new(1)).map(SellerOffers::len), Some(1));

        Ok(())
    }
}

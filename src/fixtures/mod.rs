//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    fixtures::products::ProductsFixture,
    products::{Product, ProductKey},
};

pub mod offers;
pub mod products;

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

    /// Unknown offer type
    #[error("Unknown offer type: {0}")]
    UnknownOfferType(String),

    /// Unknown payment mode
    #[error("Unknown payment mode: {0}")]
    UnknownPaymentMode(String),

    /// Invalid billing period format
    #[error("Invalid billing period: {0}")]
    InvalidPeriod(String),

    /// Offer priced in a different currency than its product
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Fixture
///
/// Loads product catalogs (with their discount offers) from YAML fixture
/// files and exposes them keyed both by string key and by `ProductKey`.
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// `SlotMap` storing the actual products with generated keys
    product_meta: SlotMap<ProductKey, Product<'a>>,

    /// String key -> `SlotMap` key mapping for lookups
    product_keys: FxHashMap<String, ProductKey>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with the default base path
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            product_meta: SlotMap::with_key(),
            product_keys: FxHashMap::default(),
        }
    }

    /// Load products (and their offers) from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// product or offer carries invalid data.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (key, product_fixture) in fixture.products {
            let product: Product<'a> = product_fixture.try_into()?;
            let product_key = self.product_meta.insert(product);

            self.product_keys.insert(key, product_key);
        }

        Ok(self)
    }

    /// Load a complete fixture set by name
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?;

        Ok(fixture)
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product<'a>, FixtureError> {
        let product_key = self
            .product_keys
            .get(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))?;

        self.product_meta
            .get(*product_key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get a product key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product_key(&self, key: &str) -> Result<ProductKey, FixtureError> {
        self.product_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Number of loaded products
    #[must_use]
    pub fn len(&self) -> usize {
        self.product_meta.len()
    }

    /// Returns `true` if no products have been loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_meta.is_empty()
    }

    /// Get the product metadata `SlotMap`
    #[must_use]
    pub fn product_meta_map(&self) -> &SlotMap<ProductKey, Product<'a>> {
        &self.product_meta
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{offers::PeriodUnit, payment::PaymentMode};

    use super::*;

    fn write_products_fixture(base: &Path, name: &str, contents: &str) -> TestResult {
        let dir = base.join("products");

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_demo_products_and_offers() -> TestResult {
        let fixture = Fixture::from_set("demo")?;

        assert_eq!(fixture.len(), 3);

        let pro = fixture.product("pro_monthly")?;

        assert_eq!(pro.name, "Pro Monthly");
        assert_eq!(pro.price.to_minor_units(), 999);
        assert_eq!(pro.price.currency(), USD);
        assert_eq!(pro.offers.len(), 2);

        Ok(())
    }

    #[test]
    fn fixture_parses_offer_fields() -> TestResult {
        let fixture = Fixture::from_set("demo")?;
        let pro = fixture.product("pro_monthly")?;

        let trial = pro.offers.first().ok_or("Expected a trial offer")?;

        assert_eq!(trial.payment_mode(), PaymentMode::FreeTrial);
        assert_eq!(trial.period().unit(), PeriodUnit::Week);
        assert_eq!(trial.period().count(), 1);
        assert!(trial.price().is_zero());

        let launch = pro.offers.get(1).ok_or("Expected a launch offer")?;

        assert_eq!(launch.identifier(), Some("launch"));
        assert_eq!(launch.payment_mode(), PaymentMode::PayAsYouGo);
        assert_eq!(launch.period_count(), 3);
        assert_eq!(launch.price().to_minor_units(), 299);

        Ok(())
    }

    #[test]
    fn fixture_product_not_found_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.product("nonexistent");

        assert!(matches!(result, Err(FixtureError::ProductNotFound(_))));
    }

    #[test]
    fn fixture_product_key_not_found_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.product_key("nonexistent");

        assert!(matches!(result, Err(FixtureError::ProductNotFound(_))));
    }

    #[test]
    fn fixture_missing_file_returns_io_error() {
        let result = Fixture::from_set("no_such_set");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn fixture_rejects_malformed_yaml() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_products_fixture(dir.path(), "broken", "products: [not, a, map\n")?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_products("broken");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }

    #[test]
    fn fixture_rejects_invalid_price() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_products_fixture(
            dir.path(),
            "bad_price",
            "products:\n  app:\n    name: App\n    price: 2.99USD\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_products("bad_price");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));

        Ok(())
    }

    #[test]
    fn fixture_rejects_unknown_currency() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_products_fixture(
            dir.path(),
            "bad_currency",
            "products:\n  app:\n    name: App\n    price: 2.99 ZZZ\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_products("bad_currency");

        assert!(
            matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ZZZ")
        );

        Ok(())
    }

    #[test]
    fn fixture_rejects_offer_in_foreign_currency() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_products_fixture(
            dir.path(),
            "mismatch",
            "products:\n  app:\n    name: App\n    price: 9.99 USD\n    locale: en_US\n    offers:\n      - type: introductory\n        payment_mode: pay_up_front\n        price: 4.99 EUR\n        period: 1 month\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_products("mismatch");

        assert!(matches!(
            result,
            Err(FixtureError::CurrencyMismatch(expected, found))
                if expected == "USD" && found == "EUR"
        ));

        Ok(())
    }

    #[test]
    fn fixture_rejects_unknown_payment_mode() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_products_fixture(
            dir.path(),
            "bad_mode",
            "products:\n  app:\n    name: App\n    price: 9.99 USD\n    offers:\n      - type: introductory\n        payment_mode: pay_later\n        price: 4.99 USD\n        period: 1 month\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_products("bad_mode");

        assert!(
            matches!(result, Err(FixtureError::UnknownPaymentMode(mode)) if mode == "pay_later")
        );

        Ok(())
    }

    #[test]
    fn fixture_default_matches_new() {
        let fixture = Fixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert!(fixture.is_empty());
    }
}

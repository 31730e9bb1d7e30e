//! Product Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, offers::OfferFixture},
    locales::PriceLocale,
    products::Product,
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Regular price (e.g., "9.99 USD")
    pub price: String,

    /// Locale tag for rendering (e.g., "en_US")
    #[serde(default)]
    pub locale: Option<String>,

    /// Discount offers attached to the product
    #[serde(default)]
    pub offers: Vec<OfferFixture>,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        let locale = fixture
            .locale
            .as_deref()
            .map_or_else(PriceLocale::currency_default, PriceLocale::from_tag);

        let mut offers = Vec::with_capacity(fixture.offers.len());

        for offer_fixture in fixture.offers {
            let offer = offer_fixture.try_into_offer(locale)?;

            // Savings are computed against the product price, so an offer
            // must be priced in the product's currency.
            if offer.price().currency() != price.currency() {
                return Err(FixtureError::CurrencyMismatch(
                    price.currency().iso_alpha_code.to_string(),
                    offer.price().currency().iso_alpha_code.to_string(),
                ));
            }

            offers.push(offer);
        }

        Ok(Product {
            name: fixture.name,
            price,
            locale,
            offers,
        })
    }
}

/// Parse a price string (e.g., "2.99 USD") into a money value
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not in the ISO registry.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = iso::find(currency_code)
        .ok_or_else(|| FixtureError::UnknownCurrency((*currency_code).to_string()))?;

    Ok(Money::from_decimal(amount, currency))
}

//! Products

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

use crate::{locales::PriceLocale, offers::Offer};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// A purchasable product with its regular price and any discount offers.
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// Product name
    pub name: String,

    /// Regular (non-discounted) price
    pub price: Money<'a, Currency>,

    /// Locale used to render the product's prices
    pub locale: PriceLocale,

    /// Discount offers attached to the product
    pub offers: Vec<Offer<'a>>,
}

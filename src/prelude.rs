//! Pricetag prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    display::OfferDisplay,
    fixtures::{Fixture, FixtureError},
    locales::{PriceLocale, SymbolPosition, format_price},
    offers::{BillingPeriod, Offer, OfferType, PeriodUnit},
    payment::PaymentMode,
    preview::{Preview, PreviewError},
    pricing::{percent_points, savings_percent},
    products::{Product, ProductKey},
};

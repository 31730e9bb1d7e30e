//! Offer Fixtures

use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, products::parse_price},
    locales::PriceLocale,
    offers::{BillingPeriod, Offer, PeriodUnit},
    payment::PaymentMode,
};

/// Offer fixture from YAML
#[derive(Debug, Deserialize)]
pub struct OfferFixture {
    /// Offer type: "introductory" or "promotional"
    #[serde(rename = "type")]
    pub kind: String,

    /// Store identifier, carried by promotional offers
    #[serde(default)]
    pub identifier: Option<String>,

    /// Payment mode tag, e.g. "pay_as_you_go"
    pub payment_mode: String,

    /// Offer price (e.g., "2.99 USD")
    pub price: String,

    /// Length of one billing period (e.g., "1 month")
    pub period: String,

    /// Number of billing periods the offer spans
    #[serde(default = "default_period_count")]
    pub period_count: u32,
}

fn default_period_count() -> u32 {
    1
}

impl OfferFixture {
    /// Convert to an [`Offer`], rendering with the given locale
    ///
    /// # Errors
    ///
    /// Returns an error if the offer type, payment mode, price or period
    /// cannot be parsed.
    pub fn try_into_offer(self, locale: PriceLocale) -> Result<Offer<'static>, FixtureError> {
        let price = parse_price(&self.price)?;
        let payment_mode = parse_payment_mode(&self.payment_mode)?;
        let period = parse_period(&self.period)?;

        match self.kind.as_str() {
            "introductory" => Ok(Offer::introductory(
                price,
                locale,
                payment_mode,
                period,
                self.period_count,
            )),
            "promotional" => Ok(Offer::promotional(
                self.identifier.unwrap_or_default(),
                price,
                locale,
                payment_mode,
                period,
                self.period_count,
            )),
            other => Err(FixtureError::UnknownOfferType(other.to_string())),
        }
    }
}

/// Parse a payment mode tag (e.g., "pay_as_you_go")
///
/// # Errors
///
/// Returns an error for tags outside the known mode set. Fixtures are
/// authored by hand, so unknown tags are rejected here rather than mapped
/// to the unrecognised mode.
pub fn parse_payment_mode(s: &str) -> Result<PaymentMode, FixtureError> {
    match s {
        "pay_as_you_go" => Ok(PaymentMode::PayAsYouGo),
        "pay_up_front" => Ok(PaymentMode::PayUpFront),
        "free_trial" => Ok(PaymentMode::FreeTrial),
        other => Err(FixtureError::UnknownPaymentMode(other.to_string())),
    }
}

/// Parse a billing period string (e.g., "1 month", "3 weeks")
///
/// # Errors
///
/// Returns an error if the string is not in the format "COUNT UNIT", if
/// the count is zero or unparsable, or if the unit is unknown.
pub fn parse_period(s: &str) -> Result<BillingPeriod, FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(count_str), Some(unit_str), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPeriod(s.to_string()));
    };

    let count: u32 = count_str
        .parse()
        .map_err(|_err| FixtureError::InvalidPeriod(s.to_string()))?;

    if count == 0 {
        return Err(FixtureError::InvalidPeriod(s.to_string()));
    }

    let unit = match unit_str {
        "day" | "days" => PeriodUnit::Day,
        "week" | "weeks" => PeriodUnit::Week,
        "month" | "months" => PeriodUnit::Month,
        "year" | "years" => PeriodUnit::Year,
        _ => return Err(FixtureError::InvalidPeriod(s.to_string())),
    };

    Ok(BillingPeriod::new(unit, count))
}

//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};

/// Calculates the relative savings of an offer price against the regular
/// price, as a fraction (0.25 for 25% off).
///
/// A zero regular price yields 0% rather than dividing by zero.
///
/// # Errors
///
/// Returns a [`MoneyError`] if the two prices use different currencies.
pub fn savings_percent(
    regular: Money<'_, Currency>,
    offer_price: Money<'_, Currency>,
) -> Result<Percentage, MoneyError> {
    let saved = regular.sub(offer_price)?;

    let saved_minor = saved.to_minor_units();
    let regular_minor = regular.to_minor_units();

    if regular_minor == 0 {
        return Ok(Percentage::from(0.0));
    }

    // Ratio is taken in decimal space to avoid integer truncation.
    let saved_dec = Decimal::from_i64(saved_minor).unwrap_or(Decimal::ZERO);
    let regular_dec = Decimal::from_i64(regular_minor).unwrap_or(Decimal::ZERO);

    Ok(Percentage::from(saved_dec / regular_dec))
}

/// Converts a fractional percentage to percent points for display,
/// rounded to two decimal places.
#[must_use]
pub fn percent_points(percentage: Percentage) -> Decimal {
    ((percentage * Decimal::ONE) * Decimal::from_i64(100).unwrap_or(Decimal::ZERO)).round_dp(2)
}

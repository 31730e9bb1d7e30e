//! Display strings
//!
//! Derived customer-facing strings for discount offers. The offer model
//! is owned elsewhere, so the accessors hang off an extension trait
//! rather than the type itself. All three are pure: same input, same
//! string, no state, no failure modes.

use crate::{
    locales::{PriceLocale, format_price},
    offers::Offer,
};

/// Display-string accessors for a discount offer.
pub trait OfferDisplay {
    /// Fixed human-readable label for the offer's payment mode.
    ///
    /// Total over the mode set: unrecognised modes yield the empty
    /// string.
    fn payment_mode_string(&self) -> &'static str;

    /// The offer price rendered with the offer's own locale.
    fn price_string(&self) -> String;

    /// The offer price rendered with a caller-supplied locale, ignoring
    /// the offer's own locale entirely.
    fn price_string_with_locale(&self, locale: PriceLocale) -> String;
}

impl OfferDisplay for Offer<'_> {
    fn payment_mode_string(&self) -> &'static str {
        self.payment_mode().label()
    }

    fn price_string(&self) -> String {
        format_price(self.price(), self.locale())
    }

    fn price_string_with_locale(&self, locale: PriceLocale) -> String {
        format_price(self.price(), locale)
    }
}

//! Locales
//!
//! Regional conventions for rendering monetary amounts. A [`PriceLocale`]
//! resolved from a known tag carries explicit separators, grouping and
//! symbol placement; anything else defers to the currency's own display
//! conventions, so price rendering is total over arbitrary tags.

use rusty_money::{Formatter, Money, Params, Position, iso::Currency};

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// Immediately before the amount: `$2.99`.
    Before,

    /// Before the amount, separated by a space: `R$ 2,99`.
    BeforeSpaced,

    /// After the amount, separated by a space: `2,99 €`.
    After,
}

const GROUP_THREES: &[usize] = &[3, 3, 3];
const GROUP_LAKHS: &[usize] = &[3, 2, 2];

const POSITIONS_BEFORE: &[Position] = &[Position::Sign, Position::Symbol, Position::Amount];
const POSITIONS_BEFORE_SPACED: &[Position] = &[
    Position::Sign,
    Position::Symbol,
    Position::Space,
    Position::Amount,
];
const POSITIONS_AFTER: &[Position] = &[
    Position::Sign,
    Position::Amount,
    Position::Space,
    Position::Symbol,
];

/// Explicit number conventions carried by a recognised locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    digit_separator: char,
    exponent_separator: char,
    separator_pattern: &'static [usize],
    symbol_position: SymbolPosition,
}

impl Conventions {
    /// Formatter parameters for rendering an amount of `currency` under
    /// these conventions.
    fn params(self, currency: &Currency) -> Params<'static> {
        let positions = match self.symbol_position {
            SymbolPosition::Before => POSITIONS_BEFORE,
            SymbolPosition::BeforeSpaced => POSITIONS_BEFORE_SPACED,
            SymbolPosition::After => POSITIONS_AFTER,
        };

        Params {
            digit_separator: self.digit_separator,
            exponent_separator: self.exponent_separator,
            separator_pattern: self.separator_pattern,
            positions,
            rounding: Some(currency.exponent),
            symbol: Some(currency.symbol),
            code: Some(currency.iso_alpha_code),
        }
    }
}

/// A locale descriptor controlling how prices are rendered.
///
/// Equality is conventions-based: two tags that resolve to the same
/// conventions compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceLocale {
    conventions: Option<Conventions>,
}

impl PriceLocale {
    /// US/UK style: `$2.99`, `£1,234.56`.
    pub const EN_US: Self = Self::known(',', '.', GROUP_THREES, SymbolPosition::Before);

    /// Indian grouping: `₹1,00,000.00`.
    pub const EN_IN: Self = Self::known(',', '.', GROUP_LAKHS, SymbolPosition::Before);

    /// French style: `2,99 $`, `1 234,56 €`.
    pub const FR_FR: Self = Self::known(' ', ',', GROUP_THREES, SymbolPosition::After);

    /// Continental European style: `1.234,56 €`.
    pub const DE_DE: Self = Self::known('.', ',', GROUP_THREES, SymbolPosition::After);

    /// Swiss style: `Fr 1'234.56`.
    pub const DE_CH: Self = Self::known('\'', '.', GROUP_THREES, SymbolPosition::BeforeSpaced);

    /// Brazilian style: `R$ 1.234,56`.
    pub const PT_BR: Self = Self::known('.', ',', GROUP_THREES, SymbolPosition::BeforeSpaced);

    /// Nordic/Slavic style: `1 234,56 kr`.
    pub const SV_SE: Self = Self::known(' ', ',', GROUP_THREES, SymbolPosition::After);

    const fn known(
        digit_separator: char,
        exponent_separator: char,
        separator_pattern: &'static [usize],
        symbol_position: SymbolPosition,
    ) -> Self {
        Self {
            conventions: Some(Conventions {
                digit_separator,
                exponent_separator,
                separator_pattern,
                symbol_position,
            }),
        }
    }

    /// A locale with no explicit conventions; rendering defers to the
    /// currency's own display defaults.
    #[must_use]
    pub const fn currency_default() -> Self {
        Self { conventions: None }
    }

    /// Resolves a BCP-47-style tag (`"en_US"`, `"fr-FR"`, `"de"`) to a
    /// locale.
    ///
    /// Case-insensitive; accepts `-` or `_` separators; falls back to the
    /// language alone when the region is unknown. Total: anything
    /// unrecognised resolves to [`PriceLocale::currency_default`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        resolve(tag).unwrap_or(Self::currency_default())
    }

    /// The explicit conventions, if this locale carries any.
    #[must_use]
    pub const fn conventions(self) -> Option<Conventions> {
        self.conventions
    }

    /// Returns `true` when rendering defers to the currency's defaults.
    #[must_use]
    pub const fn is_currency_default(self) -> bool {
        self.conventions.is_none()
    }
}

fn resolve(tag: &str) -> Option<PriceLocale> {
    let mut parts = tag.split(['-', '_']);
    let language = parts.next()?.to_ascii_lowercase();
    let region = parts.next().map(str::to_ascii_uppercase);

    match (language.as_str(), region.as_deref()) {
        ("en", Some("IN")) => Some(PriceLocale::EN_IN),
        ("en" | "ja" | "zh" | "ko", _) => Some(PriceLocale::EN_US),
        ("fr", _) => Some(PriceLocale::FR_FR),
        ("de", Some("CH")) => Some(PriceLocale::DE_CH),
        ("pt", Some("BR")) => Some(PriceLocale::PT_BR),
        ("de" | "es" | "it" | "nl" | "pt", _) => Some(PriceLocale::DE_DE),
        ("sv" | "nb" | "da" | "fi" | "ru", _) => Some(PriceLocale::SV_SE),
        _ => None,
    }
}

/// Renders `price` under `locale`'s conventions.
///
/// Number and currency rendering is delegated entirely to the money
/// library's formatter; a locale without explicit conventions falls back
/// to the price's own `Display`, which uses the currency's defaults.
#[must_use]
pub fn format_price(price: &Money<'_, Currency>, locale: PriceLocale) -> String {
    match locale.conventions() {
        Some(conventions) => Formatter::money(price, conventions.params(price.currency())),
        None => price.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{EUR, INR, JPY, SEK, USD};

    use super::*;

    #[test]
    fn from_tag_resolves_known_tags() {
        assert_eq!(PriceLocale::from_tag("en_US"), PriceLocale::EN_US);
        assert_eq!(PriceLocale::from_tag("en_IN"), PriceLocale::EN_IN);
        assert_eq!(PriceLocale::from_tag("fr_FR"), PriceLocale::FR_FR);
        assert_eq!(PriceLocale::from_tag("de_DE"), PriceLocale::DE_DE);
        assert_eq!(PriceLocale::from_tag("de_CH"), PriceLocale::DE_CH);
        assert_eq!(PriceLocale::from_tag("pt_BR"), PriceLocale::PT_BR);
        assert_eq!(PriceLocale::from_tag("sv_SE"), PriceLocale::SV_SE);
    }

    #[test]
    fn from_tag_accepts_hyphens_and_mixed_case() {
        assert_eq!(PriceLocale::from_tag("fr-FR"), PriceLocale::FR_FR);
        assert_eq!(PriceLocale::from_tag("EN_us"), PriceLocale::EN_US);
        assert_eq!(PriceLocale::from_tag("pt-br"), PriceLocale::PT_BR);
    }

    #[test]
    fn from_tag_falls_back_to_language() {
        assert_eq!(PriceLocale::from_tag("fr"), PriceLocale::FR_FR);
        assert_eq!(PriceLocale::from_tag("de_AT"), PriceLocale::DE_DE);
        assert_eq!(PriceLocale::from_tag("en_NZ"), PriceLocale::EN_US);
    }

    #[test]
    fn from_tag_degrades_to_currency_default() {
        assert!(PriceLocale::from_tag("xx_YY").is_currency_default());
        assert!(PriceLocale::from_tag("").is_currency_default());
        assert!(PriceLocale::from_tag("not a tag").is_currency_default());
    }

    #[test]
    fn format_price_en_us() {
        let price = Money::from_minor(299, USD);

        assert_eq!(format_price(&price, PriceLocale::EN_US), "$2.99");
    }

    #[test]
    fn format_price_fr_fr_places_symbol_after_amount() {
        let price = Money::from_minor(299, USD);

        assert_eq!(format_price(&price, PriceLocale::FR_FR), "2,99 $");
    }

    #[test]
    fn format_price_groups_large_amounts() {
        let price = Money::from_minor(123_456, EUR);

        assert_eq!(format_price(&price, PriceLocale::FR_FR), "1 234,56 €");
        assert_eq!(format_price(&price, PriceLocale::DE_DE), "1.234,56 €");
        assert_eq!(format_price(&price, PriceLocale::EN_US), "€1,234.56");
    }

    #[test]
    fn format_price_uses_indian_grouping() {
        let price = Money::from_minor(10_000_000, INR);

        assert_eq!(format_price(&price, PriceLocale::EN_IN), "₹1,00,000.00");
    }

    #[test]
    fn format_price_handles_zero_exponent_currencies() {
        let price = Money::from_minor(300, JPY);

        assert_eq!(format_price(&price, PriceLocale::EN_US), "¥300");
    }

    #[test]
    fn format_price_nordic_style() {
        let price = Money::from_minor(123_456, SEK);

        assert_eq!(format_price(&price, PriceLocale::SV_SE), "1 234,56 kr");
    }

    #[test]
    fn format_price_currency_default_matches_display() {
        let price = Money::from_minor(299, USD);
        let fallback = PriceLocale::currency_default();

        assert_eq!(format_price(&price, fallback), price.to_string());
        assert_eq!(format_price(&price, fallback), "$2.99");
    }

    #[test]
    fn format_price_zero_amount() {
        let price = Money::from_minor(0, USD);

        assert_eq!(format_price(&price, PriceLocale::EN_US), "$0.00");
    }

    #[test]
    fn format_price_negative_amount_keeps_sign_first() {
        let price = Money::from_minor(-299, USD);

        assert_eq!(format_price(&price, PriceLocale::EN_US), "-$2.99");
        assert_eq!(format_price(&price, PriceLocale::FR_FR), "-2,99 $");
    }

    #[test]
    fn default_locale_is_currency_default() {
        assert!(PriceLocale::default().is_currency_default());
    }
}

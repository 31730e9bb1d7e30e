//! Offers

use std::fmt;

use rusty_money::{Money, iso::Currency};

use crate::{locales::PriceLocale, payment::PaymentMode};

/// Whether an offer is an introductory price or a later promotional price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferType {
    /// First-subscription introductory pricing.
    Introductory,

    /// Promotional pricing offered to current or lapsed subscribers.
    Promotional,
}

impl OfferType {
    /// Fixed display label for the offer type.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OfferType::Introductory => "Introductory",
            OfferType::Promotional => "Promotional",
        }
    }
}

/// Calendar unit of a billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    /// A single day.
    Day,

    /// Seven days.
    Week,

    /// A calendar month.
    Month,

    /// A calendar year.
    Year,
}

impl PeriodUnit {
    fn singular(self) -> &'static str {
        match self {
            PeriodUnit::Day => "day",
            PeriodUnit::Week => "week",
            PeriodUnit::Month => "month",
            PeriodUnit::Year => "year",
        }
    }
}

/// Length of a single billing period, e.g. "1 week" or "3 months".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingPeriod {
    unit: PeriodUnit,
    count: u32,
}

impl BillingPeriod {
    /// Creates a billing period of `count` units.
    #[must_use]
    pub const fn new(unit: PeriodUnit, count: u32) -> Self {
        Self { unit, count }
    }

    /// The calendar unit of the period.
    #[must_use]
    pub const fn unit(self) -> PeriodUnit {
        self.unit
    }

    /// The number of units in the period.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.count
    }

    /// Human-readable period label: "1 week", "3 months".
    #[must_use]
    pub fn label(self) -> String {
        let unit = self.unit.singular();

        if self.count == 1 {
            format!("1 {unit}")
        } else {
            format!("{} {unit}s", self.count)
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A promotional pricing term attached to a purchasable product.
///
/// Offers are read-only inputs: the formatting operations over them never
/// mutate the offer, and every accessor borrows or copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer<'a> {
    identifier: Option<String>,
    offer_type: OfferType,
    price: Money<'a, Currency>,
    locale: PriceLocale,
    payment_mode: PaymentMode,
    period: BillingPeriod,
    period_count: u32,
}

impl<'a> Offer<'a> {
    /// Creates an introductory offer.
    ///
    /// Introductory offers carry no identifier.
    #[must_use]
    pub fn introductory(
        price: Money<'a, Currency>,
        locale: PriceLocale,
        payment_mode: PaymentMode,
        period: BillingPeriod,
        period_count: u32,
    ) -> Self {
        Self {
            identifier: None,
            offer_type: OfferType::Introductory,
            price,
            locale,
            payment_mode,
            period,
            period_count,
        }
    }

    /// Creates a promotional offer with its store identifier.
    #[must_use]
    pub fn promotional(
        identifier: impl Into<String>,
        price: Money<'a, Currency>,
        locale: PriceLocale,
        payment_mode: PaymentMode,
        period: BillingPeriod,
        period_count: u32,
    ) -> Self {
        Self {
            identifier: Some(identifier.into()),
            offer_type: OfferType::Promotional,
            price,
            locale,
            payment_mode,
            period,
            period_count,
        }
    }

    /// The store identifier, present on promotional offers.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Whether the offer is introductory or promotional.
    #[must_use]
    pub fn offer_type(&self) -> OfferType {
        self.offer_type
    }

    /// The discounted price.
    #[must_use]
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// The offer's own rendering locale.
    #[must_use]
    pub fn locale(&self) -> PriceLocale {
        self.locale
    }

    /// The billing pattern of the offer.
    #[must_use]
    pub fn payment_mode(&self) -> PaymentMode {
        self.payment_mode
    }

    /// Length of one billing period.
    #[must_use]
    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    /// How many billing periods the offer spans.
    #[must_use]
    pub fn period_count(&self) -> u32 {
        self.period_count
    }
}

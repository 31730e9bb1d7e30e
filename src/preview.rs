//! Preview

use std::io;

use rust_decimal::Decimal;
use rusty_money::MoneyError;
use slotmap::SlotMap;
use smallvec::{SmallVec, smallvec};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    display::OfferDisplay,
    locales::{PriceLocale, format_price},
    offers::Offer,
    payment::PaymentMode,
    pricing::{percent_points, savings_percent},
    products::{Product, ProductKey},
};

/// Errors that can occur when rendering a price sheet.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    Io,
}

/// Terminal price sheet for a product catalog.
///
/// Renders one row per product and a detail row per offer, with every
/// price localized through the same accessors library consumers use.
#[derive(Debug)]
pub struct Preview<'a, 'b> {
    products: &'b SlotMap<ProductKey, Product<'a>>,
    locale_override: Option<PriceLocale>,
}

impl<'a, 'b> Preview<'a, 'b> {
    /// Create a preview over a product catalog.
    #[must_use]
    pub fn new(products: &'b SlotMap<ProductKey, Product<'a>>) -> Self {
        Self {
            products,
            locale_override: None,
        }
    }

    /// Render every price with the given locale instead of each product's
    /// or offer's own.
    #[must_use]
    pub fn with_locale(mut self, locale: PriceLocale) -> Self {
        self.locale_override = Some(locale);
        self
    }

    /// Writes the price sheet to the given writer.
    ///
    /// # Errors
    ///
    /// Returns a [`PreviewError`] if savings cannot be computed or the
    /// output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), PreviewError> {
        let mut builder = Builder::default();

        builder.push_record([
            "",
            "Product",
            "Price",
            "Offer",
            "Billing",
            "Offer Price",
            "Savings",
        ]);

        let mut boundary_rows: SmallVec<[usize; 16]> = smallvec![];
        let mut color_ops: SmallVec<[(usize, usize, Color); 32]> = smallvec![];
        let mut current_row = 1; // header is row 0
        let mut offer_count = 0;

        for (idx, product) in self.products.values().enumerate() {
            boundary_rows.push(current_row);

            let product_locale = self.locale_override.unwrap_or(product.locale);

            builder.push_record([
                format!("#{:<3}", idx + 1),
                product.name.clone(),
                format_price(&product.price, product_locale),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ]);

            current_row += 1;

            for offer in &product.offers {
                offer_count += 1;

                let price_cell = match self.locale_override {
                    Some(locale) => offer.price_string_with_locale(locale),
                    None => offer.price_string(),
                };

                builder.push_record([
                    String::new(),
                    String::new(),
                    String::new(),
                    offer_heading(offer),
                    billing_cell(offer),
                    price_cell,
                    savings_cell(product, offer)?,
                ]);

                color_ops.push((current_row, 3, color_dark_grey()));
                color_ops.push((current_row, 4, color_dark_grey()));
                color_ops.push((current_row, 5, Color::FG_GREEN));

                current_row += 1;
            }
        }

        write_sheet_table(&mut out, builder, &boundary_rows, color_ops)?;

        writeln!(
            out,
            " {} products · {offer_count} offers\n",
            self.products.len()
        )
        .map_err(|_err| PreviewError::Io)
    }
}

/// Heading cell for an offer row: the offer type plus its store
/// identifier, when one is present.
fn offer_heading(offer: &Offer<'_>) -> String {
    let kind = offer.offer_type().label();

    match offer.identifier() {
        Some(id) if !id.is_empty() => format!("{kind} ({id})"),
        _ => kind.to_string(),
    }
}

/// Billing cell: payment mode label plus the billing schedule.
fn billing_cell(offer: &Offer<'_>) -> String {
    let period = offer.period().label();

    let schedule = if offer.period_count() == 1 {
        period
    } else {
        format!("{} × {period}", offer.period_count())
    };

    let mode = offer.payment_mode_string();

    if mode.is_empty() {
        schedule
    } else {
        format!("{mode}, {schedule}")
    }
}

/// Savings cell relative to the product's regular price.
///
/// Free trials get an empty cell: a trial is not a markdown against the
/// regular price. Unchanged prices also render empty.
fn savings_cell(product: &Product<'_>, offer: &Offer<'_>) -> Result<String, PreviewError> {
    if offer.payment_mode() == PaymentMode::FreeTrial {
        return Ok(String::new());
    }

    let percent = savings_percent(product.price, *offer.price())?;
    let points = percent_points(percent);

    if points == Decimal::ZERO {
        Ok(String::new())
    } else {
        Ok(format!("Save {}%", points.normalize()))
    }
}

fn write_sheet_table(
    out: &mut impl io::Write,
    builder: Builder,
    boundary_rows: &[usize],
    color_ops: SmallVec<[(usize, usize, Color); 32]>,
) -> Result<(), PreviewError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    for &row in boundary_rows {
        if row > 1 {
            theme.insert_horizontal_line(row, separator);
        }
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..3), Alignment::right());
    table.modify(Columns::new(5..7), Alignment::right());

    for (row, col, color) in color_ops {
        table.modify((row, col), color);
    }

    let rendered = colorize_borders(&table.to_string());

    writeln!(out, "\n{rendered}").map_err(|_err| PreviewError::Io)
}

/// ANSI dark grey foreground.
fn color_dark_grey() -> Color {
    Color::new("\x1b[90m", "\x1b[0m")
}

/// Wraps runs of box-drawing characters (U+2500..U+257F) in dark-grey
/// ANSI escapes so the borders recede behind the cell content.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let is_border = ('\u{2500}'..='\u{257F}').contains(&ch);

        if is_border != in_run {
            out.push_str(if is_border { "\x1b[90m" } else { "\x1b[0m" });
            in_run = is_border;
        }

        out.push(ch);
    }

    if in_run {
        out.push_str("\x1b[0m");
    }

    out
}

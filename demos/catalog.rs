//! Renders a localized price sheet for a product catalog fixture set.
//!
//! ```sh
//! cargo run --example catalog -- --fixture demo --locale fr_FR
//! ```

use std::{fs::File, io};

use clap::Parser;

use pricetag::{fixtures::Fixture, locales::PriceLocale, preview::Preview, utils::DemoArgs};

fn main() -> anyhow::Result<()> {
    let args = DemoArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let mut preview = Preview::new(fixture.product_meta_map());

    if let Some(tag) = &args.locale {
        preview = preview.with_locale(PriceLocale::from_tag(tag));
    }

    match &args.out {
        Some(path) => preview.write_to(File::create(path)?)?,
        None => preview.write_to(io::stdout().lock())?,
    }

    Ok(())
}

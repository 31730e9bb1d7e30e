//! Utils

use clap::Parser;

/// Arguments for the catalog demos
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to use for the catalog
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Locale tag to render every price with (e.g. "fr_FR"), overriding
    /// each product's and offer's own locale
    #[clap(short, long)]
    pub locale: Option<String>,

    /// Output file path
    #[clap(short, long)]
    pub out: Option<String>,
}

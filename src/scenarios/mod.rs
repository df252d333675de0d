pub mod product_page;
pub mod selectors;

use crate::core::error::VerifyError;
use crate::core::SuiteContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The product page checks, addressable by name from the CLI and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    SimpleProduct,
    GroupedProduct,
    PlaceholderProduct,
    ProductNotFound,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::SimpleProduct,
        Scenario::GroupedProduct,
        Scenario::PlaceholderProduct,
        Scenario::ProductNotFound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::SimpleProduct => "simple-product",
            Scenario::GroupedProduct => "grouped-product",
            Scenario::PlaceholderProduct => "placeholder-product",
            Scenario::ProductNotFound => "product-not-found",
        }
    }

    pub async fn run(self, ctx: &SuiteContext) -> Result<(), VerifyError> {
        match self {
            Scenario::SimpleProduct => product_page::verify_simple_product(ctx).await,
            Scenario::GroupedProduct => product_page::verify_grouped_product(ctx).await,
            Scenario::PlaceholderProduct => product_page::verify_placeholder_product(ctx).await,
            Scenario::ProductNotFound => product_page::verify_product_not_found(ctx).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use super::selectors::*;
use crate::compare::expect_json_eq;
use crate::core::error::{expect_eq, VerifyError};
use crate::core::SuiteContext;
use crate::page::{data_layer, PageDocument};
use crate::types::PageRequest;
use tracing::debug;

pub const PRODUCT_PAGE: &str = "/content/venia/us/en/products/product-page";

pub const SIMPLE_PRODUCT_FIXTURE: &str = "datalayer/simple-product.json";
pub const GROUPED_PRODUCT_FIXTURE: &str = "datalayer/grouped-product.json";
pub const PLACEHOLDER_PRODUCT_FIXTURE: &str = "datalayer/placeholder-product.json";

pub const NOT_FOUND_HEADING: &str = "Ruh-Roh! Page Not Found";

pub fn simple_product_request() -> PageRequest {
    PageRequest::new(format!("{}.html/honora-wide-leg-pants.html", PRODUCT_PAGE))
}

pub fn grouped_product_request() -> PageRequest {
    PageRequest::new(format!("{}.html/augusta-trio.html", PRODUCT_PAGE))
}

pub fn placeholder_product_request() -> PageRequest {
    PageRequest::new(format!("{}.html", PRODUCT_PAGE))
}

/// `wcmmode=disabled` keeps the authoring overlay out of the error page.
pub fn product_not_found_request() -> PageRequest {
    PageRequest::new(format!("{}.html/unknown-product.html", PRODUCT_PAGE))
        .param("wcmmode", "disabled")
        .expect_status(404)
}

async fn fetch(ctx: &SuiteContext, request: PageRequest) -> Result<String, VerifyError> {
    let response = ctx.fetcher.get(&request).await?;
    debug!("{} -> {} bytes", response.url, response.body.len());
    Ok(response.body)
}

fn expect_data_layer(
    ctx: &SuiteContext,
    doc: &PageDocument,
    fixture: &str,
) -> Result<(), VerifyError> {
    let actual = data_layer(doc, PRODUCT_DETAILS)?;
    let expected = ctx.fixtures.load_json(fixture)?;
    expect_json_eq(fixture, &expected, &actual)
}

pub async fn verify_simple_product(ctx: &SuiteContext) -> Result<(), VerifyError> {
    let body = fetch(ctx, simple_product_request()).await?;
    let doc = PageDocument::parse(&body);

    expect_eq(
        "product name",
        "Honora Wide Leg Pants",
        &doc.single_html(PRODUCT_NAME)?,
    )?;
    doc.expect_count(GROUPED_PRODUCTS, 0)?;

    // Home > Bottoms > Pants & Shorts > Honora Wide Leg Pants
    doc.expect_count(BREADCRUMB_ITEMS, 4)?;
    doc.expect_count(NAVIGATION_ITEMS, 6)?;

    expect_eq("page title", "Honora Wide Leg Pants", &doc.single_html(TITLE)?)?;

    // TODO: check link[rel=canonical] once the expected href for product pages is settled upstream
    expect_data_layer(ctx, &doc, SIMPLE_PRODUCT_FIXTURE)
}

pub async fn verify_grouped_product(ctx: &SuiteContext) -> Result<(), VerifyError> {
    let body = fetch(ctx, grouped_product_request()).await?;
    let doc = PageDocument::parse(&body);

    expect_eq("product name", "Augusta Trio", &doc.single_html(PRODUCT_NAME)?)?;
    doc.expect_count(GROUPED_PRODUCTS, 1)?;

    expect_data_layer(ctx, &doc, GROUPED_PRODUCT_FIXTURE)
}

pub async fn verify_placeholder_product(ctx: &SuiteContext) -> Result<(), VerifyError> {
    let body = fetch(ctx, placeholder_product_request()).await?;
    let doc = PageDocument::parse(&body);

    expect_eq("product name", "Product name", &doc.single_html(PRODUCT_NAME)?)?;

    // Home only
    doc.expect_count(BREADCRUMB_ITEMS, 1)?;

    expect_data_layer(ctx, &doc, PLACEHOLDER_PRODUCT_FIXTURE)
}

pub async fn verify_product_not_found(ctx: &SuiteContext) -> Result<(), VerifyError> {
    let body = fetch(ctx, product_not_found_request()).await?;
    let doc = PageDocument::parse(&body);

    expect_eq("heading", NOT_FOUND_HEADING, &doc.single_text(H1)?)
}

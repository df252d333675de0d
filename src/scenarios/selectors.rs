//! DOM regions of the Venia page templates.

pub const PRODUCT: &str = ".product ";
pub const PRODUCT_DETAILS: &str = ".product > .productFullDetail__root";
pub const PRODUCT_NAME: &str = ".product .productFullDetail__productName > span";
pub const GROUPED_PRODUCTS: &str = ".product .productFullDetail__groupedProducts";

pub const BREADCRUMB_ITEMS: &str = ".breadcrumb .cmp-breadcrumb__item";
/// Root entries of the main navigation only, not nested groups.
pub const NAVIGATION_ITEMS: &str = ".cmp-navigation > .cmp-navigation__group > .cmp-navigation__item";

/// Document title only; inline SVG icons carry their own `<title>`.
pub const TITLE: &str = "head > title";
pub const H1: &str = "h1";

//! Verification suite for the Venia product detail page.
//!
//! Each scenario fetches one rendered page through a [`http::PageFetcher`],
//! parses it into a [`page::PageDocument`] and checks DOM fragments plus the
//! analytics data layer against the fixtures in [`fixtures::FixtureStore`].

pub mod compare;
pub mod core;
pub mod fixtures;
pub mod http;
pub mod page;
pub mod runner;
pub mod scenarios;

pub use core::types;
pub use core::types::*;
pub use core::{SuiteContext, VerifyError};
pub use runner::run_suite;
pub use scenarios::Scenario;

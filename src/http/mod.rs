mod sling;

use crate::core::error::VerifyError;
use crate::types::{PageRequest, PageResponse};
use async_trait::async_trait;

pub use sling::SlingClient;

/// GET capability the scenarios run against.
///
/// Implementations must fail with [`VerifyError::UnexpectedStatus`] when the
/// server answers with anything other than `request.expected_status`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn get(&self, request: &PageRequest) -> Result<PageResponse, VerifyError>;

    /// Root the request paths are resolved against, for reporting.
    fn base_url(&self) -> String;
}

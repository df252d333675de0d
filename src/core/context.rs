use crate::core::config::ItConfig;
use crate::core::error::VerifyError;
use crate::fixtures::FixtureStore;
use crate::http::{PageFetcher, SlingClient};
use std::sync::Arc;

/// Collaborators handed to every scenario.
///
/// Holds no mutable state, so scenarios sharing one context cannot observe
/// each other.
#[derive(Clone)]
pub struct SuiteContext {
    pub fetcher: Arc<dyn PageFetcher>,
    pub fixtures: Arc<FixtureStore>,
}

impl std::fmt::Debug for SuiteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuiteContext")
            .field("base_url", &self.fetcher.base_url())
            .field("fixtures", &self.fixtures.root())
            .finish()
    }
}

impl SuiteContext {
    pub fn new(fetcher: Arc<dyn PageFetcher>, fixtures: FixtureStore) -> Self {
        Self {
            fetcher,
            fixtures: Arc::new(fixtures),
        }
    }

    /// Authenticated [`SlingClient`] plus fixture store, both from `config`.
    pub fn from_config(config: &ItConfig) -> Result<Self, VerifyError> {
        let client = SlingClient::from_config(config)?;
        Ok(Self::new(
            Arc::new(client),
            FixtureStore::new(config.resolve_fixtures_dir()),
        ))
    }
}

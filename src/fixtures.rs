use crate::core::error::VerifyError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only access to the canonical JSON documents the pages are checked against.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a named fixture, e.g. `datalayer/simple-product.json`.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn load_text(&self, name: &str) -> Result<String, VerifyError> {
        let path = self.path_of(name);
        debug!("loading fixture {} from {}", name, path.display());
        std::fs::read_to_string(&path).map_err(|e| VerifyError::FixtureIo {
            name: name.to_string(),
            path,
            source: e,
        })
    }

    pub fn load_json(&self, name: &str) -> Result<Value, VerifyError> {
        let text = self.load_text(name)?;
        serde_json::from_str(&text).map_err(|e| VerifyError::Json {
            origin: format!("fixture {}", name),
            source: e,
        })
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new(crate::core::config::default_fixtures_dir())
    }
}

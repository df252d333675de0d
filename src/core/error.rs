use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make a page verification fail.
///
/// Variants fall into four groups: transport/status, selector, assertion and
/// fixture/parse. Each is local to the scenario that raised it.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("invalid base url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {actual}, expected {expected}\n--- response body ---\n{body}")]
    UnexpectedStatus {
        url: String,
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("selector `{selector}` matched {matched} element(s), no element at index {index}")]
    SelectorMiss {
        selector: String,
        index: usize,
        matched: usize,
    },

    #[error("selector `{selector}` matched {actual} element(s), expected exactly {expected}")]
    Cardinality {
        selector: String,
        expected: usize,
        actual: usize,
    },

    #[error("element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute { selector: String, attribute: String },

    #[error("{what} mismatch: expected {expected:?}, got {actual:?}")]
    Mismatch {
        what: String,
        expected: String,
        actual: String,
    },

    #[error("data layer does not match fixture {fixture}:\n{}", .differences.join("\n"))]
    DataLayerMismatch {
        fixture: String,
        differences: Vec<String>,
    },

    #[error("fixture {name} could not be read from {}: {source}", .path.display())]
    FixtureIo {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not valid JSON: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl VerifyError {
    /// Short category label used in reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifyError::InvalidUrl { .. }
            | VerifyError::Transport { .. }
            | VerifyError::UnexpectedStatus { .. } => "transport",
            VerifyError::InvalidSelector { .. }
            | VerifyError::SelectorMiss { .. }
            | VerifyError::Cardinality { .. }
            | VerifyError::MissingAttribute { .. } => "selector",
            VerifyError::Mismatch { .. } | VerifyError::DataLayerMismatch { .. } => "assertion",
            VerifyError::FixtureIo { .. } | VerifyError::Json { .. } => "fixture",
        }
    }
}

/// Compare an extracted string against its expected literal.
pub fn expect_eq(what: &str, expected: &str, actual: &str) -> Result<(), VerifyError> {
    if expected == actual {
        Ok(())
    } else {
        Err(VerifyError::Mismatch {
            what: what.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

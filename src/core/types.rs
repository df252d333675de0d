use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A GET against the server under test.
///
/// Query parameters keep their insertion order. The expected status defaults
/// to 200; any other status makes the fetch fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
    pub expected_status: u16,
}

impl PageRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            expected_status: 200,
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }
}

/// Response whose status already matched the request's expectation.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScenarioReport {
    pub scenario: String,
    pub passed: bool,
    /// Error category (`transport`, `selector`, `assertion`, `fixture`).
    #[serde(default)]
    pub error_kind: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuiteReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub base_url: String,
    pub scenarios: Vec<ScenarioReport>,
    pub passed: usize,
    pub failed: usize,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn scenario(&self, name: &str) -> Option<&ScenarioReport> {
        self.scenarios.iter().find(|s| s.scenario == name)
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "venia-it run {} against {}", self.run_id, self.base_url)?;
        for s in &self.scenarios {
            let mark = if s.passed { "ok" } else { "FAILED" };
            writeln!(f, "  {:<22} {:<6} {:>6}ms", s.scenario, mark, s.elapsed_ms)?;
            if let Some(err) = &s.error {
                for line in err.lines() {
                    writeln!(f, "      {}", line)?;
                }
            }
        }
        write!(f, "{} passed, {} failed", self.passed, self.failed)
    }
}

use crate::core::SuiteContext;
use crate::scenarios::Scenario;
use crate::types::{ScenarioReport, SuiteReport};
use chrono::Utc;
use futures::future::join_all;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

async fn run_one(ctx: &SuiteContext, scenario: Scenario) -> ScenarioReport {
    let started = Instant::now();
    let outcome = scenario.run(ctx).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(()) => {
            info!("{} passed in {}ms", scenario, elapsed_ms);
            ScenarioReport {
                scenario: scenario.to_string(),
                passed: true,
                error_kind: None,
                error: None,
                elapsed_ms,
            }
        }
        Err(e) => {
            warn!("{} failed ({}): {}", scenario, e.kind(), e);
            ScenarioReport {
                scenario: scenario.to_string(),
                passed: false,
                error_kind: Some(e.kind().to_string()),
                error: Some(e.to_string()),
                elapsed_ms,
            }
        }
    }
}

/// Run the given scenarios concurrently. A failing scenario never stops the others.
pub async fn run_suite(ctx: &SuiteContext, scenarios: &[Scenario]) -> SuiteReport {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    let base_url = ctx.fetcher.base_url();
    info!(
        "run {}: {} scenario(s) against {}",
        run_id,
        scenarios.len(),
        base_url
    );

    let reports = join_all(scenarios.iter().map(|s| run_one(ctx, *s))).await;
    let passed = reports.iter().filter(|r| r.passed).count();

    SuiteReport {
        run_id,
        started_at,
        base_url,
        failed: reports.len() - passed,
        passed,
        scenarios: reports,
    }
}

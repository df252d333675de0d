use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use venia_it::core::config::{load_config, load_config_from};
use venia_it::{run_suite, Scenario, SuiteContext};

/// Check the Venia product page templates on a running AEM instance.
#[derive(Parser, Debug)]
#[command(name = "venia-it", version, about)]
struct Args {
    /// Config file (defaults to the standard venia-it.json search path).
    #[arg(long, env = "VENIA_IT_CONFIG")]
    config: Option<PathBuf>,

    /// Author instance URL, e.g. http://localhost:4502.
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long)]
    user: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Directory holding datalayer/*.json.
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Scenario to run; repeat to select several. Defaults to all.
    #[arg(long = "scenario", value_enum)]
    scenarios: Vec<Scenario>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_from(path).unwrap_or_else(|| {
            warn!("config file {} not found, using defaults", path.display());
            Default::default()
        }),
        None => load_config(),
    };
    if args.base_url.is_some() {
        config.base_url = args.base_url.clone();
    }
    if args.user.is_some() {
        config.username = args.user.clone();
    }
    if args.password.is_some() {
        config.password = args.password.clone();
    }
    if args.fixtures.is_some() {
        config.fixtures_dir = args.fixtures.clone();
    }

    let scenarios = if args.scenarios.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        args.scenarios.clone()
    };

    let ctx = SuiteContext::from_config(&config)?;
    info!("{:?}", ctx);

    let report = run_suite(&ctx, &scenarios).await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

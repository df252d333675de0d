use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ItConfig: file-based config loader (venia-it.json) with env-var fallback
// ---------------------------------------------------------------------------

pub const ENV_CONFIG_PATH: &str = "VENIA_IT_CONFIG";
pub const ENV_BASE_URL: &str = "VENIA_IT_BASE_URL";
pub const ENV_USER: &str = "VENIA_IT_USER";
pub const ENV_PASSWORD: &str = "VENIA_IT_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "VENIA_IT_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "VENIA_IT_CONNECT_TIMEOUT_SECS";
pub const ENV_FIXTURES: &str = "VENIA_IT_FIXTURES";

const DEFAULT_BASE_URL: &str = "http://localhost:4502";

/// Settings for one suite run. Every field is optional in `venia-it.json`.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct ItConfig {
    /// Author instance, e.g. `http://localhost:4502`.
    pub base_url: Option<String>,
    pub username: Option<String>,
    /// Never logged.
    pub password: Option<String>,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    /// Directory holding `datalayer/*.json`.
    pub fixtures_dir: Option<PathBuf>,
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn nonempty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

impl ItConfig {
    /// Base URL: JSON field → `VENIA_IT_BASE_URL` → `http://localhost:4502`.
    pub fn resolve_base_url(&self) -> String {
        nonempty(&self.base_url)
            .or_else(|| env_nonempty(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// User: JSON field → `VENIA_IT_USER` → `admin`.
    pub fn resolve_username(&self) -> String {
        nonempty(&self.username)
            .or_else(|| env_nonempty(ENV_USER))
            .unwrap_or_else(|| "admin".to_string())
    }

    /// Password: JSON field → `VENIA_IT_PASSWORD` → `admin`.
    ///
    /// An explicit empty string in the file is kept as-is (no password).
    pub fn resolve_password(&self) -> String {
        if let Some(p) = &self.password {
            return p.clone();
        }
        std::env::var(ENV_PASSWORD).unwrap_or_else(|_| "admin".to_string())
    }

    /// Request timeout: JSON field → `VENIA_IT_TIMEOUT_SECS` → 30s.
    pub fn resolve_timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .or_else(|| env_nonempty(ENV_TIMEOUT_SECS).and_then(|v| v.trim().parse().ok()))
            .unwrap_or(30);
        Duration::from_secs(secs)
    }

    /// Connect timeout: JSON field → `VENIA_IT_CONNECT_TIMEOUT_SECS` → 10s.
    pub fn resolve_connect_timeout(&self) -> Duration {
        let secs = self
            .connect_timeout_secs
            .or_else(|| {
                env_nonempty(ENV_CONNECT_TIMEOUT_SECS).and_then(|v| v.trim().parse().ok())
            })
            .unwrap_or(10);
        Duration::from_secs(secs)
    }

    /// Fixture root: JSON field → `VENIA_IT_FIXTURES` → `resources/` in this crate.
    pub fn resolve_fixtures_dir(&self) -> PathBuf {
        if let Some(dir) = &self.fixtures_dir {
            return dir.clone();
        }
        env_nonempty(ENV_FIXTURES)
            .map(PathBuf::from)
            .unwrap_or_else(default_fixtures_dir)
    }
}

pub fn default_fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Load `venia-it.json` from standard locations.
///
/// Search order (first found wins):
/// 1. `VENIA_IT_CONFIG` env var path
/// 2. `./venia-it.json`
/// 3. `../venia-it.json`
/// 4. `~/.venia-it/config.json`
///
/// Missing file → `ItConfig::default()` (all env-var fallbacks apply).
/// Parse error → log a warning, return `ItConfig::default()`.
pub fn load_config() -> ItConfig {
    let mut candidates = vec![
        PathBuf::from("venia-it.json"),
        PathBuf::from("../venia-it.json"),
    ];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".venia-it").join("config.json"));
    }
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        candidates.insert(0, PathBuf::from(env_path));
    }

    for path in &candidates {
        if let Some(cfg) = load_config_from(path) {
            return cfg;
        }
    }

    ItConfig::default()
}

/// Read one candidate. `None` when the file does not exist.
pub fn load_config_from(path: &std::path::Path) -> Option<ItConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<ItConfig>(&contents) {
        Ok(cfg) => {
            tracing::info!("venia-it config loaded from {}", path.display());
            Some(cfg)
        }
        Err(e) => {
            tracing::warn!(
                "venia-it config parse error at {}: {}, using defaults",
                path.display(),
                e
            );
            Some(ItConfig::default())
        }
    }
}

use serde::Deserialize;
use std::time::Duration;

const DEFAULTS: &str = include_str!("../IssueTracker.toml");

/// Client configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Origin of the issue REST API, e.g. `http://127.0.0.1:5000`.
    pub api_base_url: String,
    /// Quiescence window before a filter change triggers a refetch.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl ClientConfig {
    /// Loads the embedded defaults, overridden by `ISSUE_TRACKER_*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml))
            .add_source(config::Environment::with_prefix("ISSUE_TRACKER"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Like [`ClientConfig::load`], falling back to the built-in defaults on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load configuration, using defaults: {e}");
            Self::default()
        })
    }

    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    300
}

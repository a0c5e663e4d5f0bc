use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime tunables. Credentials live in [`crate::config::Config`].
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_request_timeout_secs() -> u64 {
    ipapi_rs::types::DEFAULT_TIMEOUT.as_secs()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Reads `config.toml` if present, then `TRACKER_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(File::with_name("config.toml").required(false))
                .add_source(Environment::with_prefix("TRACKER")),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

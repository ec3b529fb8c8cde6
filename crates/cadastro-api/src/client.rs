use std::time::Duration;

use ureq::Agent;

use crate::error::ApiError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the service lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Build an HTTP agent for the service. Non-2xx answers surface as errors.
pub fn build_agent(config: &ApiConfig) -> Result<Agent, ApiError> {
    let base = config.base_url.trim();
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ApiError::Config(format!(
            "base URL must start with http:// or https://, got {base:?}"
        )));
    }

    let agent_config = Agent::config_builder()
        .timeout_global(Some(config.timeout))
        .http_status_as_error(true)
        .build();

    Ok(Agent::new_with_config(agent_config))
}

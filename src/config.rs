use serde::Deserialize;
use std::path::Path;

use crate::error::AdviceError;

/// Environment variable that overrides the configured endpoint URL.
pub const ENDPOINT_ENV: &str = "CAREER_ADVISOR_ENDPOINT";

/// Configuration for the advice requester
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// URL of the advice proxy endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Render the answer's lightweight markup before display
    pub render_markdown: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: 30,
            render_markdown: true,
        }
    }
}

impl AdvisorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_render_markdown(mut self, enabled: bool) -> Self {
        self.render_markdown = enabled;
        self
    }

    /// Load configuration from a YAML file
    pub fn load_file(path: &Path) -> Result<Self, AdviceError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AdviceError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| AdviceError::Config(format!("invalid config {}: {}", path.display(), e)))
    }

    /// Resolve the endpoint URL from config or environment variable
    pub fn resolve_endpoint(&self) -> Result<String, AdviceError> {
        // Environment override first
        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            if !url.is_empty() {
                return Ok(url);
            }
        }

        if !self.endpoint.is_empty() {
            return Ok(self.endpoint.clone());
        }

        Err(AdviceError::Config(format!(
            "no endpoint configured; set `endpoint` in the config file or {}",
            ENDPOINT_ENV
        )))
    }
}

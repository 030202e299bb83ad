use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Connection settings for the task backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Page size requested when fetching the board
    pub page_size: u32,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    const URL_VAR: &'static str = "TASKBOARD_API_URL";
    const PAGE_SIZE_VAR: &'static str = "TASKBOARD_PAGE_SIZE";

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        Ok(Self {
            base_url,
            page_size: Self::DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builds a config from `TASKBOARD_API_URL` and `TASKBOARD_PAGE_SIZE`,
    /// falling back to defaults for unset variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(Self::URL_VAR) {
            Some(url) => Self::new(url)?,
            None => Self::default(),
        };

        if let Some(raw) = lookup(Self::PAGE_SIZE_VAR) {
            config.page_size = raw.trim().parse().map_err(|_| {
                BoardError::ConfigError(format!(
                    "{} must be a positive integer, got '{}'",
                    Self::PAGE_SIZE_VAR,
                    raw
                ))
            })?;
        }

        if config.page_size == 0 {
            return Err(BoardError::ConfigError(format!(
                "{} must be greater than zero",
                Self::PAGE_SIZE_VAR
            )));
        }

        Ok(config)
    }

    /// Joins a path such as `/todos/` onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(BoardError::ConfigError("API base URL is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

use serde::Deserialize;

use crate::services::internships::DEFAULT_LONG_TERM_MIN_MONTHS;
use crate::services::recommender::DEFAULT_TOP_N;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Line-delimited JSON certificate catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Recommendations returned when a request gives no `top_n`
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Upper bound on a requested `top_n`
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,

    /// Shortest internship, in months, classified as long term
    #[serde(default = "default_long_term_min_months")]
    pub long_term_min_months: u32,
}

fn default_catalog_path() -> String {
    "data/certificates.jsonl".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_max_top_n() -> usize {
    50
}

fn default_long_term_min_months() -> u32 {
    DEFAULT_LONG_TERM_MIN_MONTHS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            host: default_host(),
            port: default_port(),
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
            long_term_min_months: default_long_term_min_months(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.default_top_n > config.max_top_n {
            anyhow::bail!(
                "DEFAULT_TOP_N ({}) exceeds MAX_TOP_N ({})",
                config.default_top_n,
                config.max_top_n
            );
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

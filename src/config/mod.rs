pub mod crew_file;

use crate::domain::ports::ExtractorConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";
pub const DEFAULT_WEBSITE: &str = "firecrawl.dev";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "partner-scout")]
#[command(about = "Extract business details from a website with Firecrawl")]
pub struct CliConfig {
    /// Website to extract from; prompts on stdin when omitted
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long, env = "FIRECRAWL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "FIRECRAWL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, default_value = "60")]
    pub timeout_secs: u64,

    #[arg(long, default_value = "2000")]
    pub poll_interval_ms: u64,

    #[arg(long, default_value = "30")]
    pub max_polls: u32,

    /// TOML file overriding the agent persona and extraction prompt
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Resolves the settings the Firecrawl client needs. Fails when no API key is set.
    pub fn firecrawl_config(&self) -> Result<FirecrawlConfig> {
        let api_key = validation::validate_required_field("FIRECRAWL_API_KEY", &self.api_key)?;

        Ok(FirecrawlConfig {
            api_url: self.api_url.trim_end_matches('/').to_string(),
            api_key: api_key.clone(),
            timeout_secs: self.timeout_secs,
            poll_interval_ms: self.poll_interval_ms,
            max_polls: self.max_polls,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;
        if let Some(key) = &self.api_key {
            validation::validate_non_empty_string("FIRECRAWL_API_KEY", key)?;
        }
        if let Some(url) = &self.url {
            validation::validate_non_empty_string("url", url)?;
        }
        validation::validate_range("timeout_secs", self.timeout_secs, 1, 600)?;
        validation::validate_range("poll_interval_ms", self.poll_interval_ms, 0, 60_000)?;
        validation::validate_range("max_polls", self.max_polls, 1, 1_000)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
    pub max_polls: u32,
}

impl FirecrawlConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            timeout_secs: 60,
            poll_interval_ms: 2000,
            max_polls: 30,
        }
    }
}

impl ExtractorConfig for FirecrawlConfig {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
    }

    fn max_polls(&self) -> u32 {
        self.max_polls
    }
}

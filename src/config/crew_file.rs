use crate::utils::error::{Result, ScoutError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ROLE: &str = "Data Extraction Specialist";
pub const DEFAULT_GOAL: &str = "Extract business data from websites using Firecrawl";
pub const DEFAULT_BACKSTORY: &str = "You extract business information from websites efficiently.
You understand how to use web scraping tools and can interpret structured data.";
pub const DEFAULT_PROMPT: &str = "Extract information about the business from the website";

/// Optional overrides for the agent persona and extraction prompt.
///
/// ```toml
/// [agent]
/// role = "Partner Researcher"
///
/// [extraction]
/// prompt = "Extract the venue details"
/// default_website = "${DEFAULT_SITE}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrewFile {
    #[serde(default)]
    pub agent: AgentSection,
    #[serde(default)]
    pub extraction: ExtractionSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentSection {
    pub role: Option<String>,
    pub goal: Option<String>,
    pub backstory: Option<String>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionSection {
    pub prompt: Option<String>,
    pub default_website: Option<String>,
}

/// Persona and prompt with every override applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewSettings {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub verbose: bool,
    pub prompt: String,
    pub default_website: String,
}

impl Default for CrewSettings {
    fn default() -> Self {
        CrewFile::default().settings()
    }
}

impl CrewFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ScoutError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn settings(&self) -> CrewSettings {
        CrewSettings {
            role: pick(&self.agent.role, DEFAULT_ROLE),
            goal: pick(&self.agent.goal, DEFAULT_GOAL),
            backstory: pick(&self.agent.backstory, DEFAULT_BACKSTORY),
            verbose: self.agent.verbose.unwrap_or(true),
            prompt: pick(&self.extraction.prompt, DEFAULT_PROMPT),
            default_website: pick(&self.extraction.default_website, crate::config::DEFAULT_WEBSITE),
        }
    }
}

impl Validate for CrewFile {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("agent.role", &self.agent.role),
            ("agent.goal", &self.agent.goal),
            ("agent.backstory", &self.agent.backstory),
            ("extraction.prompt", &self.extraction.prompt),
            ("extraction.default_website", &self.extraction.default_website),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                validation::validate_non_empty_string(name, value)?;
            }
        }
        Ok(())
    }
}

fn pick(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

// ${VAR} is replaced by the variable's value; unset variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    let re = Regex::new(r"\$\{([^}]+)\}").expect("static regex");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

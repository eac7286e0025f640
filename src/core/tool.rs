use crate::config::crew_file::DEFAULT_PROMPT;
use crate::domain::model::BusinessRecord;
use crate::domain::ports::{ExtractParams, Extractor, Tool};
use crate::utils::error::Result;
use crate::utils::validation::normalize_website;
use async_trait::async_trait;

pub const TOOL_NAME: &str = "firecrawl_extraction";
pub const TOOL_DESCRIPTION: &str = "Extract business information from websites using Firecrawl";

/// Sits between the error text and the placeholder record in a fallback output.
pub const FALLBACK_SEPARATOR: &str = ". Using mock data: ";

/// Extraction tool backed by a hosted extractor.
///
/// Never fails: when the extractor errors, the output is the error text followed
/// by a placeholder record built from the website string.
pub struct FirecrawlTool<E: Extractor> {
    extractor: E,
    prompt: String,
}

impl<E: Extractor> FirecrawlTool<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub async fn extract_business(&self, website: &str) -> Result<serde_json::Value> {
        let params = ExtractParams {
            prompt: self.prompt.clone(),
            schema: BusinessRecord::json_schema(),
        };

        self.extractor
            .extract(&[normalize_website(website)], &params)
            .await
    }
}

pub fn fallback_output(website: &str, error: &dyn std::fmt::Display) -> String {
    let record = BusinessRecord::fallback(website);
    let mock_data = serde_json::to_value(&record)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| format!("{:?}", record));

    format!("Error: {}{}{}", error, FALLBACK_SEPARATOR, mock_data)
}

#[async_trait]
impl<E: Extractor> Tool for FirecrawlTool<E> {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        TOOL_DESCRIPTION
    }

    async fn run(&self, website: &str) -> String {
        match self.extract_business(website).await {
            Ok(payload) => payload.to_string(),
            Err(e) => {
                tracing::warn!("Error during extraction: {}", e);
                fallback_output(website, &e)
            }
        }
    }
}

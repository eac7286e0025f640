use crate::utils::error::Result;
use async_trait::async_trait;

/// Prompt and schema sent with every extraction request.
#[derive(Debug, Clone)]
pub struct ExtractParams {
    pub prompt: String,
    pub schema: serde_json::Value,
}

pub trait ExtractorConfig: Send + Sync {
    fn api_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout_secs(&self) -> u64;
    fn poll_interval_ms(&self) -> u64;
    fn max_polls(&self) -> u32;
}

/// A hosted service that turns web pages into structured data.
pub trait Extractor: Send + Sync {
    fn extract(
        &self,
        urls: &[String],
        params: &ExtractParams,
    ) -> impl std::future::Future<Output = Result<serde_json::Value>> + Send;
}

/// Something an agent can call with a single string input.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn run(&self, input: &str) -> String;
}

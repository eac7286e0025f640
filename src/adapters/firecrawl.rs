use crate::domain::ports::{ExtractParams, Extractor, ExtractorConfig};
use crate::utils::error::{Result, ScoutError};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    urls: &'a [String],
    prompt: &'a str,
    schema: &'a Value,
}

#[derive(Debug, PartialEq, Eq)]
enum JobState {
    Completed,
    Pending { job_id: Option<String> },
}

/// Client for the Firecrawl `/v1/extract` endpoint.
///
/// Extract requests may run as background jobs; the client waits on the job
/// status endpoint until the job settles or `max_polls` checks have been made.
pub struct FirecrawlClient<C: ExtractorConfig> {
    config: C,
    client: Client,
}

impl<C: ExtractorConfig> FirecrawlClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url().trim_end_matches('/'), path)
    }

    async fn read_json(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        tracing::debug!("Firecrawl response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    async fn start(&self, urls: &[String], params: &ExtractParams) -> Result<Value> {
        let endpoint = self.endpoint("/v1/extract");
        tracing::debug!("Submitting extract request for {:?} to {}", urls, endpoint);

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(self.config.api_key())
            .json(&ExtractRequest {
                urls,
                prompt: &params.prompt,
                schema: &params.schema,
            })
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn status(&self, job_id: &str) -> Result<Value> {
        let endpoint = self.endpoint(&format!("/v1/extract/{}", job_id));

        let response = self
            .client
            .get(&endpoint)
            .bearer_auth(self.config.api_key())
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn wait_for_job(&self, job_id: &str) -> Result<Value> {
        let interval = Duration::from_millis(self.config.poll_interval_ms());
        let max_polls = self.config.max_polls();

        for attempt in 1..=max_polls {
            tokio::time::sleep(interval).await;

            let body = self.status(job_id).await?;
            match job_state(&body)? {
                JobState::Completed => {
                    tracing::debug!("Extract job {} completed after {} checks", job_id, attempt);
                    return Ok(body);
                }
                JobState::Pending { .. } => {
                    let status = job_status_label(&body);
                    tracing::debug!(
                        "Extract job {} still {} ({}/{})",
                        job_id,
                        status,
                        attempt,
                        max_polls
                    );
                }
            }
        }

        Err(ScoutError::ExtractionTimeout {
            job_id: job_id.to_string(),
            attempts: max_polls,
        })
    }
}

impl<C: ExtractorConfig> Extractor for FirecrawlClient<C> {
    async fn extract(&self, urls: &[String], params: &ExtractParams) -> Result<Value> {
        let body = self.start(urls, params).await?;

        match job_state(&body)? {
            JobState::Completed => Ok(body),
            JobState::Pending {
                job_id: Some(job_id),
            } => {
                tracing::info!("Extract job {} accepted, waiting for results", job_id);
                self.wait_for_job(&job_id).await
            }
            JobState::Pending { job_id: None } => Err(ScoutError::ExtractionError {
                message: "response carried neither data nor a job id".to_string(),
            }),
        }
    }
}

fn job_status_label(body: &Value) -> &str {
    body.get("status")
        .and_then(Value::as_str)
        .unwrap_or("pending")
}

fn job_state(body: &Value) -> Result<JobState> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("extraction was not successful")
            .to_string();
        return Err(ScoutError::ExtractionError { message });
    }

    match body.get("status").and_then(Value::as_str) {
        Some("completed") => Ok(JobState::Completed),
        Some(status @ ("failed" | "cancelled")) => Err(ScoutError::ExtractionError {
            message: body
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("extract job {}", status)),
        }),
        None if body.get("data").is_some_and(|d| !d.is_null()) => Ok(JobState::Completed),
        _ => Ok(JobState::Pending {
            job_id: body.get("id").and_then(Value::as_str).map(str::to_string),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_state_completed_with_data() {
        let body = json!({"success": true, "data": {"name": "Acme"}});
        assert_eq!(job_state(&body).unwrap(), JobState::Completed);

        let body = json!({"success": true, "status": "completed", "data": {"name": "Acme"}});
        assert_eq!(job_state(&body).unwrap(), JobState::Completed);
    }

    #[test]
    fn test_job_state_pending_carries_id() {
        let body = json!({"success": true, "id": "job-1"});
        assert_eq!(
            job_state(&body).unwrap(),
            JobState::Pending {
                job_id: Some("job-1".to_string())
            }
        );

        let body = json!({"success": true, "status": "processing", "data": null});
        assert_eq!(job_state(&body).unwrap(), JobState::Pending { job_id: None });
    }

    #[test]
    fn test_job_status_label() {
        assert_eq!(job_status_label(&json!({"status": "processing"})), "processing");
        assert_eq!(job_status_label(&json!({"success": true, "id": "job-1"})), "pending");
    }

    #[test]
    fn test_job_state_failure_reports_message() {
        let body = json!({"success": false, "error": "Insufficient credits"});
        let err = job_state(&body).unwrap_err();
        assert_eq!(err.to_string(), "Extraction failed: Insufficient credits");

        let body = json!({"success": true, "status": "cancelled"});
        let err = job_state(&body).unwrap_err();
        assert_eq!(err.to_string(), "Extraction failed: extract job cancelled");
    }
}

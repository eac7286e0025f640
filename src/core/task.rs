use crate::core::agent::Agent;
use crate::core::tool::TOOL_NAME;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A unit of work: which tool the agent should call, and with what input.
#[derive(Debug, Clone)]
pub struct Task {
    pub description: String,
    pub expected_output: String,
    pub tool_name: String,
    pub input: String,
    pub agent: Arc<Agent>,
}

impl Task {
    /// First line of the description.
    pub fn summary(&self) -> &str {
        self.description.lines().next().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone)]
pub struct TaskOutput {
    pub description: String,
    pub expected_output: String,
    pub agent_role: String,
    pub tool_name: String,
    pub input: String,
    pub raw: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub fn create_extraction_task(website: &str, agent: Arc<Agent>) -> Task {
    let description = format!(
        "Extract business information from {website} using Firecrawl.

Use the {TOOL_NAME} tool to extract business information.

The extraction should focus on:
- Business name
- Opening hours
- Phone number
- Email address
- Wi-Fi availability

Present the extracted data in a clear, structured format."
    );

    Task {
        description,
        expected_output: "A structured presentation of the extracted business data \
with explanations of the key information found for the website."
            .to_string(),
        tool_name: TOOL_NAME.to_string(),
        input: website.to_string(),
        agent,
    }
}

use crate::config::crew_file::CrewSettings;
use crate::core::task::{Task, TaskOutput};
use crate::domain::ports::Tool;
use crate::utils::error::{Result, ScoutError};
use chrono::Utc;
use std::sync::Arc;

/// A persona with a set of tools it may call while working on tasks.
pub struct Agent {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub verbose: bool,
    tools: Vec<Arc<dyn Tool>>,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("role", &self.role)
            .field("goal", &self.goal)
            .field("verbose", &self.verbose)
            .field("tools", &self.tool_names())
            .finish()
    }
}

impl Agent {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            verbose: false,
            tools: Vec::new(),
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// The extraction specialist persona, armed with the given tool.
    pub fn data_extraction(settings: &CrewSettings, tool: Arc<dyn Tool>) -> Self {
        Self::new(&settings.role, &settings.goal, &settings.backstory)
            .verbose(settings.verbose)
            .with_tool(tool)
    }

    pub fn tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub async fn execute(&self, task: &Task) -> Result<TaskOutput> {
        let tool = self
            .tool(&task.tool_name)
            .ok_or_else(|| ScoutError::ToolNotFound {
                agent: self.role.clone(),
                tool: task.tool_name.clone(),
            })?;

        let started_at = Utc::now();
        if self.verbose {
            tracing::info!(agent = %self.role, "Working on task: {}", task.summary());
            tracing::info!(agent = %self.role, "Using tool {} with input {:?}", tool.name(), task.input);
        }

        let raw = tool.run(&task.input).await;

        if self.verbose {
            tracing::info!(agent = %self.role, "Tool {} returned {} bytes", tool.name(), raw.len());
        }
        tracing::debug!("Tool output: {}", raw);

        Ok(TaskOutput {
            description: task.description.clone(),
            expected_output: task.expected_output.clone(),
            agent_role: self.role.clone(),
            tool_name: tool.name().to_string(),
            input: task.input.clone(),
            raw,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

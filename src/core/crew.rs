use crate::config::crew_file::CrewSettings;
use crate::core::agent::Agent;
use crate::core::task::{create_extraction_task, Task, TaskOutput};
use crate::domain::ports::Tool;
use crate::utils::error::{Result, ScoutError};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Process {
    /// Tasks run one after another in declaration order.
    #[default]
    Sequential,
}

#[derive(Debug, Clone)]
pub struct CrewOutput {
    /// Raw output of the last task.
    pub raw: String,
    pub tasks_output: Vec<TaskOutput>,
}

impl std::fmt::Display for CrewOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[derive(Debug)]
pub struct Crew {
    agents: Vec<Arc<Agent>>,
    tasks: Vec<Task>,
    process: Process,
    verbose: bool,
}

impl Crew {
    pub fn builder() -> CrewBuilder {
        CrewBuilder::default()
    }

    pub async fn kickoff(&self) -> Result<CrewOutput> {
        if self.verbose {
            tracing::info!(
                "Crew kickoff: {} agent(s), {} task(s), {:?} process",
                self.agents.len(),
                self.tasks.len(),
                self.process
            );
        }

        let mut tasks_output = Vec::with_capacity(self.tasks.len());
        match self.process {
            Process::Sequential => {
                for (index, task) in self.tasks.iter().enumerate() {
                    tracing::debug!("Running task {}/{}: {}", index + 1, self.tasks.len(), task.summary());
                    tasks_output.push(task.agent.execute(task).await?);
                }
            }
        }

        let raw = tasks_output
            .last()
            .map(|output| output.raw.clone())
            .unwrap_or_default();

        Ok(CrewOutput { raw, tasks_output })
    }
}

#[derive(Default)]
pub struct CrewBuilder {
    agents: Vec<Arc<Agent>>,
    tasks: Vec<Task>,
    process: Process,
    verbose: bool,
}

impl CrewBuilder {
    pub fn agent(mut self, agent: Arc<Agent>) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn process(mut self, process: Process) -> Self {
        self.process = process;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Every task must be assigned to one of the crew's agents.
    pub fn build(self) -> Result<Crew> {
        if self.tasks.is_empty() {
            return Err(ScoutError::ConfigError {
                message: "a crew needs at least one task".to_string(),
            });
        }

        for task in &self.tasks {
            if !self.agents.iter().any(|agent| Arc::ptr_eq(agent, &task.agent)) {
                return Err(ScoutError::ConfigError {
                    message: format!(
                        "task '{}' is assigned to agent '{}' which is not part of the crew",
                        task.summary(),
                        task.agent.role
                    ),
                });
            }
        }

        Ok(Crew {
            agents: self.agents,
            tasks: self.tasks,
            process: self.process,
            verbose: self.verbose,
        })
    }
}

/// Runs the single-agent extraction crew against one website.
pub async fn run_business_intelligence(
    website: &str,
    tool: Arc<dyn Tool>,
    settings: &CrewSettings,
) -> Result<CrewOutput> {
    let agent = Arc::new(Agent::data_extraction(settings, tool));
    let task = create_extraction_task(website, agent.clone());

    let crew = Crew::builder()
        .agent(agent)
        .task(task)
        .process(Process::Sequential)
        .verbose(settings.verbose)
        .build()?;

    tracing::info!("🚀 Starting Business Intelligence Crew for {}", website);
    let output = crew.kickoff().await?;
    tracing::info!("✅ Business Intelligence Complete for {}", website);

    Ok(output)
}

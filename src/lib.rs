pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::FirecrawlClient;
pub use config::{crew_file::CrewFile, CliConfig, FirecrawlConfig};
pub use core::{
    crew::{run_business_intelligence, Crew, CrewOutput, Process},
    tool::FirecrawlTool,
};
pub use domain::model::BusinessRecord;
pub use utils::error::{Result, ScoutError};

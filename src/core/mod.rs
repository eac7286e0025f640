pub mod agent;
pub mod crew;
pub mod report;
pub mod task;
pub mod tool;

pub use crate::domain::model::BusinessRecord;
pub use crate::domain::ports::{ExtractParams, Extractor, ExtractorConfig, Tool};
pub use crate::utils::error::Result;

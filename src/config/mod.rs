//! Config layer: JSON schemas + validated in-memory structures.
//!
//! Kept separate from option parsing. It owns:
//! - the job file (jobs and their parameters)
//! - parameter definitions and value creation from submissions

pub mod definition;
pub mod jobs;

pub use definition::{DISPLAY_NAME, DefinitionSpec, FormValues, ParameterDefinition};
pub use jobs::{JobSpec, JobsSpec, load_jobs_file};

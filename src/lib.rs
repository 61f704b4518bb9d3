//! Dynamic build parameters: a first option list, a second list filtered by
//! the first choice, and the paired value a build receives.

pub mod catalog;
pub mod config;
pub mod error;
pub mod registry;
pub mod value;

pub use catalog::OptionCatalog;
pub use config::{DefinitionSpec, FormValues, ParameterDefinition, load_jobs_file};
pub use error::{ParameterError, ParameterResult};
pub use registry::{
    JobRegistry, ParameterLookup, ParameterSet, list_dependent_options, list_independent_options,
    locate,
};
pub use value::{EnvVars, PairedParameterValue, ValueSubmission};

pub type Result<T> = anyhow::Result<T>;

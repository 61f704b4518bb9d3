//! Job file (jobs.json): the jobs and their dynamic parameters.
//!
//! JSON shape:
//! {
//!   "jobs": [
//!     {
//!       "name": "deploy",
//!       "parameters": [
//!         {
//!           "name": "ENV1",
//!           "description": "...",            // optional
//!           "valueOptions": "red\nblue",      // optional, one option per line
//!           "dynamicValueOptions": "r:Ruby",  // optional, prefix:display per line
//!           "secondName": "ENV2"
//!         }
//!       ]
//!     }
//!   ]
//! }

use crate::config::DefinitionSpec;
use crate::registry::JobRegistry;
use anyhow::Context;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct JobsSpec {
    #[serde(default)]
    pub jobs: Vec<JobSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobSpec {
    pub name: String,

    #[serde(default)]
    pub parameters: Vec<DefinitionSpec>,
}

impl JobsSpec {
    pub fn validate_and_build(&self) -> anyhow::Result<JobRegistry> {
        Ok(JobRegistry::from_jobs(&self.jobs)?)
    }
}

/// Read, parse and validate a job file.
pub fn load_jobs_file(path: &str) -> anyhow::Result<JobRegistry> {
    let text = fs::read_to_string(path).with_context(|| format!("read job file {}", path))?;
    let spec: JobsSpec =
        serde_json::from_str(&text).with_context(|| format!("parse job file {}", path))?;
    spec.validate_and_build()
        .with_context(|| format!("invalid job file {}", path))
}

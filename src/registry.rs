//! Typed registry of dynamic parameter definitions, per job.
//!
//! Hosts locate "the parameter the form is asking about" through the
//! [`ParameterLookup`] trait. [`JobRegistry`] is the in-memory implementation
//! built from the job file; hosts with their own job store implement the trait
//! instead and pass it to the query functions.

use crate::config::{JobSpec, ParameterDefinition};
use crate::error::{ParameterError, ParameterResult};
use std::collections::BTreeMap;

/// Finds a dynamic parameter definition by job and parameter name.
pub trait ParameterLookup {
    fn find_parameter(&self, job: &str, parameter: &str) -> Option<&ParameterDefinition>;
}

/// Dynamic parameters of one job, looked up case-insensitively by name.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    definitions: Vec<ParameterDefinition>,
    by_key: BTreeMap<String, usize>,
}

impl ParameterSet {
    /// Add a definition. Names differing only in case collide.
    pub fn insert(&mut self, job: &str, definition: ParameterDefinition) -> ParameterResult<()> {
        let key = definition.name().to_lowercase();
        if self.by_key.contains_key(&key) {
            return Err(ParameterError::DuplicateParameter {
                job: job.to_string(),
                parameter: definition.name().to_string(),
            });
        }
        self.by_key.insert(key, self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    pub fn get(&self, parameter: &str) -> Option<&ParameterDefinition> {
        self.by_key
            .get(&parameter.to_lowercase())
            .map(|&idx| &self.definitions[idx])
    }

    /// Definitions in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobRegistry {
    jobs: BTreeMap<String, ParameterSet>,
}

impl JobRegistry {
    /// Validate every job and parameter, building catalogs as we go.
    pub fn from_jobs(jobs: &[JobSpec]) -> ParameterResult<Self> {
        let mut out = Self::default();
        for job in jobs {
            if out.jobs.contains_key(&job.name) {
                return Err(ParameterError::InvalidDefinition(format!(
                    "duplicate job name: {}",
                    job.name
                )));
            }
            let mut set = ParameterSet::default();
            for spec in &job.parameters {
                set.insert(&job.name, spec.validate_and_build()?)?;
            }
            out.jobs.insert(job.name.clone(), set);
        }
        Ok(out)
    }

    /// Register (or replace) the parameters of one job.
    pub fn register(&mut self, job: impl Into<String>, parameters: ParameterSet) {
        self.jobs.insert(job.into(), parameters);
    }

    /// Drop a job; its catalogs go with it.
    pub fn remove(&mut self, job: &str) -> Option<ParameterSet> {
        self.jobs.remove(job)
    }

    pub fn job(&self, job: &str) -> Option<&ParameterSet> {
        self.jobs.get(job)
    }

    pub fn jobs(&self) -> impl Iterator<Item = (&str, &ParameterSet)> {
        self.jobs.iter().map(|(name, set)| (name.as_str(), set))
    }
}

impl ParameterLookup for JobRegistry {
    fn find_parameter(&self, job: &str, parameter: &str) -> Option<&ParameterDefinition> {
        self.jobs.get(job)?.get(parameter)
    }
}

/// Find a definition, reporting a miss as `LookupMiss`.
pub fn locate<'a, L>(
    lookup: &'a L,
    job: &str,
    parameter: &str,
) -> ParameterResult<&'a ParameterDefinition>
where
    L: ParameterLookup + ?Sized,
{
    lookup.find_parameter(job, parameter).ok_or_else(|| {
        tracing::warn!(job, parameter, "could not find parameter definition");
        ParameterError::LookupMiss {
            job: job.to_string(),
            parameter: parameter.to_string(),
        }
    })
}

/// Options for the first list of `parameter` in `job`.
pub fn list_independent_options<L>(
    lookup: &L,
    job: &str,
    parameter: &str,
) -> ParameterResult<Vec<String>>
where
    L: ParameterLookup + ?Sized,
{
    tracing::debug!(job, parameter, "listing independent options");
    let definition = locate(lookup, job, parameter)?;
    Ok(definition.catalog().independent_options().to_vec())
}

/// Options for the second list of `parameter` in `job`, given the first choice.
pub fn list_dependent_options<L>(
    lookup: &L,
    job: &str,
    parameter: &str,
    chosen: &str,
) -> ParameterResult<Vec<String>>
where
    L: ParameterLookup + ?Sized,
{
    tracing::debug!(job, parameter, chosen, "listing dependent options");
    let definition = locate(lookup, job, parameter)?;
    Ok(definition
        .catalog()
        .dependent_options(chosen)
        .into_iter()
        .map(str::to_string)
        .collect())
}

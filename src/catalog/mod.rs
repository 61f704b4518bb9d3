//! Option catalog for one dynamic parameter definition.
//!
//! The catalog owns both configured option lists:
//! - independent options: one plain value per line
//! - dependent options: `prefix:display` per line
//!
//! Both lists are parsed once at construction. The catalog is read-only after
//! that, so queries can run from any number of threads without locking.

pub mod entry;
pub mod parse;

pub use entry::{DependentEntry, ParsedDependent};

use crate::error::{ParameterError, ParameterResult};

#[derive(Debug, Clone)]
pub struct OptionCatalog {
    independent_name: String,
    dependent_name: String,
    independent: Vec<String>,
    dependent: Vec<DependentEntry>,
    malformed: Vec<ParameterError>,
}

impl OptionCatalog {
    /// Build a catalog from the raw multi-line option texts.
    ///
    /// Malformed dependent lines are skipped and kept in [`malformed_lines`];
    /// they never fail construction.
    ///
    /// [`malformed_lines`]: OptionCatalog::malformed_lines
    pub fn new(
        independent_name: impl Into<String>,
        dependent_name: impl Into<String>,
        independent_raw: &str,
        dependent_raw: &str,
    ) -> ParameterResult<Self> {
        let independent_name = independent_name.into();
        let dependent_name = dependent_name.into();

        let ParsedDependent { entries, malformed } = parse::parse_dependent(dependent_raw)?;
        for err in &malformed {
            tracing::warn!(
                parameter = %independent_name,
                dependent = %dependent_name,
                "skipping {}",
                err
            );
        }

        Ok(Self {
            independent: parse::parse_independent(independent_raw)?,
            dependent: entries,
            malformed,
            independent_name,
            dependent_name,
        })
    }

    pub fn independent_name(&self) -> &str {
        &self.independent_name
    }

    pub fn dependent_name(&self) -> &str {
        &self.dependent_name
    }

    /// Values for the first selection, in display order.
    pub fn independent_options(&self) -> &[String] {
        &self.independent
    }

    /// Display values for the second selection, given the first one.
    ///
    /// A line matches when it starts with `selected`; the key is not compared
    /// on its own, so `"r"` matches both `r:Ruby` and `re:Red Hat`, and the
    /// empty selection matches every line.
    pub fn dependent_options(&self, selected: &str) -> Vec<&str> {
        self.dependent
            .iter()
            .filter(|entry| entry.line.starts_with(selected))
            .map(|entry| entry.display.as_str())
            .collect()
    }

    /// Dependent lines skipped at construction, as `Configuration` errors.
    pub fn malformed_lines(&self) -> &[ParameterError] {
        &self.malformed
    }
}

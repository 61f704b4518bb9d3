//! Dynamic parameter definitions.
//!
//! Two representations, as with the job file:
//! - DefinitionSpec: raw JSON input (serde-friendly)
//! - ParameterDefinition: validated, with its option catalog built

use crate::catalog::OptionCatalog;
use crate::error::{ParameterError, ParameterResult};
use crate::value::{PairedParameterValue, ValueSubmission};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Name shown by hosts when offering this parameter type.
pub const DISPLAY_NAME: &str = "Dynamic Parameter";

/// Submitted form fields; a field may carry several values.
pub type FormValues = BTreeMap<String, Vec<String>>;

/// Raw parameter shape as it appears in a job's `parameters` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionSpec {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Independent options, one per line.
    #[serde(default)]
    pub value_options: Option<String>,

    /// Dependent options, `prefix:display` per line.
    #[serde(default)]
    pub dynamic_value_options: Option<String>,

    pub second_name: String,
}

#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    description: String,
    catalog: OptionCatalog,
}

impl DefinitionSpec {
    /// Check the variable names and build the option catalog.
    pub fn validate_and_build(&self) -> ParameterResult<ParameterDefinition> {
        if self.name.trim().is_empty() {
            return Err(ParameterError::InvalidDefinition(
                "parameter name must not be empty".to_string(),
            ));
        }
        if self.second_name.trim().is_empty() {
            return Err(ParameterError::InvalidDefinition(format!(
                "parameter {} has an empty secondName",
                self.name
            )));
        }

        ParameterDefinition::new(
            &self.name,
            self.description.as_deref().unwrap_or_default(),
            self.value_options.as_deref().unwrap_or_default(),
            self.dynamic_value_options.as_deref().unwrap_or_default(),
            &self.second_name,
        )
    }
}

impl ParameterDefinition {
    pub fn new(
        name: &str,
        description: &str,
        value_options: &str,
        dynamic_value_options: &str,
        second_name: &str,
    ) -> ParameterResult<Self> {
        Ok(Self {
            description: description.to_string(),
            catalog: OptionCatalog::new(name, second_name, value_options, dynamic_value_options)?,
        })
    }

    pub fn name(&self) -> &str {
        self.catalog.independent_name()
    }

    pub fn second_name(&self) -> &str {
        self.catalog.dependent_name()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Pair two chosen values under this definition's variable names.
    pub fn create_value(&self, value: &str, dependent_value: &str) -> PairedParameterValue {
        let out =
            PairedParameterValue::new(self.name(), value, self.second_name(), dependent_value);
        if self.description.is_empty() {
            out
        } else {
            out.with_description(self.description.as_str())
        }
    }

    /// Build the value from submitted form fields. The first value of the
    /// `name` field and of the `secondName` field are used.
    pub fn create_value_from_form(
        &self,
        form: &FormValues,
    ) -> ParameterResult<PairedParameterValue> {
        let value = first_value(form, self.name())?;
        let dependent_value = first_value(form, self.second_name())?;

        tracing::debug!(
            "{}: {}, {}: {}",
            self.name(),
            value,
            self.second_name(),
            dependent_value
        );

        Ok(self.create_value(value, dependent_value))
    }

    /// Bind a submitted JSON object. All four fields come from the JSON itself.
    pub fn create_value_from_json(
        &self,
        json: serde_json::Value,
    ) -> ParameterResult<PairedParameterValue> {
        if !json.is_object() {
            return Err(ParameterError::InvalidSubmission(format!(
                "expected a JSON object, got {}",
                json
            )));
        }
        let sub: ValueSubmission = serde_json::from_value(json)
            .map_err(|e| ParameterError::InvalidSubmission(e.to_string()))?;
        let out = PairedParameterValue::try_from(sub)?;

        tracing::debug!(parameter = %self.name(), "bound {}", out);
        Ok(out)
    }
}

fn first_value<'a>(form: &'a FormValues, field: &str) -> ParameterResult<&'a str> {
    form.get(field)
        .and_then(|values| values.first())
        .map(String::as_str)
        .ok_or_else(|| {
            tracing::warn!(field, "form submission is missing a field");
            ParameterError::InvalidArgument(field.to_string())
        })
}

//! The value a dynamic parameter contributes to a build.

use crate::error::{ParameterError, ParameterResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A build's environment-variable table.
pub type EnvVars = BTreeMap<String, String>;

/// Both selections of a dynamic parameter, with the variable names they bind.
///
/// Equality, hashing and `Display` cover the four name/value fields only; the
/// optional description is informational.
#[derive(Debug, Clone)]
pub struct PairedParameterValue {
    name: String,
    value: String,
    dependent_name: String,
    dependent_value: String,
    description: Option<String>,
}

impl PairedParameterValue {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        dependent_name: impl Into<String>,
        dependent_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            dependent_name: dependent_name.into(),
            dependent_value: dependent_value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn dependent_name(&self) -> &str {
        &self.dependent_name
    }

    pub fn dependent_value(&self) -> &str {
        &self.dependent_value
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Bind both variables in `env`, replacing earlier bindings of the same keys.
    pub fn export_environment(&self, env: &mut EnvVars) {
        env.insert(self.name.clone(), self.value.clone());
        env.insert(self.dependent_name.clone(), self.dependent_value.clone());
    }

    /// Look up either variable by name.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        if query == self.name {
            Some(&self.value)
        } else if query == self.dependent_name {
            Some(&self.dependent_value)
        } else {
            None
        }
    }
}

impl PartialEq for PairedParameterValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.value == other.value
            && self.dependent_name == other.dependent_name
            && self.dependent_value == other.dependent_value
    }
}

impl Eq for PairedParameterValue {}

impl Hash for PairedParameterValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash(state);
        self.dependent_name.hash(state);
        self.dependent_value.hash(state);
    }
}

impl fmt::Display for PairedParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(PairedParameterValue) {}='{}', {}='{}'",
            self.name, self.value, self.dependent_name, self.dependent_value
        )
    }
}

/// A submitted value as bound from form JSON. Every field may be missing;
/// conversion into [`PairedParameterValue`] rejects absent ones.
///
/// JSON shape:
/// { "name": "ENV1", "value": "red", "secondName": "ENV2", "dynamicValue": "Ruby" }
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSubmission {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub second_name: Option<String>,

    #[serde(default)]
    pub dynamic_value: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<ValueSubmission> for PairedParameterValue {
    type Error = ParameterError;

    fn try_from(sub: ValueSubmission) -> ParameterResult<Self> {
        let name = sub.name.ok_or_else(|| ParameterError::InvalidArgument("name".to_string()))?;
        let value = sub.value.ok_or_else(|| ParameterError::InvalidArgument("value".to_string()))?;
        let dependent_name = sub
            .second_name
            .ok_or_else(|| ParameterError::InvalidArgument("secondName".to_string()))?;
        let dependent_value = sub
            .dynamic_value
            .ok_or_else(|| ParameterError::InvalidArgument("dynamicValue".to_string()))?;

        let mut out = Self::new(name, value, dependent_name, dependent_value);
        out.description = sub.description;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;

    fn sample() -> PairedParameterValue {
        PairedParameterValue::new("ENV1", "foo", "ENV2", "bar")
    }

    fn hash_of(v: &PairedParameterValue) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn display_is_deterministic() {
        let text = sample().to_string();
        assert_eq!(text, "(PairedParameterValue) ENV1='foo', ENV2='bar'");
        assert!(text.contains("ENV1='foo'"));
        assert!(text.contains("ENV2='bar'"));
    }

    #[test]
    fn resolve_finds_both_names_only() {
        let v = sample();
        assert_eq!(v.resolve("ENV1"), Some("foo"));
        assert_eq!(v.resolve("ENV2"), Some("bar"));
        assert_eq!(v.resolve("env1"), None);
        assert_eq!(v.resolve("OTHER"), None);
    }

    #[test]
    fn first_name_wins_when_names_collide() {
        let v = PairedParameterValue::new("X", "first", "X", "second");
        assert_eq!(v.resolve("X"), Some("first"));
    }

    #[test]
    fn export_overwrites_and_is_idempotent() {
        let mut env = EnvVars::new();
        env.insert("ENV1".to_string(), "old".to_string());
        env.insert("PATH".to_string(), "/bin".to_string());

        let v = sample();
        v.export_environment(&mut env);
        let once = env.clone();
        v.export_environment(&mut env);

        assert_eq!(env, once);
        assert_eq!(env.get("ENV1").map(String::as_str), Some("foo"));
        assert_eq!(env.get("ENV2").map(String::as_str), Some("bar"));
        assert_eq!(env.get("PATH").map(String::as_str), Some("/bin"));
    }

    #[test]
    fn equality_covers_every_field() {
        let base = sample();
        assert_eq!(base, sample());
        assert_eq!(hash_of(&base), hash_of(&sample()));

        for other in [
            PairedParameterValue::new("ENVX", "foo", "ENV2", "bar"),
            PairedParameterValue::new("ENV1", "FOO", "ENV2", "bar"),
            PairedParameterValue::new("ENV1", "foo", "ENVX", "bar"),
            PairedParameterValue::new("ENV1", "foo", "ENV2", "baz"),
            PairedParameterValue::new("ENV2", "bar", "ENV1", "foo"),
        ] {
            assert_ne!(base, other);
        }
    }

    #[test]
    fn description_is_not_part_of_identity() {
        let described = sample().with_description("picked at build time");
        assert_eq!(described.description(), Some("picked at build time"));
        assert_eq!(described, sample());
        assert_eq!(hash_of(&described), hash_of(&sample()));
    }

    #[test]
    fn empty_strings_are_valid() {
        let v = PairedParameterValue::try_from(ValueSubmission {
            name: Some(String::new()),
            value: Some(String::new()),
            second_name: Some(String::new()),
            dynamic_value: Some(String::new()),
            description: None,
        })
        .unwrap();
        assert_eq!(v.resolve(""), Some(""));
    }

    #[test]
    fn missing_field_is_rejected() {
        let sub = ValueSubmission {
            name: Some("ENV1".into()),
            value: Some("foo".into()),
            second_name: Some("ENV2".into()),
            ..Default::default()
        };
        assert_eq!(
            PairedParameterValue::try_from(sub),
            Err(ParameterError::InvalidArgument("dynamicValue".to_string()))
        );
    }

    #[test]
    fn binds_from_json() {
        let sub: ValueSubmission = serde_json::from_value(serde_json::json!({
            "name": "ENV1",
            "value": "foo",
            "secondName": "ENV2",
            "dynamicValue": "bar",
        }))
        .unwrap();
        assert_eq!(PairedParameterValue::try_from(sub).unwrap(), sample());
    }
}

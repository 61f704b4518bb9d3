// Job file loading and the lookup-driven query layer.

use anyhow::Result;
use dynparam::{
    EnvVars, FormValues, ParameterError, ParameterLookup, list_dependent_options,
    list_independent_options, load_jobs_file,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/jobs.json");

fn write_config(text: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(text.as_bytes())?;
    Ok(file)
}

#[test]
fn fixture_loads_and_answers_queries() -> Result<()> {
    let registry = load_jobs_file(FIXTURE)?;

    assert_eq!(
        list_independent_options(&registry, "deploy", "color")?,
        vec!["red", "blue", "green"]
    );
    assert_eq!(
        list_dependent_options(&registry, "deploy", "COLOR", "r")?,
        vec!["Ruby", "Red Hat"]
    );
    assert_eq!(
        list_dependent_options(&registry, "deploy", "region", "eu")?,
        vec!["eu-west-1", "eu-central-1"]
    );
    assert!(list_dependent_options(&registry, "deploy", "region", "ap")?.is_empty());
    Ok(())
}

#[test]
fn fixture_records_skipped_lines() -> Result<()> {
    let registry = load_jobs_file(FIXTURE)?;
    let color = registry
        .find_parameter("deploy", "COLOR")
        .expect("COLOR defined");
    assert_eq!(color.catalog().malformed_lines().len(), 1);
    assert_eq!(
        registry.job("nightly").map(|set| set.is_empty()),
        Some(true)
    );
    Ok(())
}

#[test]
fn unknown_job_or_parameter_is_a_lookup_miss() -> Result<()> {
    let registry = load_jobs_file(FIXTURE)?;
    assert!(matches!(
        list_independent_options(&registry, "release", "COLOR"),
        Err(ParameterError::LookupMiss { .. })
    ));
    assert!(matches!(
        list_dependent_options(&registry, "nightly", "COLOR", "r"),
        Err(ParameterError::LookupMiss { .. })
    ));
    Ok(())
}

#[test]
fn submission_reaches_the_build_environment() -> Result<()> {
    let registry = load_jobs_file(FIXTURE)?;
    let region = registry
        .find_parameter("deploy", "REGION")
        .expect("REGION defined");

    let mut form = FormValues::new();
    form.insert("REGION".to_string(), vec!["eu".to_string()]);
    form.insert("ZONE".to_string(), vec!["eu-west-1".to_string()]);
    let value = region.create_value_from_form(&form)?;

    let mut env = EnvVars::new();
    value.export_environment(&mut env);
    assert_eq!(env.get("REGION").map(String::as_str), Some("eu"));
    assert_eq!(env.get("ZONE").map(String::as_str), Some("eu-west-1"));
    assert_eq!(value.resolve("ZONE"), Some("eu-west-1"));
    Ok(())
}

#[test]
fn duplicate_parameter_names_are_rejected() -> Result<()> {
    let file = write_config(
        r#"{ "jobs": [ { "name": "j", "parameters": [
            { "name": "Color", "secondName": "A" },
            { "name": "COLOR", "secondName": "B" }
        ] } ] }"#,
    )?;
    let err = load_jobs_file(file.path().to_str().expect("utf-8 temp path")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ParameterError>(),
        Some(&ParameterError::DuplicateParameter {
            job: "j".to_string(),
            parameter: "COLOR".to_string(),
        })
    );
    Ok(())
}

#[test]
fn missing_second_name_fails_to_parse() -> Result<()> {
    let file =
        write_config(r#"{ "jobs": [ { "name": "j", "parameters": [ { "name": "A" } ] } ] }"#)?;
    assert!(load_jobs_file(file.path().to_str().expect("utf-8 temp path")).is_err());
    Ok(())
}

#[test]
fn missing_file_names_the_path() {
    let err = load_jobs_file("/nonexistent/jobs.json").unwrap_err();
    assert!(format!("{err}").contains("/nonexistent/jobs.json"));
}

use thiserror::Error;

/// Result alias used by the library surface.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Errors surfaced by catalogs, values and the lookup layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// A dependent option line that cannot be split into `prefix:value`.
    /// Catalogs record these and skip the line; they never abort a listing.
    #[error("malformed dependent option at line {line}: {text:?} (expected `prefix:value`)")]
    Configuration { line: usize, text: String },

    #[error("missing required field `{0}`")]
    InvalidArgument(String),

    #[error("malformed submission: {0}")]
    InvalidSubmission(String),

    #[error("no parameter `{parameter}` in job `{job}`")]
    LookupMiss { job: String, parameter: String },

    #[error("duplicate parameter `{parameter}` in job `{job}`")]
    DuplicateParameter { job: String, parameter: String },

    #[error("invalid parameter definition: {0}")]
    InvalidDefinition(String),

    #[error("option pattern error: {0}")]
    Pattern(String),
}

impl From<regex::Error> for ParameterError {
    fn from(e: regex::Error) -> Self {
        ParameterError::Pattern(e.to_string())
    }
}

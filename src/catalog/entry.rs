use crate::error::ParameterError;

/// A well-formed line from the dependent option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentEntry {
    /// The line as configured. Selection matching runs against the whole line.
    pub line: String,
    /// Text between the first and second `:`.
    pub display: String,
}

/// Dependent option list after parsing: usable entries in file order, plus the
/// lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedDependent {
    pub entries: Vec<DependentEntry>,
    pub malformed: Vec<ParameterError>,
}

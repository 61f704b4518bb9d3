use crate::catalog::entry::{DependentEntry, ParsedDependent};
use crate::error::{ParameterError, ParameterResult};
use regex::Regex;

/// Split raw option text into `(line number, line)` pairs, skipping empty lines.
///
/// Either line ending is accepted. Line numbers are 1-based and count the
/// skipped lines, so they point back into the configured text. A line holding
/// only whitespace is not empty and is kept.
pub fn split_lines(raw: &str) -> ParameterResult<Vec<(usize, &str)>> {
    let re = Regex::new(r"\r?\n")?;
    Ok(re
        .split(raw)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(lineno, line)| (lineno + 1, line))
        .collect())
}

/// Parse the independent option list. Entries keep their configured order.
pub fn parse_independent(raw: &str) -> ParameterResult<Vec<String>> {
    Ok(split_lines(raw)?
        .into_iter()
        .map(|(_, line)| line.to_string())
        .collect())
}

/// Parse the dependent option list.
///
/// Expected shape, one entry per line:
/// prefix:display
///
/// Example:
/// re:Red Hat
///
/// Only the segment after the first ':' and before the next one is kept as
/// the display value. A line without any ':' is recorded as malformed and left
/// out of `entries`.
pub fn parse_dependent(raw: &str) -> ParameterResult<ParsedDependent> {
    // Capture:
    // 1) everything up to the first ':'
    // 2) display: up to the next ':' or end of line
    let re = Regex::new(r"^([^:]*):([^:]*)")?;

    let mut out = ParsedDependent::default();
    for (lno, line) in split_lines(raw)? {
        match re.captures(line) {
            Some(caps) => out.entries.push(DependentEntry {
                line: line.to_string(),
                display: caps[2].to_string(),
            }),
            None => out.malformed.push(ParameterError::Configuration {
                line: lno,
                text: line.to_string(),
            }),
        }
    }
    Ok(out)
}

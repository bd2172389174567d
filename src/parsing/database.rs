use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use crate::core::database::{Suspect, SuspectDatabase};
use crate::core::fingerprint::Fingerprint;
use crate::parsing::ParseError;
use crate::utils::validation::{check_suspect_limit, clean_field, is_valid_marker, MAX_MARKERS};

/// Parse a suspect database file with columns: name, marker1, marker2, ...
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_database_file(path: &Path, delimiter: char) -> Result<SuspectDatabase, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_database_text(&content, delimiter)
}

/// Parse suspect database text with columns: name, marker1, marker2, ...
///
/// The first non-empty, non-comment line is the header. Its first cell labels
/// the name column and is ignored; the remaining cells name the STR markers.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the header is missing or holds empty or
/// duplicate markers, if a row has the wrong number of fields or a non-integer
/// count, or if no suspects are found. Returns `ParseError::TooManyMarkers` or
/// `ParseError::TooManySuspects` if a limit is exceeded.
pub fn parse_database_text(text: &str, delimiter: char) -> Result<SuspectDatabase, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_idx, header_line) = lines.next().ok_or_else(|| {
        ParseError::InvalidFormat("Missing header line in database".to_string())
    })?;
    let header: Vec<&str> = header_line.split(delimiter).map(clean_field).collect();
    let mut database = SuspectDatabase::new(parse_header(&header, header_idx + 1)?);
    let mut seen_names = HashSet::new();

    for (i, line) in lines {
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let fields: Vec<&str> = line.split(delimiter).map(clean_field).collect();

        let expected_fields = database.markers.len() + 1;
        if fields.len() != expected_fields {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields, expected {expected_fields}",
                fields.len()
            )));
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty suspect name"
            )));
        }

        let mut fingerprint = Fingerprint::new();
        for (marker, value) in database.markers.iter().zip(&fields[1..]) {
            let count: usize = value.parse().map_err(|_| {
                ParseError::InvalidFormat(format!(
                    "Invalid count for marker {marker} on line {line_num}: '{value}'"
                ))
            })?;
            fingerprint.insert(marker.as_str(), count)?;
        }

        // Check suspect limit for DOS protection
        if check_suspect_limit(database.len()).is_some() {
            return Err(ParseError::TooManySuspects(database.len() + 1));
        }

        if !seen_names.insert(name.to_string()) {
            warn!("Duplicate suspect name '{name}' on line {line_num}");
        }

        database.push(Suspect::new(name, fingerprint));
    }

    if database.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No suspects found in database".to_string(),
        ));
    }

    Ok(database)
}

fn parse_header(fields: &[&str], line_num: usize) -> Result<Vec<String>, ParseError> {
    let markers = fields.get(1..).unwrap_or_default();

    if markers.len() > MAX_MARKERS {
        return Err(ParseError::TooManyMarkers(markers.len()));
    }

    if markers.is_empty() {
        warn!("Database header has no marker columns; every suspect will match");
    }

    let mut seen = HashSet::new();
    for marker in markers {
        if !is_valid_marker(marker) {
            return Err(ParseError::InvalidFormat(format!(
                "Invalid marker name in header on line {line_num}: '{marker}'"
            )));
        }
        if !seen.insert(*marker) {
            return Err(ParseError::InvalidFormat(format!(
                "Duplicate marker {marker} in header on line {line_num}"
            )));
        }
    }

    Ok(markers.iter().map(|m| (*m).to_string()).collect())
}

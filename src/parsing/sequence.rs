//! Reader for the DNA sequence being profiled.
//!
//! Accepts plain text, where line breaks and surrounding whitespace are dropped, or
//! FASTA holding a single record. Both may be gzip/bgzip compressed.
//!
//! Supported FASTA extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::debug;

use crate::core::profile::SequenceProfile;
use crate::parsing::ParseError;
use crate::utils::validation::MAX_SEQUENCE_LENGTH;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a file's contents, decompressing gzip/bgzip by extension
fn read_contents(path: &Path) -> Result<String, ParseError> {
    if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        let mut decoder = MultiGzDecoder::new(file);
        let mut content = String::new();
        decoder.read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Parse a sequence file into a profile.
///
/// Files with a FASTA extension are parsed as FASTA; anything else is
/// auto-detected from its content (see [`parse_sequence_text`]).
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_sequence_file(path: &Path) -> Result<SequenceProfile, ParseError> {
    let content = read_contents(path)?;
    let profile = if is_fasta_file(path) {
        parse_fasta_text(&content)?
    } else {
        parse_sequence_text(&content)?
    };

    debug!("Read {} bases from {}", profile.len(), path.display());
    Ok(profile)
}

/// Parse a plain-text sequence file, ignoring any FASTA header detection
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or
/// `ParseError::SequenceTooLong` if the limit is exceeded.
pub fn parse_plain_file(path: &Path) -> Result<SequenceProfile, ParseError> {
    parse_plain_text(&read_contents(path)?)
}

/// Parse a FASTA sequence file regardless of its extension
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if it does not hold exactly one FASTA record.
pub fn parse_fasta_file(path: &Path) -> Result<SequenceProfile, ParseError> {
    parse_fasta_text(&read_contents(path)?)
}

/// Parse sequence text, detecting FASTA by a leading `>` on the first
/// non-blank line.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for malformed FASTA, or
/// `ParseError::SequenceTooLong` if the limit is exceeded.
pub fn parse_sequence_text(text: &str) -> Result<SequenceProfile, ParseError> {
    let is_fasta = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|line| line.starts_with('>'));

    if is_fasta {
        parse_fasta_text(text)
    } else {
        parse_plain_text(text)
    }
}

/// Parse a raw sequence, joining all lines with surrounding whitespace removed.
///
/// Empty input yields an empty profile.
///
/// # Errors
///
/// Returns `ParseError::SequenceTooLong` if the limit is exceeded.
pub fn parse_plain_text(text: &str) -> Result<SequenceProfile, ParseError> {
    parse_plain_text_with_limit(text, MAX_SEQUENCE_LENGTH)
}

fn parse_plain_text_with_limit(text: &str, max_len: usize) -> Result<SequenceProfile, ParseError> {
    let mut sequence = String::with_capacity(text.len().min(max_len));
    for line in text.lines() {
        sequence.push_str(line.trim());
        check_sequence_length(sequence.len(), max_len)?;
    }
    Ok(SequenceProfile::new(sequence))
}

/// Parse FASTA text holding exactly one record
///
/// # Errors
///
/// Returns `ParseError::Noodles` if parsing fails, `ParseError::InvalidFormat`
/// if there is not exactly one record, or `ParseError::SequenceTooLong` if the
/// limit is exceeded.
pub fn parse_fasta_text(text: &str) -> Result<SequenceProfile, ParseError> {
    parse_fasta_text_with_limit(text, MAX_SEQUENCE_LENGTH)
}

fn parse_fasta_text_with_limit(text: &str, max_len: usize) -> Result<SequenceProfile, ParseError> {
    let mut reader = fasta::io::Reader::new(text.trim_start().as_bytes());
    parse_fasta_reader(&mut reader, max_len)
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
    max_len: usize,
) -> Result<SequenceProfile, ParseError> {
    let mut profile = None;

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if profile.is_some() {
            return Err(ParseError::InvalidFormat(
                "Expected a single sequence record in FASTA input, found several".to_string(),
            ));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let bases = record.sequence().as_ref();
        check_sequence_length(bases.len(), max_len)?;

        let sequence = String::from_utf8(bases.to_vec()).map_err(|_| {
            ParseError::InvalidFormat(format!("Sequence '{name}' is not valid UTF-8"))
        })?;

        debug!("Parsed FASTA record '{name}' ({} bases)", sequence.len());
        profile = Some(SequenceProfile::new(sequence));
    }

    profile.ok_or_else(|| {
        ParseError::InvalidFormat("No sequences found in FASTA input".to_string())
    })
}

fn check_sequence_length(len: usize, max_len: usize) -> Result<(), ParseError> {
    if len > max_len {
        return Err(ParseError::SequenceTooLong(len));
    }
    Ok(())
}

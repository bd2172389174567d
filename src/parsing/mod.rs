//! Readers for sequences and suspect fingerprint databases.
//!
//! This module provides parsers for:
//!
//! - **Sequence files**: Plain text (line breaks ignored) or single-record FASTA,
//!   optionally gzip/bgzip compressed
//! - **Suspect databases**: CSV/TSV tables with one suspect per row and one STR marker
//!   per column
//!
//! ## Example
//!
//! ```rust,no_run
//! use str_profiler::parsing::database::parse_database_file;
//! use str_profiler::parsing::sequence::parse_sequence_file;
//! use std::path::Path;
//!
//! let profile = parse_sequence_file(Path::new("sequence.txt")).unwrap();
//! let database = parse_database_file(Path::new("data.csv"), ',').unwrap();
//! ```
//!
//! ## Database Layout
//!
//! | name | AGAT | AATG | TATC |
//! |------|------|------|------|
//! | Alice | 28 | 42 | 14 |
//! | Bob | 17 | 22 | 19 |
//!
//! The label of the first column is ignored; the remaining header cells name the markers.

use thiserror::Error;

use crate::core::profile::ProfileError;
use crate::utils::validation::{MAX_MARKERS, MAX_SEQUENCE_LENGTH, MAX_SUSPECTS};

pub mod database;
pub mod sequence;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many suspects: {0} exceeds maximum allowed ({max})", max = MAX_SUSPECTS)]
    TooManySuspects(usize),

    #[error("Too many markers: {0} exceeds maximum allowed ({max})", max = MAX_MARKERS)]
    TooManyMarkers(usize),

    #[error("Sequence too long: {0} bases exceeds maximum allowed ({max})", max = MAX_SEQUENCE_LENGTH)]
    SequenceTooLong(usize),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

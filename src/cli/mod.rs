//! Command-line interface for str-profiler.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Give a verdict for every suspect in a database against a sequence
//! - **count**: Print the longest run of one or more STR markers in a sequence
//!
//! ## Usage
//!
//! ```text
//! # Verdict for every suspect
//! str-profiler identify sequence.txt data.csv
//!
//! # Only the matching suspects, as JSON
//! str-profiler identify sequence.txt data.csv --guilty-only --format json
//!
//! # Read the sequence from stdin
//! cat sequence.txt | str-profiler identify - data.csv
//!
//! # Longest runs of individual markers
//! str-profiler count sample.fa AGATC AATG TATC
//! ```

use std::io::{self, Read};
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::profile::SequenceProfile;
use crate::parsing;

pub mod count;
pub mod identify;

#[derive(Parser)]
#[command(name = "str-profiler")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Match DNA sequences against STR fingerprint databases")]
#[command(
    long_about = "str-profiler counts the longest run of short tandem repeats (STRs) in a DNA sequence and compares them against a database of suspect fingerprints.\n\nA suspect is reported guilty only when every marker count matches exactly."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a sequence against every suspect in a database
    Identify(identify::IdentifyArgs),

    /// Count the longest run of STR markers in a sequence
    Count(count::CountArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SequenceFormat {
    /// Raw bases; line breaks are ignored
    Text,
    /// Single-record FASTA
    Fasta,
}

/// Read the sequence to profile from a path, or stdin when the path is `-`
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub fn read_sequence(
    input: &Path,
    format: Option<SequenceFormat>,
) -> anyhow::Result<SequenceProfile> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        let profile = match format {
            Some(SequenceFormat::Text) => parsing::sequence::parse_plain_text(&buffer)?,
            Some(SequenceFormat::Fasta) => parsing::sequence::parse_fasta_text(&buffer)?,
            None => parsing::sequence::parse_sequence_text(&buffer)?,
        };
        return Ok(profile);
    }

    let profile = match format {
        Some(SequenceFormat::Text) => parsing::sequence::parse_plain_file(input)?,
        Some(SequenceFormat::Fasta) => parsing::sequence::parse_fasta_file(input)?,
        None => parsing::sequence::parse_sequence_file(input)?,
    };
    Ok(profile)
}

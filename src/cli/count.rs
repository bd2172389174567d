use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_sequence, OutputFormat, SequenceFormat};
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::utils::validation::is_valid_marker;

#[derive(Args)]
pub struct CountArgs {
    /// Sequence file (plain text or FASTA, optionally gzipped)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub sequence: PathBuf,

    /// STR markers to count (e.g. AGATC AATG TATC)
    #[arg(required = true, num_args = 1..)]
    pub markers: Vec<String>,

    /// Sequence format (auto-detected by default)
    #[arg(long)]
    pub sequence_format: Option<SequenceFormat>,

    /// Compare bases case-insensitively
    #[arg(long)]
    pub ignore_case: bool,
}

/// Execute count subcommand
///
/// # Errors
///
/// Returns an error if a marker is invalid or the sequence cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CountArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if let Some(bad) = args.markers.iter().find(|m| !is_valid_marker(m)) {
        anyhow::bail!("Invalid marker '{bad}': markers must be non-empty and contain no whitespace");
    }

    let profile = read_sequence(&args.sequence, args.sequence_format)?;

    if verbose {
        eprintln!("Parsed sequence of {} bases", profile.len());
    }

    let config = MatchingConfig {
        case_insensitive: args.ignore_case,
    };
    let engine = MatchingEngine::with_config(&profile, config);

    let counts = args
        .markers
        .iter()
        .map(|m| Ok((m.as_str(), engine.longest_run(m)?)))
        .collect::<anyhow::Result<Vec<(&str, usize)>>>()?;

    match format {
        OutputFormat::Text => {
            for (marker, run) in &counts {
                println!("{marker}\t{run}");
            }
        }
        OutputFormat::Json => {
            let output: serde_json::Map<String, serde_json::Value> = counts
                .iter()
                .map(|(marker, run)| ((*marker).to_string(), serde_json::json!(run)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("marker\tlongest_run");
            for (marker, run) in &counts {
                println!("{marker}\t{run}");
            }
        }
    }

    Ok(())
}

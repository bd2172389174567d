use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{read_sequence, OutputFormat, SequenceFormat};
use crate::core::database::SuspectDatabase;
use crate::core::profile::SequenceProfile;
use crate::matching::engine::{MatchingConfig, MatchingEngine, SuspectResult};
use crate::parsing;

#[derive(Args)]
pub struct IdentifyArgs {
    /// Sequence file (plain text or FASTA, optionally gzipped)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub sequence: PathBuf,

    /// Suspect database (CSV or TSV: name column followed by one column per marker)
    #[arg(required = true)]
    pub database: PathBuf,

    /// Sequence format (auto-detected by default)
    #[arg(long)]
    pub sequence_format: Option<SequenceFormat>,

    /// Database format (detected from the extension by default)
    #[arg(long)]
    pub database_format: Option<DatabaseFormat>,

    /// Only report suspects whose fingerprint matches
    #[arg(long)]
    pub guilty_only: bool,

    /// Compare bases case-insensitively
    #[arg(long)]
    pub ignore_case: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DatabaseFormat {
    Csv,
    Tsv,
}

impl DatabaseFormat {
    fn delimiter(self) -> char {
        match self {
            Self::Csv => ',',
            Self::Tsv => '\t',
        }
    }
}

/// Execute identify subcommand
///
/// # Errors
///
/// Returns an error if the sequence or database cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let profile = read_sequence(&args.sequence, args.sequence_format)?;

    if verbose {
        eprintln!("Parsed sequence of {} bases", profile.len());
    }

    let database_format = args
        .database_format
        .unwrap_or_else(|| detect_database_format(&args.database));
    let database =
        parsing::database::parse_database_file(&args.database, database_format.delimiter())?;

    if verbose {
        eprintln!(
            "Loaded database with {} suspects and {} markers",
            database.len(),
            database.markers.len()
        );
    }

    let config = MatchingConfig {
        case_insensitive: args.ignore_case,
    };
    let engine = MatchingEngine::with_config(&profile, config);
    let mut results = engine.identify(&database)?;

    if args.guilty_only {
        results.retain(|r| r.verdict.is_guilty());
    }

    match format {
        OutputFormat::Text => print_text_results(&results, verbose),
        OutputFormat::Json => print_json_results(&results, &database, &profile)?,
        OutputFormat::Tsv => print_tsv_results(&results, &database),
    }

    if args.guilty_only && results.is_empty() {
        eprintln!("No match");
    }

    Ok(())
}

/// Detect database format from file extension
fn detect_database_format(path: &Path) -> DatabaseFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("tsv" | "tab" | "txt") => DatabaseFormat::Tsv,
        _ => DatabaseFormat::Csv,
    }
}

fn print_text_results(results: &[SuspectResult], verbose: bool) {
    for result in results {
        println!("{result}");

        if verbose {
            for c in &result.markers {
                let flag = if c.matches() { "ok" } else { "MISMATCH" };
                println!(
                    "   {}: expected {}, observed {} ({flag})",
                    c.marker, c.expected, c.observed
                );
            }
        }
    }
}

fn print_json_results(
    results: &[SuspectResult],
    database: &SuspectDatabase,
    profile: &SequenceProfile,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "sequence": {
            "length": profile.len(),
            "md5": profile.md5(),
        },
        "markers": database.markers,
        "suspects": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[SuspectResult], database: &SuspectDatabase) {
    let mut header = vec!["name".to_string(), "verdict".to_string()];
    header.extend(database.markers.iter().cloned());
    println!("{}", header.join("\t"));

    for r in results {
        let mut row = vec![r.name.clone(), r.verdict.to_string()];
        row.extend(r.markers.iter().map(|c| c.observed.to_string()));
        println!("{}", row.join("\t"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_database_format() {
        assert!(matches!(
            detect_database_format(Path::new("data.csv")),
            DatabaseFormat::Csv
        ));
        assert!(matches!(
            detect_database_format(Path::new("data.TSV")),
            DatabaseFormat::Tsv
        ));
        assert!(matches!(
            detect_database_format(Path::new("data")),
            DatabaseFormat::Csv
        ));
    }
}

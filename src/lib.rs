//! # str-profiler
//!
//! A library for matching DNA sequences against short tandem repeat (STR) fingerprints.
//!
//! Forensic DNA profiling compares the number of times short motifs such as `AGAT`
//! or `AATG` repeat back to back at a handful of loci. The repeat counts vary between
//! individuals, so a table of counts per person acts as a fingerprint.
//!
//! `str-profiler` measures the longest consecutive run of each marker in a sequence and
//! reports which suspects in a database have exactly those counts.
//!
//! ## Features
//!
//! - **Longest-run counting**: Maximum contiguous repetition of a marker, never a sum
//! - **Exact matching**: A suspect matches only when every marker count agrees
//! - **Per-marker diagnostics**: Expected vs. observed counts for every marker
//! - **Flexible input**: Plain text or FASTA sequences (optionally gzipped), CSV/TSV databases
//!
//! ## Example
//!
//! ```rust
//! use str_profiler::{Fingerprint, SequenceProfile};
//!
//! let profile = SequenceProfile::new("CTAGATAGATAGATAGATGACTA");
//! assert_eq!(profile.longest_run("AGAT")?, 4);
//!
//! let ada = Fingerprint::try_from_pairs([("AGAT", 4)])?;
//! let bia = Fingerprint::try_from_pairs([("AGAT", 5)])?;
//! assert!(profile.matches(&ada)?);
//! assert!(!profile.matches(&bia)?);
//! # Ok::<(), str_profiler::ProfileError>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence profiles, fingerprints and suspect databases
//! - [`matching`]: Match predicate and per-suspect evaluation
//! - [`parsing`]: Readers for sequence files and suspect databases
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::database::{Suspect, SuspectDatabase};
pub use core::fingerprint::Fingerprint;
pub use core::profile::{ProfileError, SequenceProfile};
pub use core::types::Verdict;
pub use matching::diagnosis::{MarkerComparison, MatchDiagnosis};
pub use matching::engine::{FingerprintMatcher, MatchingConfig, MatchingEngine, SuspectResult};
pub use parsing::ParseError;

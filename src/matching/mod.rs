//! Fingerprint matching and per-suspect evaluation.
//!
//! This module provides the matching functionality:
//!
//! - [`FingerprintMatcher`]: Exact-match predicate between a profile and a fingerprint
//! - [`MatchingEngine`]: Evaluates every suspect of a database against one profile
//! - [`MatchDiagnosis`]: Expected vs. observed counts for every marker
//!
//! ## Matching Rule
//!
//! A suspect matches only if **every** marker's longest run in the sequence equals the
//! expected count. There is no partial score: one disagreeing marker makes the suspect
//! innocent. A fingerprint with no markers matches any sequence.
//!
//! ## Example
//!
//! ```rust
//! use str_profiler::{Fingerprint, MatchingEngine, SequenceProfile, Suspect, SuspectDatabase};
//!
//! let profile = SequenceProfile::new("CTAGATAGATAGATAGATGACTA");
//!
//! let mut database = SuspectDatabase::new(vec!["AGAT".to_string()]);
//! database.push(Suspect::new("Ada", Fingerprint::try_from_pairs([("AGAT", 4)])?));
//! database.push(Suspect::new("Bia", Fingerprint::try_from_pairs([("AGAT", 5)])?));
//!
//! let engine = MatchingEngine::new(&profile);
//! for result in engine.identify(&database)? {
//!     println!("{result}");
//! }
//! # Ok::<(), str_profiler::ProfileError>(())
//! ```
//!
//! [`FingerprintMatcher`]: engine::FingerprintMatcher
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`MatchDiagnosis`]: diagnosis::MatchDiagnosis

pub mod diagnosis;
pub mod engine;

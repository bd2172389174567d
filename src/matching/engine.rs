use serde::Serialize;
use tracing::{debug, info};

use crate::core::database::{Suspect, SuspectDatabase};
use crate::core::fingerprint::Fingerprint;
use crate::core::profile::{ProfileError, SequenceProfile};
use crate::core::types::Verdict;
use crate::matching::diagnosis::{MarkerComparison, MatchDiagnosis};

/// Decides whether a profile's measured repeat counts equal a fingerprint's
pub struct FingerprintMatcher;

impl FingerprintMatcher {
    /// True iff every marker in `fingerprint` has exactly its expected
    /// longest run in `profile`. An empty fingerprint matches any profile.
    ///
    /// Stops at the first disagreeing marker.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if an empty marker is reached.
    pub fn matches(
        profile: &SequenceProfile,
        fingerprint: &Fingerprint,
    ) -> Result<bool, ProfileError> {
        for (marker, expected) in fingerprint.iter() {
            let observed = profile.longest_run(marker)?;
            if observed != expected {
                debug!(marker, expected, observed, "marker mismatch");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Measure every marker without stopping early
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if the fingerprint holds an empty marker.
    pub fn compare(
        profile: &SequenceProfile,
        fingerprint: &Fingerprint,
    ) -> Result<Vec<MarkerComparison>, ProfileError> {
        MatchDiagnosis::analyze(profile, fingerprint).map(|d| d.comparisons)
    }
}

/// Result of evaluating one suspect against the profile
#[derive(Debug, Clone, Serialize)]
pub struct SuspectResult {
    pub name: String,
    pub verdict: Verdict,
    pub markers: Vec<MarkerComparison>,
}

impl std::fmt::Display for SuspectResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.verdict)
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone, Default)]
pub struct MatchingConfig {
    /// Uppercase the sequence and markers before counting
    pub case_insensitive: bool,
}

/// Evaluates suspects from a database against one sequence profile
pub struct MatchingEngine<'a> {
    profile: &'a SequenceProfile,
    /// Uppercased copy of the profile, only built for case-insensitive matching
    folded: Option<SequenceProfile>,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(profile: &'a SequenceProfile) -> Self {
        Self::with_config(profile, MatchingConfig::default())
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(profile: &'a SequenceProfile, config: MatchingConfig) -> Self {
        let folded = config.case_insensitive.then(|| profile.to_uppercase());
        Self {
            profile,
            folded,
            config,
        }
    }

    fn effective_profile(&self) -> &SequenceProfile {
        self.folded.as_ref().unwrap_or(self.profile)
    }

    /// Longest run of a single marker under this engine's configuration
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if `marker` is empty.
    pub fn longest_run(&self, marker: &str) -> Result<usize, ProfileError> {
        if self.config.case_insensitive {
            self.effective_profile()
                .longest_run(&marker.to_ascii_uppercase())
        } else {
            self.profile.longest_run(marker)
        }
    }

    /// Match predicate under this engine's configuration, stopping at the
    /// first disagreeing marker. Markers are never merged: `AGAT` and `agat`
    /// are checked separately even when case-insensitive.
    fn fingerprint_matches(&self, fingerprint: &Fingerprint) -> Result<bool, ProfileError> {
        if !self.config.case_insensitive {
            return FingerprintMatcher::matches(self.profile, fingerprint);
        }
        for (marker, expected) in fingerprint.iter() {
            if self.longest_run(marker)? != expected {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Evaluate one suspect, reporting every marker comparison
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if the suspect's fingerprint holds an empty marker.
    pub fn evaluate(&self, suspect: &Suspect) -> Result<SuspectResult, ProfileError> {
        let diagnosis = MatchDiagnosis::measure(&suspect.fingerprint, |m| self.longest_run(m))?;
        let verdict = Verdict::from_match(diagnosis.is_match());

        for c in &diagnosis.comparisons {
            debug!(
                suspect = %suspect.name,
                marker = %c.marker,
                expected = c.expected,
                observed = c.observed,
                "compared marker"
            );
        }

        Ok(SuspectResult {
            name: suspect.name.clone(),
            verdict,
            markers: diagnosis.comparisons,
        })
    }

    /// Evaluate every suspect in database order
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if any fingerprint holds an empty marker.
    pub fn identify(&self, database: &SuspectDatabase) -> Result<Vec<SuspectResult>, ProfileError> {
        let results = database
            .suspects
            .iter()
            .map(|s| self.evaluate(s))
            .collect::<Result<Vec<_>, _>>()?;

        let guilty = results.iter().filter(|r| r.verdict.is_guilty()).count();
        info!(
            "Evaluated {} suspects across {} markers: {guilty} matching",
            results.len(),
            database.markers.len()
        );

        Ok(results)
    }

    /// Names of the suspects whose fingerprint matches, in database order
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if any fingerprint holds an empty marker.
    pub fn matching_suspects<'d>(
        &self,
        database: &'d SuspectDatabase,
    ) -> Result<Vec<&'d str>, ProfileError> {
        let mut names = Vec::new();
        for suspect in &database.suspects {
            if self.fingerprint_matches(&suspect.fingerprint)? {
                names.push(suspect.name.as_str());
            }
        }
        Ok(names)
    }
}

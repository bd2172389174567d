use serde::Serialize;

use crate::core::fingerprint::Fingerprint;
use crate::core::profile::{ProfileError, SequenceProfile};

/// Expected vs. observed longest run for a single STR marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerComparison {
    pub marker: String,

    /// Count from the fingerprint
    pub expected: usize,

    /// Longest run measured in the sequence
    pub observed: usize,

    /// Whether the observed count equals the expected count
    #[serde(rename = "matches")]
    is_match: bool,
}

impl MarkerComparison {
    pub fn new(marker: impl Into<String>, expected: usize, observed: usize) -> Self {
        Self {
            marker: marker.into(),
            expected,
            observed,
            is_match: expected == observed,
        }
    }

    #[must_use]
    pub fn matches(&self) -> bool {
        self.is_match
    }
}

/// Per-marker breakdown of how a fingerprint compares to a profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDiagnosis {
    /// One comparison per fingerprint marker, in fingerprint order
    pub comparisons: Vec<MarkerComparison>,
}

impl MatchDiagnosis {
    /// Measure every marker of `fingerprint` against `profile`.
    ///
    /// Unlike the match predicate this never stops early, so mismatching
    /// markers after the first are reported too.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if the fingerprint holds an empty marker.
    pub fn analyze(
        profile: &SequenceProfile,
        fingerprint: &Fingerprint,
    ) -> Result<Self, ProfileError> {
        Self::measure(fingerprint, |marker| profile.longest_run(marker))
    }

    /// Compare every marker of `fingerprint` against the count returned by
    /// `longest_run`. Each fingerprint entry yields exactly one comparison.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `longest_run`.
    pub fn measure<F>(fingerprint: &Fingerprint, longest_run: F) -> Result<Self, ProfileError>
    where
        F: Fn(&str) -> Result<usize, ProfileError>,
    {
        let comparisons = fingerprint
            .iter()
            .map(|(marker, expected)| {
                Ok(MarkerComparison::new(marker, expected, longest_run(marker)?))
            })
            .collect::<Result<Vec<_>, ProfileError>>()?;

        Ok(Self { comparisons })
    }

    /// True when every marker agrees (vacuously true with no markers)
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.comparisons.iter().all(MarkerComparison::matches)
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &MarkerComparison> {
        self.comparisons.iter().filter(|c| !c.matches())
    }
}

use thiserror::Error;

use crate::core::fingerprint::Fingerprint;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Invalid subsequence: an STR marker must not be empty")]
    EmptySubsequence,
}

/// An immutable DNA sequence that suspects are profiled against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceProfile {
    sequence: String,
}

impl SequenceProfile {
    /// Wrap a sequence. Any string is accepted; the alphabet is not checked.
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// MD5 of the uppercase sequence, for identifying which sample a report was run on
    #[must_use]
    pub fn md5(&self) -> String {
        let uppercase = self.sequence.to_ascii_uppercase();
        format!("{:x}", md5::compute(uppercase.as_bytes()))
    }

    /// Return the longest number of back-to-back repetitions of `subsequence`
    /// found anywhere in the sequence.
    ///
    /// Separate runs are not summed: a sequence holding a run of 3 and a run
    /// of 7 yields 7. A subsequence that never occurs yields 0, as does any
    /// query against an empty sequence.
    ///
    /// ```
    /// use str_profiler::SequenceProfile;
    ///
    /// let profile = SequenceProfile::new("CTAGATAGATAGATAGATGACTA");
    /// assert_eq!(profile.longest_run("AGAT").unwrap(), 4);
    /// assert_eq!(profile.longest_run("AATG").unwrap(), 0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if `subsequence` is empty, since
    /// an empty motif repeats without bound at every position.
    pub fn longest_run(&self, subsequence: &str) -> Result<usize, ProfileError> {
        if subsequence.is_empty() {
            return Err(ProfileError::EmptySubsequence);
        }

        let mut run = 0;
        let mut repeated = String::with_capacity(subsequence.len());
        repeated.push_str(subsequence);

        // `repeated` always holds subsequence * (run + 1)
        while repeated.len() <= self.sequence.len() && self.sequence.contains(&repeated) {
            run += 1;
            repeated.push_str(subsequence);
        }

        Ok(run)
    }

    /// True if every marker in `fingerprint` has exactly its expected longest run
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if the fingerprint holds an empty marker.
    pub fn matches(&self, fingerprint: &Fingerprint) -> Result<bool, ProfileError> {
        crate::matching::engine::FingerprintMatcher::matches(self, fingerprint)
    }

    /// Copy of this profile with the sequence uppercased
    #[must_use]
    pub fn to_uppercase(&self) -> Self {
        Self::new(self.sequence.to_ascii_uppercase())
    }
}

impl std::fmt::Display for SequenceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ_A: &str = "AACCCTGCGCGCGCGCGATCTATCTATCTATCTATCCAGCATTAGCTAGCATCAAGATAGATAGATGAATTTCGAAATGAATGAATGAATGAATGAATGAATG";
    const SEQ_B: &str = "CCAGATAGATAGATAGATAGATAGATGTCACAGGGATGCTGAGGGCTGCTTCGTACGTACTCCTGATTTCGGGGATCGCTGACACTAATGCGTGCGAGCGGATCGATCTCTATCTATCTATCTATCTATCCTATAGCATAGACATCCAGATAGATAGATC";

    #[test]
    fn test_longest_run_simple() {
        let profile = SequenceProfile::new("CTAGATAGATAGATAGATGACTA");
        assert_eq!(profile.longest_run("AGAT").unwrap(), 4);
    }

    #[test]
    fn test_longest_run_multiple_markers() {
        let profile = SequenceProfile::new(SEQ_A);
        assert_eq!(profile.longest_run("AGAT").unwrap(), 3);
        assert_eq!(profile.longest_run("AATG").unwrap(), 7);
        assert_eq!(profile.longest_run("TATC").unwrap(), 4);

        let profile = SequenceProfile::new(SEQ_B);
        assert_eq!(profile.longest_run("AGAT").unwrap(), 6);
        assert_eq!(profile.longest_run("AATG").unwrap(), 1);
        assert_eq!(profile.longest_run("TATC").unwrap(), 5);
    }

    #[test]
    fn test_longest_run_takes_maximum_not_sum() {
        // Runs of 1 and 3 separated by a spacer
        let profile = SequenceProfile::new("AGATxxAGATAGATAGAT");
        assert_eq!(profile.longest_run("AGAT").unwrap(), 3);
    }

    #[test]
    fn test_longest_run_absent_marker() {
        let profile = SequenceProfile::new("ACGTACGT");
        assert_eq!(profile.longest_run("TTTT").unwrap(), 0);
    }

    #[test]
    fn test_longest_run_empty_sequence() {
        let profile = SequenceProfile::new("");
        assert!(profile.is_empty());
        assert_eq!(profile.longest_run("AGAT").unwrap(), 0);
    }

    #[test]
    fn test_longest_run_empty_subsequence() {
        let profile = SequenceProfile::new("ACGT");
        assert_eq!(
            profile.longest_run(""),
            Err(ProfileError::EmptySubsequence)
        );
    }

    #[test]
    fn test_longest_run_overlapping_motif() {
        // "AA" repeated: AAAAA holds AAAA (2 copies) but not AAAAAA (3)
        let profile = SequenceProfile::new("AAAAA");
        assert_eq!(profile.longest_run("AA").unwrap(), 2);
    }

    #[test]
    fn test_longest_run_motif_longer_than_sequence() {
        let profile = SequenceProfile::new("AGA");
        assert_eq!(profile.longest_run("AGAT").unwrap(), 0);
    }

    #[test]
    fn test_repetition_prefix_property() {
        let profile = SequenceProfile::new(SEQ_A);
        let run = profile.longest_run("AATG").unwrap();
        for n in 1..=run {
            assert!(profile.sequence().contains(&"AATG".repeat(n)));
        }
        assert!(!profile.sequence().contains(&"AATG".repeat(run + 1)));
    }

    #[test]
    fn test_md5_is_case_insensitive() {
        // "ACGT" uppercase -> f1f8f4bf413b16ad135722aa4591043e
        assert_eq!(
            SequenceProfile::new("acgt").md5(),
            "f1f8f4bf413b16ad135722aa4591043e"
        );
        assert_eq!(
            SequenceProfile::new("ACGT").md5(),
            SequenceProfile::new("acgt").md5()
        );
    }

    #[test]
    fn test_to_uppercase() {
        let profile = SequenceProfile::new("agatagat").to_uppercase();
        assert_eq!(profile.sequence(), "AGATAGAT");
        assert_eq!(profile.longest_run("AGAT").unwrap(), 2);
    }
}

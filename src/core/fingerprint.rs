use std::collections::HashMap;

use crate::core::profile::ProfileError;

/// Expected longest-run count for each STR marker of one individual.
///
/// Markers are unique. Entries iterate in insertion order, which for a
/// database row is the column order of the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprint {
    entries: Vec<(String, usize)>,

    /// Index: marker -> position in entries
    marker_to_index: HashMap<String, usize>,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fingerprint from `(marker, count)` pairs
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if any marker is empty.
    pub fn try_from_pairs<I, S>(pairs: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut fingerprint = Self::new();
        for (marker, count) in pairs {
            fingerprint.insert(marker, count)?;
        }
        Ok(fingerprint)
    }

    /// Set the expected count for a marker, returning the previous count if
    /// the marker was already present.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptySubsequence` if `marker` is empty.
    pub fn insert(
        &mut self,
        marker: impl Into<String>,
        count: usize,
    ) -> Result<Option<usize>, ProfileError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(ProfileError::EmptySubsequence);
        }

        if let Some(&idx) = self.marker_to_index.get(&marker) {
            let previous = std::mem::replace(&mut self.entries[idx].1, count);
            return Ok(Some(previous));
        }

        self.marker_to_index.insert(marker.clone(), self.entries.len());
        self.entries.push((marker, count));
        Ok(None)
    }

    #[must_use]
    pub fn get(&self, marker: &str) -> Option<usize> {
        self.marker_to_index
            .get(marker)
            .map(|&idx| self.entries[idx].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(m, c)| (m.as_str(), *c))
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(m, _)| m.as_str())
    }
}

//! Core data types for STR profiling.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SequenceProfile`]: An immutable DNA sequence with longest-run repeat counting
//! - [`Fingerprint`]: Expected repeat counts per STR marker for one individual
//! - [`Suspect`], [`SuspectDatabase`]: Named fingerprints loaded from a database
//! - [`Verdict`]: Result classification for a suspect
//!
//! ## Repeat Counting
//!
//! The count for a marker is the longest *contiguous* run of the marker repeated
//! back to back, not the number of occurrences:
//!
//! | Sequence | Marker | Longest run |
//! |----------|--------|-------------|
//! | `CTAGATAGATAGATAGATGACTA` | AGAT | 4 |
//! | `AGATxxAGATAGATAGAT` | AGAT | 3 |
//! | `ACGTACGT` | TTTT | 0 |
//!
//! [`SequenceProfile`]: profile::SequenceProfile
//! [`Fingerprint`]: fingerprint::Fingerprint
//! [`Suspect`]: database::Suspect
//! [`SuspectDatabase`]: database::SuspectDatabase
//! [`Verdict`]: types::Verdict

pub mod database;
pub mod fingerprint;
pub mod profile;
pub mod types;

use serde::{Deserialize, Serialize};

/// Outcome of comparing one suspect against the profiled sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every marker count matches exactly
    Guilty,
    /// At least one marker count differs
    Innocent,
}

impl Verdict {
    #[must_use]
    pub fn from_match(matched: bool) -> Self {
        if matched {
            Self::Guilty
        } else {
            Self::Innocent
        }
    }

    #[must_use]
    pub fn is_guilty(self) -> bool {
        matches!(self, Self::Guilty)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guilty => write!(f, "guilty"),
            Self::Innocent => write!(f, "innocent"),
        }
    }
}

use crate::core::fingerprint::Fingerprint;

/// A named individual and their STR fingerprint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suspect {
    pub name: String,
    pub fingerprint: Fingerprint,
}

impl Suspect {
    pub fn new(name: impl Into<String>, fingerprint: Fingerprint) -> Self {
        Self {
            name: name.into(),
            fingerprint,
        }
    }
}

/// A table of suspects sharing one set of STR markers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuspectDatabase {
    /// Marker names in header order
    pub markers: Vec<String>,

    /// Suspects in row order
    pub suspects: Vec<Suspect>,
}

impl SuspectDatabase {
    pub fn new(markers: Vec<String>) -> Self {
        Self {
            markers,
            suspects: Vec::new(),
        }
    }

    pub fn push(&mut self, suspect: Suspect) {
        self.suspects.push(suspect);
    }

    /// First suspect with exactly this name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.suspects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suspects.is_empty()
    }
}

//! Diagnostic knowledge base
//!
//! Maps canonical [`DiseaseKey`]s to Turkish display texts. The index is
//! built once and only read afterwards; lookups go through
//! [`DiagnosticIndex::resolve`], which never fails: callers fall back to
//! [`DiagnosticEntry::unknown`] when it returns `None`.

pub mod entries;
pub mod keys;

use serde::{Deserialize, Serialize};

pub use entries::GENERIC_REMEDY;
pub use keys::{normalize_disease, DiseaseKey};

use crate::utils::humanize;

/// Display text for one diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    /// Localized name shown as the result headline
    pub display_name: String,
    /// What the condition is
    pub description: String,
    /// What the grower should do
    pub remedy: String,
}

impl DiagnosticEntry {
    pub fn new(
        display_name: impl Into<String>,
        description: impl Into<String>,
        remedy: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            description: description.into(),
            remedy: remedy.into(),
        }
    }

    /// Entry for a healthy plant of the given kind
    pub fn healthy(plant: &str) -> Self {
        let plant = humanize(plant);
        Self::new(
            format!("{} - {}", plant, entries::HEALTHY_DISPLAY),
            format!(
                "{} bitkiniz sağlıklı görünüyor. Yapraklarda herhangi bir hastalık belirtisi tespit edilmedi.",
                plant
            ),
            entries::HEALTHY_REMEDY,
        )
    }

    /// Entry for a disease the knowledge base has no text for
    pub fn unknown(plant: &str, disease: &str) -> Self {
        let plant = humanize(plant);
        let disease = humanize(disease);
        Self::new(
            format!("{} - {}", plant, disease),
            format!(
                "{} bitkisinde \"{}\" durumu tespit edildi. Bu durum için ayrıntılı bilgi bulunmuyor.",
                plant, disease
            ),
            GENERIC_REMEDY,
        )
    }

    /// Copy of this entry with the plant name prefixed to the headline
    pub fn for_plant(&self, plant: &str) -> Self {
        Self {
            display_name: format!("{} - {}", humanize(plant), self.display_name),
            ..self.clone()
        }
    }
}

/// Read-only mapping from disease key to display text
#[derive(Debug, Clone)]
pub struct DiagnosticIndex {
    entries: Vec<(DiseaseKey, DiagnosticEntry)>,
}

impl DiagnosticIndex {
    /// Index holding the built-in Turkish texts for every key
    pub fn builtin() -> Self {
        let entries = DiseaseKey::ALL
            .iter()
            .map(|&key| {
                let (name, description, remedy) = entries::builtin_text(key);
                (key, DiagnosticEntry::new(name, description, remedy))
            })
            .collect();

        Self { entries }
    }

    /// Index from explicit entries; keys missing here resolve to nothing
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (DiseaseKey, DiagnosticEntry)>,
    {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_key(|(key, _)| *key);
        entries.dedup_by_key(|(key, _)| *key);
        Self { entries }
    }

    pub fn get(&self, key: DiseaseKey) -> Option<&DiagnosticEntry> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entry)| entry)
    }

    /// Resolve a raw disease segment to its key and entry
    pub fn resolve(&self, disease: &str) -> Option<(DiseaseKey, &DiagnosticEntry)> {
        let key = DiseaseKey::resolve(disease)?;
        self.get(key).map(|entry| (key, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key definition order
    pub fn iter(&self) -> impl Iterator<Item = (DiseaseKey, &DiagnosticEntry)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }
}

impl Default for DiagnosticIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

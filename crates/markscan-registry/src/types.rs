//! Wire types for the trademark-search endpoint.
//!
//! Records are deliberately loose: the registry attaches many scalar fields
//! beyond the ones this tool summarizes, and all of them are carried through
//! unchanged in [`RegistryRecord::extra`]. Absent nested structures are
//! tolerated everywhere.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One page of search results as returned by the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub trademarks: Vec<RegistryRecord>,
    /// Server-reported total page count. A missing field defaults to 1 so the
    /// first page is treated as the only page.
    #[serde(rename = "totalPages", default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

/// The raw nested result for one trademark.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryRecord {
    #[serde(rename = "wordMarkSpecification")]
    pub word_mark_specification: Option<WordMarkSpecification>,
    #[serde(default)]
    pub applicants: Vec<Party>,
    #[serde(default)]
    pub representatives: Vec<Party>,
    #[serde(rename = "niceClasses", default)]
    pub nice_classes: Vec<u32>,
    /// All other record fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistryRecord {
    /// Character length of the verbal element; 0 when the record has none.
    #[must_use]
    pub fn verbal_element_len(&self) -> usize {
        self.word_mark_specification
            .as_ref()
            .and_then(|spec| spec.verbal_element.as_deref())
            .map_or(0, |verbal| verbal.chars().count())
    }
}

/// The word-mark component of a record.
#[derive(Debug, Clone, Deserialize)]
pub struct WordMarkSpecification {
    #[serde(rename = "verbalElement")]
    pub verbal_element: Option<String>,
}

/// An applicant or representative entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Party {
    pub name: Option<String>,
}

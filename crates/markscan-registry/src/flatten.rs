//! Collapses nested registry records into flat tabular rows.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::types::{Party, RegistryRecord};

/// Column names always present in a flattened row, in display order.
pub const FIXED_COLUMNS: [&str; 4] = [
    "verbalElement",
    "applicant_name",
    "representative_name",
    "nice_classes",
];

/// A registry record with nested structures collapsed to scalar summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    pub verbal_element: Option<String>,
    /// Comma-joined applicant names; `None` when the record listed none.
    pub applicant_name: Option<String>,
    /// Comma-joined representative names; `None` when the record listed none.
    pub representative_name: Option<String>,
    /// Comma-joined Nice class numbers; empty when the record listed none.
    pub nice_classes: String,
    /// Every other original field, unchanged.
    pub extra: Map<String, Value>,
}

impl FlatRow {
    /// Renders a named column as display text. Unknown names resolve against
    /// the passthrough fields; anything absent renders as an empty string.
    #[must_use]
    pub fn column_value(&self, column: &str) -> String {
        match column {
            "verbalElement" => self.verbal_element.clone().unwrap_or_default(),
            "applicant_name" => self.applicant_name.clone().unwrap_or_default(),
            "representative_name" => self.representative_name.clone().unwrap_or_default(),
            "nice_classes" => self.nice_classes.clone(),
            other => self.extra.get(other).map(render_scalar).unwrap_or_default(),
        }
    }
}

/// Flattens one record. Total: missing nested structures become absent or
/// empty values, never errors.
#[must_use]
pub fn flatten_record(record: RegistryRecord) -> FlatRow {
    let RegistryRecord {
        word_mark_specification,
        applicants,
        representatives,
        nice_classes,
        extra,
    } = record;

    FlatRow {
        verbal_element: word_mark_specification.and_then(|spec| spec.verbal_element),
        applicant_name: join_names(&applicants),
        representative_name: join_names(&representatives),
        nice_classes: nice_classes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        extra,
    }
}

/// The full column set for a batch of rows: the fixed columns followed by the
/// union of all passthrough field names, sorted.
#[must_use]
pub fn column_names(rows: &[FlatRow]) -> Vec<String> {
    let extra_names: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.extra.keys().map(String::as_str))
        .collect();

    FIXED_COLUMNS
        .iter()
        .copied()
        .chain(extra_names)
        .map(str::to_owned)
        .collect()
}

fn join_names(parties: &[Party]) -> Option<String> {
    if parties.is_empty() {
        return None;
    }
    let joined = parties
        .iter()
        .map(|party| party.name.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(", ");
    Some(joined)
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

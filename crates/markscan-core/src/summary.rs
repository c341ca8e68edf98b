//! Summary-table ordering.

/// One usable row of the final summary: a pattern's query and how many
/// records matched it. Failed patterns never become summary entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub query: String,
    pub match_count: usize,
}

/// Sorts summary entries by match count, highest first.
///
/// The sort is stable: entries with equal counts keep the order in which the
/// patterns were originally listed.
#[must_use]
pub fn sort_by_count_desc(mut entries: Vec<SummaryEntry>) -> Vec<SummaryEntry> {
    entries.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    entries
}

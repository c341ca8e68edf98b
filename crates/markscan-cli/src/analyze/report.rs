//! Console rendering: summary table, bar chart, per-pattern detail listings.

use markscan_core::{sort_by_count_desc, SummaryEntry, VERBAL_ELEMENT_FIELD};

use super::PatternOutcome;

/// Widest bar drawn in the chart, in characters.
const MAX_BAR_WIDTH: usize = 40;

/// Strips the fixed verbal-element prefix for display. Queries over other
/// fields are shown unchanged; only the rendering is affected.
fn display_name(query: &str) -> &str {
    query
        .strip_prefix(VERBAL_ELEMENT_FIELD)
        .and_then(|rest| rest.strip_prefix("=="))
        .unwrap_or(query)
}

/// Usable outcomes as summary entries, sorted by match count descending.
fn summary_entries(outcomes: &[PatternOutcome]) -> Vec<SummaryEntry> {
    let entries = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            PatternOutcome::Counted { query, rows } => Some(SummaryEntry {
                query: query.clone(),
                match_count: rows.len(),
            }),
            PatternOutcome::Failed { .. } => None,
        })
        .collect();
    sort_by_count_desc(entries)
}

fn name_column_width(entries: &[SummaryEntry]) -> usize {
    entries
        .iter()
        .map(|entry| display_name(&entry.query).chars().count())
        .max()
        .unwrap_or(0)
        .max("PATTERN".len())
}

pub(super) fn print_summary(outcomes: &[PatternOutcome]) {
    let entries = summary_entries(outcomes);

    println!("Registered marks per pattern");
    if entries.is_empty() {
        println!("no usable results");
    } else {
        let width = name_column_width(&entries);
        println!("{:<width$}  {:>7}", "PATTERN", "MATCHES");
        for entry in &entries {
            println!(
                "{:<width$}  {:>7}",
                display_name(&entry.query),
                entry.match_count
            );
        }
    }

    let failures: Vec<(&str, &str)> = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            PatternOutcome::Failed { query, error } => Some((query.as_str(), error.as_str())),
            PatternOutcome::Counted { .. } => None,
        })
        .collect();
    if !failures.is_empty() {
        println!();
        println!("Patterns excluded after fetch errors:");
        for (query, error) in failures {
            println!("  {query}: {error}");
        }
    }
}

pub(super) fn print_chart(outcomes: &[PatternOutcome]) {
    let entries = summary_entries(outcomes);
    if entries.is_empty() {
        return;
    }

    let max_count = entries
        .iter()
        .map(|entry| entry.match_count)
        .max()
        .unwrap_or(0);
    let width = name_column_width(&entries);

    println!();
    for entry in &entries {
        let bar = "#".repeat(bar_width(entry.match_count, max_count, MAX_BAR_WIDTH));
        println!(
            "{:>width$} | {bar} {}",
            display_name(&entry.query),
            entry.match_count
        );
    }
}

pub(super) fn print_details(outcomes: &[PatternOutcome]) {
    for outcome in outcomes {
        let PatternOutcome::Counted { query, rows } = outcome else {
            continue;
        };
        if rows.is_empty() {
            continue;
        }

        println!();
        println!("Results for pattern {query} ({} matches)", rows.len());
        println!(
            "{:<26}{:<34}{:<34}NICE CLASSES",
            "VERBAL ELEMENT", "APPLICANT", "REPRESENTATIVE"
        );
        for row in rows {
            println!(
                "{:<26}{:<34}{:<34}{}",
                truncate(row.column_value("verbalElement"), 24),
                truncate(row.column_value("applicant_name"), 32),
                truncate(row.column_value("representative_name"), 32),
                row.nice_classes
            );
        }
    }
}

/// Scales a count to a bar length; any non-zero count draws at least one mark.
fn bar_width(count: usize, max_count: usize, max_width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    (count * max_width).div_ceil(max_count).min(max_width)
}

fn truncate(value: String, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        format!("{}...", value.chars().take(max_chars).collect::<String>())
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(query: &str, count: usize) -> PatternOutcome {
        PatternOutcome::Counted {
            query: query.to_owned(),
            rows: std::iter::repeat_with(|| markscan_registry::FlatRow {
                verbal_element: None,
                applicant_name: None,
                representative_name: None,
                nice_classes: String::new(),
                extra: serde_json::Map::new(),
            })
            .take(count)
            .collect(),
        }
    }

    #[test]
    fn display_name_strips_verbal_element_prefix() {
        assert_eq!(
            display_name("wordMarkSpecification.verbalElement==PAX*"),
            "PAX*"
        );
        assert_eq!(
            display_name(r#"wordMarkSpecification.verbalElement=="PAXON""#),
            r#""PAXON""#
        );
    }

    #[test]
    fn display_name_keeps_other_queries_unchanged() {
        assert_eq!(display_name("status==REGISTERED"), "status==REGISTERED");
    }

    #[test]
    fn summary_entries_exclude_failures_and_sort_descending() {
        let outcomes = vec![
            counted("p1", 3),
            PatternOutcome::Failed {
                query: "p-broken".to_owned(),
                error: "registry returned status 500".to_owned(),
            },
            counted("p2", 10),
            counted("p3", 3),
        ];
        let entries = summary_entries(&outcomes);
        let order: Vec<&str> = entries.iter().map(|e| e.query.as_str()).collect();
        assert_eq!(order, vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn bar_width_scales_and_keeps_nonzero_counts_visible() {
        assert_eq!(bar_width(0, 10, 40), 0);
        assert_eq!(bar_width(10, 10, 40), 40);
        assert_eq!(bar_width(5, 10, 40), 20);
        assert_eq!(bar_width(1, 1000, 40), 1);
    }

    #[test]
    fn bar_width_handles_all_zero_counts() {
        assert_eq!(bar_width(0, 0, 40), 0);
    }

    #[test]
    fn truncate_appends_ellipsis_only_when_needed() {
        assert_eq!(truncate("short".to_owned(), 10), "short");
        assert_eq!(truncate("abcdefghij".to_owned(), 5), "abcde...");
    }
}

//! Wildcard search-pattern generation for a brand name.
//!
//! The registry's query language matches the verbal element of a word mark
//! with `*` as a zero-or-more-characters wildcard. `generate_patterns` derives
//! a fixed family of near-miss patterns from a brand name;
//! `parse_extra_patterns` accepts user-supplied candidates, one per line.

use serde::Serialize;

/// Query-language field holding the textual component of a word mark.
pub const VERBAL_ELEMENT_FIELD: &str = "wordMarkSpecification.verbalElement";

/// One registry query expression, optionally carrying the exact verbal-element
/// character length that fetched records must have to count as a match.
///
/// The length is only present for patterns parsed from a `?`-template line:
/// `?` is a single-character placeholder, but the query language only has the
/// multi-character `*`, so the translated query over-matches and the length is
/// used to post-filter results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_length: Option<usize>,
}

impl Pattern {
    fn new(query: String) -> Self {
        Self {
            query,
            expected_length: None,
        }
    }

    fn with_expected_length(query: String, expected_length: usize) -> Self {
        Self {
            query,
            expected_length: Some(expected_length),
        }
    }
}

/// Derives the fixed pattern family for a brand name, in display order:
///
/// 1. the exact (quoted) match;
/// 2. a stem match with the last two characters dropped (brands longer than
///    two characters);
/// 3. one pattern per internal split point, with a wildcard inserted between
///    prefix and suffix;
/// 4. an any-prefix match with the first character dropped (brands longer
///    than three characters);
/// 5. a single pattern with a wildcard between every adjacent character pair.
///
/// Duplicates are kept (a two-character brand yields `A*B` twice). All
/// slicing is on `char` boundaries, so non-ASCII brand names are safe.
#[must_use]
pub fn generate_patterns(brand: &str) -> Vec<Pattern> {
    let chars: Vec<char> = brand.chars().collect();
    let n = chars.len();

    let mut patterns = vec![Pattern::new(format!(
        "{VERBAL_ELEMENT_FIELD}==\"{brand}\""
    ))];

    if n > 2 {
        let stem: String = chars[..n - 2].iter().collect();
        patterns.push(Pattern::new(format!("{VERBAL_ELEMENT_FIELD}=={stem}*")));
    }

    for i in 1..n {
        let prefix: String = chars[..i].iter().collect();
        let suffix: String = chars[i..].iter().collect();
        patterns.push(Pattern::new(format!(
            "{VERBAL_ELEMENT_FIELD}=={prefix}*{suffix}"
        )));
    }

    if n > 3 {
        let rest: String = chars[1..].iter().collect();
        patterns.push(Pattern::new(format!("{VERBAL_ELEMENT_FIELD}==*{rest}")));
    }

    let interleaved = chars
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("*");
    patterns.push(Pattern::new(format!(
        "{VERBAL_ELEMENT_FIELD}=={interleaved}"
    )));

    patterns
}

/// Parses user-supplied extra patterns, one candidate per line.
///
/// Lines are trimmed; blank lines are skipped. A line containing `?` is
/// treated as a verbal-element template: every `?` becomes `*`, the line is
/// wrapped as a verbal-element query, and the template's character count is
/// recorded as the expected length. Any other line is passed through verbatim
/// as a full query expression (it may reference any field).
#[must_use]
pub fn parse_extra_patterns(text: &str) -> Vec<Pattern> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.contains('?') {
                let expected_length = line.chars().count();
                let wildcarded = line.replace('?', "*");
                Pattern::with_expected_length(
                    format!("{VERBAL_ELEMENT_FIELD}=={wildcarded}"),
                    expected_length,
                )
            } else {
                Pattern::new(line.to_owned())
            }
        })
        .collect()
}

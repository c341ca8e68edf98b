//! Server-side filter composition.
//!
//! A [`FilterSelection`] is built once per run from the caller's explicit
//! choices and applied to every base pattern. It is never read from ambient
//! state, so the fetch path stays independently testable.

use chrono::NaiveDate;

/// Optional constraints applied to every pattern of a run.
///
/// Vectors keep the caller's order (it is reflected verbatim in the composed
/// query). Empty vectors and `None` impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub mark_kinds: Vec<String>,
    pub mark_features: Vec<String>,
    pub mark_bases: Vec<String>,
    pub statuses: Vec<String>,
    /// Nice classification numbers (1–45); matched records must cover all of
    /// them.
    pub nice_classes: Vec<u8>,
    /// Lower bound (inclusive) on the registration date.
    pub registered_after: Option<NaiveDate>,
}

impl FilterSelection {
    /// Returns `true` when no constraint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mark_kinds.is_empty()
            && self.mark_features.is_empty()
            && self.mark_bases.is_empty()
            && self.statuses.is_empty()
            && self.nice_classes.is_empty()
            && self.registered_after.is_none()
    }

    /// Composes the conjunctive filter fragment, or `None` when no constraint
    /// is set.
    ///
    /// Each non-empty selection contributes one fragment; fragments are joined
    /// with `" and "`:
    ///
    /// ```text
    /// (markKind==INDIVIDUAL or markKind==EU_COLLECTIVE) and niceClasses=all=(9,42)
    /// ```
    #[must_use]
    pub fn compose(&self) -> Option<String> {
        let mut fragments = Vec::new();

        if !self.mark_kinds.is_empty() {
            fragments.push(or_group("markKind", &self.mark_kinds));
        }
        if !self.mark_features.is_empty() {
            fragments.push(or_group("markFeature", &self.mark_features));
        }
        if !self.mark_bases.is_empty() {
            fragments.push(or_group("markBasis", &self.mark_bases));
        }
        if !self.statuses.is_empty() {
            fragments.push(or_group("status", &self.statuses));
        }
        if !self.nice_classes.is_empty() {
            let values = self
                .nice_classes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            fragments.push(format!("niceClasses=all=({values})"));
        }
        if let Some(date) = self.registered_after {
            fragments.push(format!("registrationDate>={}", date.format("%Y-%m-%d")));
        }

        if fragments.is_empty() {
            None
        } else {
            Some(fragments.join(" and "))
        }
    }

    /// Appends the composed fragment to a base pattern, or returns the base
    /// unchanged when no constraint is set.
    #[must_use]
    pub fn apply(&self, base: &str) -> String {
        match self.compose() {
            Some(fragment) => format!("{base} and {fragment}"),
            None => base.to_owned(),
        }
    }
}

fn or_group(field: &str, values: &[String]) -> String {
    let joined = values
        .iter()
        .map(|value| format!("{field}=={value}"))
        .collect::<Vec<_>>()
        .join(" or ");
    format!("({joined})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn empty_selection_composes_to_none() {
        let selection = FilterSelection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.compose(), None);
    }

    #[test]
    fn apply_without_constraints_returns_base_unchanged() {
        let selection = FilterSelection::default();
        assert_eq!(
            selection.apply("wordMarkSpecification.verbalElement==PAX*"),
            "wordMarkSpecification.verbalElement==PAX*"
        );
    }

    #[test]
    fn mark_kinds_and_nice_classes_compose_in_given_order() {
        let selection = FilterSelection {
            mark_kinds: strings(&["INDIVIDUAL", "EU_COLLECTIVE"]),
            nice_classes: vec![9, 42],
            ..FilterSelection::default()
        };
        assert_eq!(
            selection.compose().as_deref(),
            Some("(markKind==INDIVIDUAL or markKind==EU_COLLECTIVE) and niceClasses=all=(9,42)")
        );
    }

    #[test]
    fn single_value_group_still_parenthesized() {
        let selection = FilterSelection {
            statuses: strings(&["REGISTERED"]),
            ..FilterSelection::default()
        };
        assert_eq!(selection.compose().as_deref(), Some("(status==REGISTERED)"));
    }

    #[test]
    fn date_bound_composes_as_iso_date() {
        let selection = FilterSelection {
            registered_after: NaiveDate::from_ymd_opt(2020, 6, 1),
            ..FilterSelection::default()
        };
        assert_eq!(
            selection.compose().as_deref(),
            Some("registrationDate>=2020-06-01")
        );
    }

    #[test]
    fn all_fragments_join_in_fixed_field_order() {
        let selection = FilterSelection {
            mark_kinds: strings(&["INDIVIDUAL"]),
            mark_features: strings(&["WORD", "FIGURATIVE"]),
            mark_bases: strings(&["EU_TRADEMARK"]),
            statuses: strings(&["REGISTERED"]),
            nice_classes: vec![5],
            registered_after: NaiveDate::from_ymd_opt(2019, 1, 31),
        };
        assert_eq!(
            selection.compose().as_deref(),
            Some(
                "(markKind==INDIVIDUAL) and (markFeature==WORD or markFeature==FIGURATIVE) \
                 and (markBasis==EU_TRADEMARK) and (status==REGISTERED) \
                 and niceClasses=all=(5) and registrationDate>=2019-01-31"
            )
        );
    }

    #[test]
    fn apply_joins_base_and_fragment_with_and() {
        let selection = FilterSelection {
            nice_classes: vec![9],
            ..FilterSelection::default()
        };
        assert_eq!(
            selection.apply("wordMarkSpecification.verbalElement==*AXON"),
            "wordMarkSpecification.verbalElement==*AXON and niceClasses=all=(9)"
        );
    }
}

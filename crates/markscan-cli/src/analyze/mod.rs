//! The `analyze` command: pattern generation, per-pattern fetch, and
//! reporting for one brand.
//!
//! Patterns are processed strictly sequentially, one page at a time. A
//! pattern whose fetch fails is reported and excluded from the summary, but
//! never aborts the remaining patterns.

mod export;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;

use markscan_core::{generate_patterns, parse_extra_patterns, FilterSelection, Pattern};
use markscan_registry::{flatten_record, FlatRow, RegistryClient};

#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Brand name to analyze
    pub brand: String,

    /// Bearer token for the registry API
    #[arg(long, env = "MARKSCAN_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// File with extra query patterns, one candidate per line
    #[arg(long, value_name = "FILE")]
    pub extra_patterns: Option<PathBuf>,

    /// Restrict matches to these mark kinds (repeatable)
    #[arg(long = "mark-kind", value_name = "KIND")]
    pub mark_kinds: Vec<String>,

    /// Restrict matches to these mark features (repeatable)
    #[arg(long = "mark-feature", value_name = "FEATURE")]
    pub mark_features: Vec<String>,

    /// Restrict matches to these mark bases (repeatable)
    #[arg(long = "mark-basis", value_name = "BASIS")]
    pub mark_bases: Vec<String>,

    /// Restrict matches to these statuses (repeatable)
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,

    /// Records must cover all of these Nice classes (repeatable, 1-45)
    #[arg(
        long = "nice-class",
        value_name = "CLASS",
        value_parser = clap::value_parser!(u8).range(1..=45)
    )]
    pub nice_classes: Vec<u8>,

    /// Only count marks registered on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub registered_after: Option<NaiveDate>,

    /// Print the matching records for every non-empty pattern
    #[arg(long)]
    pub details: bool,

    /// Write one spreadsheet per non-empty pattern into this directory
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

/// Outcome of one pattern's fetch.
///
/// `query` is the base pattern, without the shared filter fragment; that is
/// what the report and exports are keyed on.
#[derive(Debug)]
pub enum PatternOutcome {
    Counted { query: String, rows: Vec<FlatRow> },
    Failed { query: String, error: String },
}

/// Runs the full analysis for one brand.
///
/// # Errors
///
/// Returns an error for an empty brand or token, unreadable extra-pattern
/// file, missing configuration, or a failed export. Per-pattern fetch
/// failures are recorded in the report instead of propagated.
pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let brand = args.brand.trim().to_owned();
    anyhow::ensure!(!brand.is_empty(), "brand must not be empty");

    let token = args
        .access_token
        .as_deref()
        .map_or("", str::trim)
        .to_owned();
    anyhow::ensure!(
        !token.is_empty(),
        "access token must not be empty; pass --access-token or set MARKSCAN_ACCESS_TOKEN"
    );

    let config = markscan_core::load_app_config().context("loading configuration")?;

    let mut patterns = generate_patterns(&brand);
    if let Some(path) = &args.extra_patterns {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading extra patterns from {}", path.display()))?;
        patterns.extend(parse_extra_patterns(&text));
    }

    let filters = FilterSelection {
        mark_kinds: args.mark_kinds,
        mark_features: args.mark_features,
        mark_bases: args.mark_bases,
        statuses: args.statuses,
        nice_classes: args.nice_classes,
        registered_after: args.registered_after,
    };

    let client = RegistryClient::with_base_url(
        &config.client_id,
        &token,
        config.request_timeout_secs,
        &config.base_url,
    )?;

    tracing::info!(brand = %brand, patterns = patterns.len(), "starting analysis");
    let outcomes = fetch_outcomes(&client, &filters, &patterns).await;

    report::print_summary(&outcomes);
    report::print_chart(&outcomes);
    if args.details {
        report::print_details(&outcomes);
    }
    if let Some(dir) = &args.export_dir {
        export::write_workbooks(dir, &brand, &outcomes)?;
    }

    Ok(())
}

/// Fetches every pattern in list order, one at a time.
async fn fetch_outcomes(
    client: &RegistryClient,
    filters: &FilterSelection,
    patterns: &[Pattern],
) -> Vec<PatternOutcome> {
    let mut outcomes = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let query = filters.apply(&pattern.query);
        tracing::debug!(query = %query, "running registry query");
        match client.fetch_all(&query, pattern.expected_length).await {
            Ok(records) => {
                let rows: Vec<FlatRow> = records.into_iter().map(flatten_record).collect();
                outcomes.push(PatternOutcome::Counted {
                    query: pattern.query.clone(),
                    rows,
                });
            }
            Err(e) => {
                tracing::error!(query = %pattern.query, error = %e, "pattern fetch failed");
                eprintln!("error for pattern {}: {e}", pattern.query);
                outcomes.push(PatternOutcome::Failed {
                    query: pattern.query.clone(),
                    error: e.to_string(),
                });
            }
        }
    }
    outcomes
}

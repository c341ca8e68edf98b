//! Spreadsheet export: one workbook per pattern with at least one result.

use std::path::Path;

use anyhow::Context;
use rust_xlsxwriter::{Format, Workbook};

use markscan_registry::column_names;

use super::PatternOutcome;

/// Writes one `.xlsx` per non-empty pattern into `dir`, creating the
/// directory if needed.
///
/// Columns are the flattened summary columns followed by the record's
/// passthrough fields. File names are deterministic per brand and pattern.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a workbook cannot
/// be written.
pub(super) fn write_workbooks(
    dir: &Path,
    brand: &str,
    outcomes: &[PatternOutcome],
) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating export directory {}", dir.display()))?;

    for outcome in outcomes {
        let PatternOutcome::Counted { query, rows } = outcome else {
            continue;
        };
        if rows.is_empty() {
            continue;
        }

        let path = dir.join(workbook_file_name(brand, query));
        let columns = column_names(rows);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        for (name, col) in columns.iter().zip(0u16..) {
            worksheet.write_string_with_format(0, col, name.as_str(), &header_format)?;
        }
        for (row, row_idx) in rows.iter().zip(1u32..) {
            for (name, col) in columns.iter().zip(0u16..) {
                worksheet.write_string(row_idx, col, row.column_value(name))?;
            }
        }

        workbook
            .save(&path)
            .with_context(|| format!("writing spreadsheet {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

/// Deterministic workbook name for a brand and base pattern. Wildcard markers
/// become `STAR`; any remaining character unsafe in a file name is dropped.
fn workbook_file_name(brand: &str, query: &str) -> String {
    let stem = format!("results_{brand}_{}", query.replace('*', "STAR"));
    let safe: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '=' | '(' | ')' | '-' | '_'))
        .collect();
    format!("{safe}.xlsx")
}

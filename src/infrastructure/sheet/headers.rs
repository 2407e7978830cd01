// ============================================================
// HEADER ROW HANDLING
// ============================================================
// Turn a raw header row into unique column names and assemble rows

use std::collections::HashSet;

use crate::domain::dataset::{CellValue, Row};

const EMPTY_HEADER: &str = "__EMPTY";

/// Make header names usable as row keys.
///
/// Blank headers become `__EMPTY`, repeated names get `_1`, `_2`, ...
/// suffixes, skipping any suffix that is already taken.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut headers = Vec::new();

    for header in raw {
        let trimmed = header.as_ref().trim();
        let base = if trimmed.is_empty() { EMPTY_HEADER } else { trimmed };

        let mut name = base.to_string();
        let mut counter = 1;
        while seen.contains(&name) {
            name = format!("{}_{}", base, counter);
            counter += 1;
        }

        seen.insert(name.clone());
        headers.push(name);
    }

    headers
}

/// Assemble a row from header names and decoded cells.
///
/// Empty cells (`None`) are left out so they count as missing. Cells past
/// the last header are dropped. Returns `None` when no cell is defined.
pub fn build_row<I>(headers: &[String], cells: I) -> Option<Row>
where
    I: IntoIterator<Item = Option<CellValue>>,
{
    let mut row = Row::new();
    for (header, cell) in headers.iter().zip(cells) {
        if let Some(value) = cell {
            row.insert(header.clone(), value);
        }
    }

    if row.is_empty() {
        None
    } else {
        Some(row)
    }
}

// src/export/json_csv.rs

use crate::core::grouping::GroupedEntries;
use crate::errors::AppResult;
use crate::export::{ActivityExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the grouped index, pretty-printed.
pub(crate) fn export_json(entries: &GroupedEntries, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header from serde field names).
pub(crate) fn export_csv(rows: &[ActivityExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

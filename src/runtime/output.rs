use crate::types::EnrichedRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one JSON object per row.
pub fn write_rows<W: Write>(rows: &[EnrichedRow], writer: W) -> Result<(), String> {
    let mut writer = BufWriter::new(writer);
    for row in rows {
        serde_json::to_writer(&mut writer, row)
            .map_err(|e| format!("Failed to serialize row {}: {e}", row.code))?;
        writer
            .write_all(b"\n")
            .map_err(|e| format!("Failed to write row {}: {e}", row.code))?;
    }
    writer
        .flush()
        .map_err(|e| format!("Failed to flush rows: {e}"))
}

/// Writes the whole table to `path`, or nothing at all if serialization fails.
pub fn write_rows_to_file(rows: &[EnrichedRow], path: &Path) -> Result<(), String> {
    let mut buffer = Vec::new();
    write_rows(rows, &mut buffer)?;
    let mut file =
        File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    file.write_all(&buffer)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

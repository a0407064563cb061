use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::MaterialRecord;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Any malformed row fails the whole load; no partial catalogs.
    #[error("bad catalog format: {0}")]
    BadFormat(String),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write catalog: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode catalog row: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
#[error("a material named '{0}' already exists")]
pub struct DuplicateNameError(pub String);

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Load the full catalog from a header-delimited CSV file.
///
/// All-or-nothing: the first row whose numeric fields fail to parse (or a
/// missing column) aborts the load with [`LoadError::BadFormat`].
pub fn load(path: &Path) -> Result<Vec<MaterialRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| LoadError::BadFormat(e.to_string()))?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<MaterialRecord>().enumerate() {
        let record = result.map_err(|e| LoadError::BadFormat(format!("row {row_no}: {e}")))?;
        records.push(record);
    }

    log::info!("Loaded {} materials from {}", records.len(), path.display());
    Ok(records)
}

/// Rewrite the catalog file with the canonical column order.
///
/// Writes a sibling temp file first and renames it over the target, so a
/// failed write never leaves a truncated catalog behind.
pub fn save(path: &Path, records: &[MaterialRecord]) -> Result<(), SaveError> {
    let tmp = sibling_tmp_path(path);
    if let Err(e) = write_csv(&tmp, records) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path)?;
    log::info!("Saved {} materials to {}", records.len(), path.display());
    Ok(())
}

/// Write records to an arbitrary path (used by both `save` and the export
/// action) with the same column layout as the backing file.
pub fn write_csv(path: &Path, records: &[MaterialRecord]) -> Result<(), SaveError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

// ---------------------------------------------------------------------------
// Append
// ---------------------------------------------------------------------------

/// Append a record to the in-memory catalog, rejecting names that collide
/// case-insensitively with an existing entry. Insertion order is preserved;
/// on error the catalog is untouched.
pub fn append(
    records: &mut Vec<MaterialRecord>,
    new_record: MaterialRecord,
) -> Result<(), DuplicateNameError> {
    let new_name = new_record.name.to_lowercase();
    if records.iter().any(|r| r.name.to_lowercase() == new_name) {
        return Err(DuplicateNameError(new_record.name));
    }
    records.push(new_record);
    Ok(())
}

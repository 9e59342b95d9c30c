use crate::company::CompanyRecord;
use crate::error::{JobBankError, Result};
use std::fs;
use std::path::Path;

/// Writes the record as pretty-printed JSON (two-space indent, non-ASCII left as is).
///
/// This is the canonical export: reading the file back with `serde_json` yields a record equal
/// to the one written.
pub fn write_json(record: &CompanyRecord, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json).map_err(|e| JobBankError::file(path, e))
}

use addrbook_core::{Directory, Record, RecordDto};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a JSON array of contacts into a fresh directory.
///
/// Every entry goes through the validating constructors; the first invalid entry aborts
/// the load. Later entries with a repeated name replace earlier ones.
pub fn load_directory(path: &Path) -> Result<Directory> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read contacts file {}", path.display()))?;
    let directory = parse_directory(&contents)
        .with_context(|| format!("load contacts file {}", path.display()))?;
    debug!(path = %path.display(), records = directory.len(), "contacts loaded");
    Ok(directory)
}

pub fn parse_directory(contents: &str) -> Result<Directory> {
    let entries: Vec<RecordDto> = serde_json::from_str(contents)?;
    let mut directory = Directory::new();
    for (idx, entry) in entries.into_iter().enumerate() {
        let label = format!("contact #{} ({:?})", idx + 1, entry.name);
        let record = Record::try_from(entry).with_context(|| label)?;
        directory.add_record(record);
    }
    Ok(directory)
}

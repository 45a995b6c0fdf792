//! Instance enumeration shared by both transports
//!
//! Both namespaces (the socket directory and `\\.\pipe\`) can be read as a
//! directory; only the mapping from entry name to [`InstanceId`] differs.

use std::io;
use std::path::Path;

/// Whether a namespace entry names an instance
///
/// The bare prefix itself is not an instance.
pub fn matches_prefix(name: &str, prefix: &str) -> bool {
    name.len() > prefix.len() && name.starts_with(prefix)
}

/// List entry names under `dir` that start with `prefix`
///
/// Order is whatever the directory yields. Names that are not valid UTF-8 are
/// skipped since they cannot be addressed as an instance id.
pub async fn scan(dir: &Path, prefix: &str) -> io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!(entry = ?name, "Skipping non UTF-8 entry");
            continue;
        };
        if matches_prefix(name, prefix) {
            names.push(name.to_string());
        }
    }

    tracing::debug!(dir = %dir.display(), count = names.len(), "Scanned instance namespace");
    Ok(names)
}

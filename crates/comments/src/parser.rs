//! Loading comment datasets from JSON documents.
//!
//! The expected document is a JSON array of objects. Entries that are not
//! objects (nulls, bare strings, numbers) cannot be comments; they are
//! skipped and counted in [`LoadedComments::skipped`] rather than failing
//! the whole load.

use crate::error::{LoadError, Result};
use crate::types::Comment;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Comments decoded from one document.
#[derive(Debug, Clone, Default)]
pub struct LoadedComments {
    pub comments: Vec<Comment>,
    /// Array entries that were not JSON objects
    pub skipped: usize,
}

/// Parse a JSON document held in memory.
pub fn parse_comments(json: &str) -> Result<LoadedComments> {
    let document: Value = serde_json::from_str(json)?;
    from_document(document)
}

/// Parse a JSON document from any reader.
pub fn read_comments<R: Read>(reader: R) -> Result<LoadedComments> {
    let document: Value = serde_json::from_reader(reader)?;
    from_document(document)
}

/// Load a JSON dataset file.
pub fn load_from_file(path: &Path) -> Result<LoadedComments> {
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::IoError(err),
    })?;

    let loaded = read_comments(BufReader::new(file))?;
    tracing::info!(
        "Loaded {} comments from {} ({} skipped)",
        loaded.comments.len(),
        path.display(),
        loaded.skipped
    );
    Ok(loaded)
}

fn from_document(document: Value) -> Result<LoadedComments> {
    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(LoadError::NotAnArray {
                found: json_kind(&other).to_string(),
            });
        }
    };

    let mut loaded = LoadedComments::default();
    for (idx, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            tracing::debug!("Skipping entry {}: {} is not a comment", idx, json_kind(&entry));
            loaded.skipped += 1;
            continue;
        }
        // Field decoding is lenient, so an object always yields a comment
        match serde_json::from_value::<Comment>(entry) {
            Ok(comment) => loaded.comments.push(comment),
            Err(err) => {
                tracing::debug!("Skipping entry {}: {}", idx, err);
                loaded.skipped += 1;
            }
        }
    }
    Ok(loaded)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

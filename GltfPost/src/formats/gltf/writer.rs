//! glTF file writing

use super::document::GltfDocument;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Write a glTF document to disk
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_gltf<P: AsRef<Path>>(doc: &GltfDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    tracing::info!("Writing output file: {}", path.display());

    let json = serialize_gltf(doc)?;
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a glTF document to JSON with two-space indentation
///
/// Key order is the order the keys were read in (or inserted).
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_gltf(doc: &GltfDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc.root())?)
}

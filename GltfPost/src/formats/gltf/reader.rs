//! glTF file reading

use super::document::GltfDocument;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a `.gltf` file from disk
///
/// # Errors
/// Returns an error if the file cannot be read, has invalid JSON, or its
/// root is not an object.
pub fn read_gltf<P: AsRef<Path>>(path: P) -> Result<GltfDocument> {
    let path = path.as_ref();
    tracing::info!("Reading input file: {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_gltf(&content)
}

/// Parse a glTF document from a JSON string
///
/// # Errors
/// Returns an error if the JSON is malformed or the root is not an object.
pub fn parse_gltf(content: &str) -> Result<GltfDocument> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    GltfDocument::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(parse_gltf("{ \"asset\": "), Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_rejects_array_root() {
        assert!(matches!(parse_gltf("[]"), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.gltf");
        match read_gltf(&missing) {
            Err(Error::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}

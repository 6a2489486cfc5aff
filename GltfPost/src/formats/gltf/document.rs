//! glTF JSON document model
//!
//! The document is kept as an ordered JSON tree so every key the
//! post-processor does not understand is written back untouched. Typed
//! access exists only for the handful of fields the transforms touch:
//! `scenes[0].nodes`, `nodes[]` and `materials[]`.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// A parsed glTF 2.0 JSON document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GltfDocument {
    root: Map<String, Value>,
}

impl GltfDocument {
    /// Wrap a JSON value; the root must be an object.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(Error::malformed("", "a JSON object at the document root")),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// The top-level object, including keys the post-processor ignores.
    #[must_use]
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.root
    }

    // ==================== Scenes ====================

    /// The first entry of `scenes`, if it is a usable scene.
    ///
    /// A missing, `null` or non-array `scenes`, an empty list, or a first
    /// entry that is not an object all count as "no scene".
    #[must_use]
    pub fn first_scene(&self) -> Option<&Map<String, Value>> {
        self.root
            .get("scenes")
            .and_then(Value::as_array)
            .and_then(|scenes| scenes.first())
            .and_then(Value::as_object)
    }

    pub fn first_scene_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.root
            .get_mut("scenes")
            .and_then(Value::as_array_mut)
            .and_then(|scenes| scenes.first_mut())
            .and_then(Value::as_object_mut)
    }

    /// Top-level node indices of the first scene.
    ///
    /// `None` when there is no usable scene or its `nodes` is missing, `null`,
    /// or not an array. An entry of `nodes` that is not a node index is still
    /// an error.
    pub fn scene_roots(&self) -> Result<Option<Vec<usize>>> {
        let Some(nodes) = self
            .first_scene()
            .and_then(|scene| scene.get("nodes"))
            .and_then(Value::as_array)
        else {
            return Ok(None);
        };
        nodes
            .iter()
            .enumerate()
            .map(|(i, value)| node_index(value, &format!("/scenes/0/nodes/{i}")))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Replace the first scene's top-level node list.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the document has no scene to update.
    pub fn set_scene_roots(&mut self, roots: &[usize]) -> Result<()> {
        let scene = self
            .first_scene_mut()
            .ok_or_else(|| Error::malformed("/scenes/0", "a scene"))?;
        scene.insert("nodes".to_string(), index_array(roots));
        Ok(())
    }

    // ==================== Nodes ====================

    /// The global node array, if present.
    pub fn nodes(&self) -> Result<Option<&Vec<Value>>> {
        array_field(&self.root, "nodes", "")
    }

    pub fn nodes_mut(&mut self) -> Result<Option<&mut Vec<Value>>> {
        array_field_mut(&mut self.root, "nodes", "")
    }

    /// Number of entries in `nodes` (0 when the array is absent).
    pub fn node_count(&self) -> Result<usize> {
        Ok(self.nodes()?.map_or(0, Vec::len))
    }

    /// The node at `index` as an object.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `nodes` is missing, too short, or the
    /// entry is not an object.
    pub fn node_mut(&mut self, index: usize) -> Result<&mut Map<String, Value>> {
        let path = format!("/nodes/{index}");
        self.nodes_mut()?
            .and_then(|nodes| nodes.get_mut(index))
            .ok_or_else(|| Error::malformed(path.clone(), "an existing node"))?
            .as_object_mut()
            .ok_or_else(|| Error::malformed(path, "an object"))
    }

    /// Append a node and return its index.
    ///
    /// Existing indices are never renumbered, so the new node always lands
    /// at the previous length of the array.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `nodes` is missing or not an array.
    pub fn push_node(&mut self, node: Map<String, Value>) -> Result<usize> {
        let nodes = self
            .nodes_mut()?
            .ok_or_else(|| Error::malformed("/nodes", "an array"))?;
        nodes.push(Value::Object(node));
        Ok(nodes.len() - 1)
    }

    // ==================== Materials ====================

    /// The material array, if present.
    pub fn materials(&self) -> Result<Option<&Vec<Value>>> {
        array_field(&self.root, "materials", "")
    }

    pub fn materials_mut(&mut self) -> Result<Option<&mut Vec<Value>>> {
        array_field_mut(&mut self.root, "materials", "")
    }
}

impl TryFrom<Value> for GltfDocument {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<GltfDocument> for Value {
    fn from(doc: GltfDocument) -> Self {
        doc.into_value()
    }
}

// ==================== Traversal helpers ====================

/// Look up `key` in `map`, requiring an array when present.
pub(crate) fn array_field<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<&'a Vec<Value>>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(Error::malformed(format!("{parent}/{key}"), "an array")),
    }
}

pub(crate) fn array_field_mut<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<&'a mut Vec<Value>>> {
    match map.get_mut(key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(Error::malformed(format!("{parent}/{key}"), "an array")),
    }
}

/// Get the object stored under `key`, inserting `{}` first if it is absent.
pub(crate) fn object_entry<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<&'a mut Map<String, Value>> {
    map.entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| Error::malformed(format!("{parent}/{key}"), "an object"))
}

/// Parse a node reference (a non-negative integer).
pub(crate) fn node_index(value: &Value, path: &str) -> Result<usize> {
    value
        .as_u64()
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| Error::malformed(path, "a node index"))
}

pub(crate) fn index_array(indices: &[usize]) -> Value {
    Value::Array(indices.iter().copied().map(Value::from).collect())
}

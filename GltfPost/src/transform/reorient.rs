//! Z-up to Y-up scene reorientation
//!
//! Applies a 90° rotation about X to the first scene. A single top-level node
//! is rotated in place; several top-level nodes are wrapped under a new
//! rotated root so none of the existing nodes change.
//!
//! Reorienting is not idempotent: running it twice turns the scene 180°.
//! Callers that may see already-converted files must track that themselves.

use crate::error::{Error, Result};
use crate::formats::gltf::{GltfDocument, index_array};
use crate::math::{Quaternion, X_AXIS_90, compose};
use serde_json::{Map, Value};

/// Name given to the node inserted above several top-level nodes.
pub const REORIENTED_ROOT_NAME: &str = "ReorientedRoot";

/// What [`reorient_scene`] did to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum ReorientOutcome {
    /// No scene, or the first scene has no nodes. Nothing was changed.
    Skipped,
    /// The single top-level node was rotated.
    RotatedRoot {
        /// Index of the rotated node.
        node: usize,
        /// `true` if an existing rotation was composed with the fix,
        /// `false` if the rotation was set fresh.
        composed: bool,
        /// The rotation now stored on the node.
        rotation: Quaternion,
    },
    /// A new root was appended and the scene now points only at it.
    WrappedRoots {
        /// Index of the synthetic root.
        root: usize,
        /// The former top-level nodes, now children of `root`.
        children: Vec<usize>,
    },
}

impl ReorientOutcome {
    /// Whether the document was modified.
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, ReorientOutcome::Skipped)
    }
}

/// Rotate the first scene from Z-up to Y-up, in place.
///
/// An existing root rotation becomes `compose(existing, X_AXIS_90)`. That
/// operand order is kept exactly as the tool has always produced it; for
/// rotations that do not commute with X it is not the same as applying the
/// fix on the outside.
///
/// # Errors
/// Returns [`Error::Malformed`] if the scene references a node that does not
/// exist or the root's `rotation` is not four numbers. A missing, `null`,
/// or empty scene (or scene node list) is not an error.
pub fn reorient_scene(doc: &mut GltfDocument) -> Result<ReorientOutcome> {
    let roots = match doc.scene_roots()? {
        Some(roots) if !roots.is_empty() => roots,
        _ => {
            tracing::warn!("No valid scene or nodes found in the glTF file.");
            return Ok(ReorientOutcome::Skipped);
        }
    };

    if roots.len() == 1 {
        rotate_root(doc, roots[0])
    } else {
        wrap_roots(doc, roots)
    }
}

fn rotate_root(doc: &mut GltfDocument, index: usize) -> Result<ReorientOutcome> {
    let node = doc.node_mut(index)?;

    let (rotation, composed) = match node.get("rotation") {
        Some(existing) => {
            let existing = Quaternion::from_json(existing).ok_or_else(|| {
                Error::malformed(format!("/nodes/{index}/rotation"), "four numbers [x, y, z, w]")
            })?;
            tracing::info!("Applying rotation to existing root node.");
            (compose(existing, X_AXIS_90), true)
        }
        None => (X_AXIS_90, false),
    };

    node.insert("rotation".to_string(), rotation.to_json());
    tracing::debug!("Node {} rotation is now {:?}", index, rotation.to_array());

    Ok(ReorientOutcome::RotatedRoot {
        node: index,
        composed,
        rotation,
    })
}

fn wrap_roots(doc: &mut GltfDocument, children: Vec<usize>) -> Result<ReorientOutcome> {
    tracing::info!("Creating new root node for reorientation.");

    let node_count = doc.node_count()?;
    for (i, &child) in children.iter().enumerate() {
        if child >= node_count {
            return Err(Error::malformed(
                format!("/scenes/0/nodes/{i}"),
                "an existing node",
            ));
        }
    }

    let mut wrapper = Map::new();
    wrapper.insert("name".to_string(), Value::from(REORIENTED_ROOT_NAME));
    wrapper.insert("rotation".to_string(), X_AXIS_90.to_json());
    wrapper.insert("children".to_string(), index_array(&children));

    let root = doc.push_node(wrapper)?;
    doc.set_scene_roots(&[root])?;
    tracing::debug!("Synthetic root {} wraps nodes {:?}", root, children);

    Ok(ReorientOutcome::WrappedRoots { root, children })
}

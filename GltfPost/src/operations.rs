//! End-to-end post-processing: read, transform, write.

use crate::config::PostProcessOptions;
use crate::error::Result;
use crate::formats::gltf::{GltfDocument, read_gltf, write_gltf};
use crate::transform::{
    MaterialPatchReport, ReorientOutcome, apply_material_factors, reorient_scene,
};
use std::path::Path;

/// Summary of one post-processing run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessReport {
    /// Result of the reorient pass; `None` if it was not requested.
    pub reorient: Option<ReorientOutcome>,
    /// Result of the material pass; `None` if it was not requested or the
    /// document has no `materials` array.
    pub materials: Option<MaterialPatchReport>,
}

impl ProcessReport {
    /// Human-readable one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let reorient = match &self.reorient {
            None => "not requested".to_string(),
            Some(ReorientOutcome::Skipped) => "skipped (no scene nodes)".to_string(),
            Some(ReorientOutcome::RotatedRoot { node, composed: true, .. }) => {
                format!("composed into node {node}")
            }
            Some(ReorientOutcome::RotatedRoot { node, composed: false, .. }) => {
                format!("set on node {node}")
            }
            Some(ReorientOutcome::WrappedRoots { root, children }) => {
                format!("wrapped {} nodes under node {root}", children.len())
            }
        };
        let materials = match &self.materials {
            None => "untouched".to_string(),
            Some(report) => format!(
                "{} patched ({} metallic, {} roughness)",
                report.materials, report.metallic_written, report.roughness_written
            ),
        };
        format!("reorient: {reorient}; materials: {materials}")
    }
}

/// Run the requested passes over an in-memory document.
///
/// The scene is reoriented before materials are patched. A pass with
/// nothing to do logs a warning and the other pass still runs.
///
/// # Errors
/// Returns an error if the factors are not finite or a touched field is
/// malformed.
pub fn process_document(
    doc: &mut GltfDocument,
    options: &PostProcessOptions,
) -> Result<ProcessReport> {
    // Factors are checked before either pass touches the document.
    let factors = options.material_factors()?;
    let mut report = ProcessReport::default();

    if options.reorient {
        tracing::info!("Reorienting scene...");
        report.reorient = Some(reorient_scene(doc)?);
    }

    if options.patch_materials {
        report.materials = apply_material_factors(doc, &factors)?;
    }

    Ok(report)
}

/// Read `input`, process it, and write the result to `output`.
///
/// `input` and `output` may be the same path.
///
/// # Errors
/// Returns an error if reading, processing, or writing fails. Nothing is
/// written when reading or processing fails.
pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &PostProcessOptions,
) -> Result<ProcessReport> {
    let mut doc = read_gltf(input)?;
    let report = process_document(&mut doc, options)?;
    write_gltf(&doc, output)?;
    tracing::info!("Modification complete.");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::math::X_AXIS_90;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> GltfDocument {
        GltfDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_default_options_only_patch_materials() {
        let mut d = doc(json!({
            "scenes": [{ "nodes": [0] }],
            "nodes": [{}],
            "materials": [{}]
        }));

        let report = process_document(&mut d, &PostProcessOptions::default()).unwrap();

        assert_eq!(report.reorient, None);
        assert_eq!(report.materials.unwrap().materials, 1);
        assert_eq!(d.into_value()["nodes"][0], json!({}));
    }

    #[test]
    fn test_skipped_reorient_still_patches_materials() {
        let mut d = doc(json!({ "scenes": [{ "nodes": [] }], "materials": [{}] }));
        let options = PostProcessOptions {
            reorient: true,
            ..PostProcessOptions::default()
        };

        let report = process_document(&mut d, &options).unwrap();

        assert_eq!(report.reorient, Some(ReorientOutcome::Skipped));
        assert!(report.materials.is_some());
    }

    #[test]
    fn test_null_scene_still_patches_materials() {
        for value in [
            json!({ "scenes": [{ "nodes": null }], "materials": [{}] }),
            json!({ "scenes": null, "materials": [{}] }),
        ] {
            let mut d = doc(value.clone());
            let options = PostProcessOptions {
                reorient: true,
                ..PostProcessOptions::default()
            };

            let report = process_document(&mut d, &options).unwrap();

            assert_eq!(report.reorient, Some(ReorientOutcome::Skipped), "{value}");
            assert_eq!(report.materials.unwrap().materials, 1);
            let result = d.into_value();
            assert_eq!(result["scenes"], value["scenes"]);
            assert_eq!(
                result["materials"][0]["pbrMetallicRoughness"],
                json!({ "metallicFactor": 0.1, "roughnessFactor": 0.1 })
            );
        }
    }

    #[test]
    fn test_materials_pass_can_be_disabled() {
        let original = json!({ "scenes": [{ "nodes": [0] }], "nodes": [{}], "materials": [{}] });
        let mut d = doc(original.clone());
        let options = PostProcessOptions {
            reorient: true,
            patch_materials: false,
            ..PostProcessOptions::default()
        };

        let report = process_document(&mut d, &options).unwrap();

        assert_eq!(report.materials, None);
        let value = d.into_value();
        assert_eq!(value["materials"], original["materials"]);
        assert_eq!(value["nodes"][0]["rotation"], X_AXIS_90.to_json());
    }

    #[test]
    fn test_bad_factor_leaves_document_untouched() {
        let original = json!({ "scenes": [{ "nodes": [0] }], "nodes": [{}], "materials": [{}] });
        let mut d = doc(original.clone());
        let options = PostProcessOptions {
            metallic_factor: f64::NAN,
            reorient: true,
            ..PostProcessOptions::default()
        };

        assert!(matches!(
            process_document(&mut d, &options),
            Err(Error::NonFiniteFactor { .. })
        ));
        assert_eq!(d.into_value(), original);
    }

    #[test]
    fn test_summary() {
        let report = ProcessReport {
            reorient: Some(ReorientOutcome::WrappedRoots { root: 3, children: vec![0, 1, 2] }),
            materials: None,
        };
        assert_eq!(
            report.summary(),
            "reorient: wrapped 3 nodes under node 3; materials: untouched"
        );
    }
}

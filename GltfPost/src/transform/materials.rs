//! PBR metallic-roughness factor defaults
//!
//! Fills in (or, with `override_existing`, replaces) `metallicFactor` and
//! `roughnessFactor` on every material.

use crate::error::{Error, Result};
use crate::formats::gltf::{GltfDocument, object_entry};
use serde_json::Value;

const PBR_KEY: &str = "pbrMetallicRoughness";
const METALLIC_KEY: &str = "metallicFactor";
const ROUGHNESS_KEY: &str = "roughnessFactor";

/// Factor values and the policy for existing ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialFactors {
    pub metallic: f64,
    pub roughness: f64,
    /// Replace factors already present instead of only filling gaps.
    pub override_existing: bool,
}

impl MaterialFactors {
    /// # Errors
    /// Returns [`Error::NonFiniteFactor`] if either factor is NaN or infinite.
    pub fn new(metallic: f64, roughness: f64, override_existing: bool) -> Result<Self> {
        for (name, value) in [("metallic", metallic), ("roughness", roughness)] {
            if !value.is_finite() {
                return Err(Error::NonFiniteFactor { name, value });
            }
        }
        Ok(Self {
            metallic,
            roughness,
            override_existing,
        })
    }
}

/// Counts of what [`apply_material_factors`] touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialPatchReport {
    /// Materials visited.
    pub materials: usize,
    /// Materials whose `metallicFactor` was written.
    pub metallic_written: usize,
    /// Materials whose `roughnessFactor` was written.
    pub roughness_written: usize,
}

/// Clamp a factor into `[0, 1]`.
///
/// Negative zero comes out as `0.0` so it is never written as `-0.0`.
#[must_use]
pub fn clamp_factor(value: f64) -> f64 {
    if value <= 0.0 { 0.0 } else { value.min(1.0) }
}

/// Apply `factors` to every material, in place.
///
/// Every material ends up with a `pbrMetallicRoughness` object, even when
/// neither factor is written. Returns `None` (and logs a warning) when the
/// document has no `materials` array at all; an empty array is fine.
///
/// # Errors
/// Returns [`Error::Malformed`] if `materials`, a material, or its
/// `pbrMetallicRoughness` has the wrong JSON type.
pub fn apply_material_factors(
    doc: &mut GltfDocument,
    factors: &MaterialFactors,
) -> Result<Option<MaterialPatchReport>> {
    let Some(materials) = doc.materials_mut()? else {
        tracing::warn!("No materials found in the glTF file.");
        return Ok(None);
    };

    tracing::info!("Modifying materials...");
    let metallic = clamp_factor(factors.metallic);
    let roughness = clamp_factor(factors.roughness);
    let mut report = MaterialPatchReport::default();

    for (i, material) in materials.iter_mut().enumerate() {
        let path = format!("/materials/{i}");
        let material = material
            .as_object_mut()
            .ok_or_else(|| Error::malformed(path.clone(), "an object"))?;
        let pbr = object_entry(material, PBR_KEY, &path)?;

        if factors.override_existing || !pbr.contains_key(METALLIC_KEY) {
            pbr.insert(METALLIC_KEY.to_string(), Value::from(metallic));
            report.metallic_written += 1;
        }
        if factors.override_existing || !pbr.contains_key(ROUGHNESS_KEY) {
            pbr.insert(ROUGHNESS_KEY.to_string(), Value::from(roughness));
            report.roughness_written += 1;
        }
        report.materials += 1;
    }

    tracing::debug!(
        "Patched {} materials ({} metallic, {} roughness)",
        report.materials,
        report.metallic_written,
        report.roughness_written
    );
    Ok(Some(report))
}

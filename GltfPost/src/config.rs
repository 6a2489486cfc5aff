//! Post-processing options
//!
//! Options can be built in code or loaded from a TOML file such as:
//!
//! ```toml
//! metallic_factor = 0.0
//! roughness_factor = 0.6
//! override_existing = true
//! reorient = true
//! ```
//!
//! Missing keys fall back to the defaults below.

use crate::error::{Error, Result};
use crate::transform::MaterialFactors;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default metallic factor written to materials.
pub const DEFAULT_METALLIC_FACTOR: f64 = 0.1;
/// Default roughness factor written to materials.
pub const DEFAULT_ROUGHNESS_FACTOR: f64 = 0.1;

fn default_metallic_factor() -> f64 {
    DEFAULT_METALLIC_FACTOR
}

fn default_roughness_factor() -> f64 {
    DEFAULT_ROUGHNESS_FACTOR
}

fn default_true() -> bool {
    true
}

/// What a post-processing run should do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostProcessOptions {
    #[serde(default = "default_metallic_factor")]
    pub metallic_factor: f64,
    #[serde(default = "default_roughness_factor")]
    pub roughness_factor: f64,
    /// Replace factors materials already define.
    #[serde(default, alias = "override")]
    pub override_existing: bool,
    /// Rotate the scene from Z-up to Y-up.
    #[serde(default)]
    pub reorient: bool,
    /// Run the material factor pass at all.
    #[serde(default = "default_true")]
    pub patch_materials: bool,
}

impl Default for PostProcessOptions {
    fn default() -> Self {
        Self {
            metallic_factor: DEFAULT_METALLIC_FACTOR,
            roughness_factor: DEFAULT_ROUGHNESS_FACTOR,
            override_existing: false,
            reorient: false,
            patch_materials: true,
        }
    }
}

impl PostProcessOptions {
    /// Parse options from TOML text.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or a key has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validated factors for the material pass.
    ///
    /// # Errors
    /// Returns an error if either factor is not finite.
    pub fn material_factors(&self) -> Result<MaterialFactors> {
        MaterialFactors::new(
            self.metallic_factor,
            self.roughness_factor,
            self.override_existing,
        )
    }
}

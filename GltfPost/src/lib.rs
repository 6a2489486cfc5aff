//! # GltfPost
//!
//! Post-processing for glTF 2.0 JSON documents exported from Z-up tools.
//!
//! ## Passes
//!
//! - **Reorient** - rotate the first scene 90° about X so it is Y-up, either
//!   on its single root node or on a new `ReorientedRoot` wrapping several
//!   top-level nodes
//! - **Material factors** - fill in (or override) `metallicFactor` and
//!   `roughnessFactor`, clamped to `[0, 1]`
//!
//! Everything else in the document is carried through unchanged, in its
//! original key order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gltfpost::prelude::*;
//!
//! let options = PostProcessOptions {
//!     reorient: true,
//!     ..PostProcessOptions::default()
//! };
//! let report = process_file("scene.gltf", "scene_yup.gltf", &options)?;
//! println!("{}", report.summary());
//! # Ok::<(), gltfpost::Error>(())
//! ```
//!
//! ### Working on a parsed document
//!
//! ```
//! use gltfpost::prelude::*;
//!
//! let mut doc = parse_gltf(r#"{"scenes":[{"nodes":[0]}],"nodes":[{}]}"#)?;
//! reorient_scene(&mut doc)?;
//! assert!(serialize_gltf(&doc)?.contains("rotation"));
//! # Ok::<(), gltfpost::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod formats;
pub mod math;
pub mod operations;
pub mod transform;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::PostProcessOptions;
    pub use crate::error::{Error, Result};
    pub use crate::formats::gltf::{
        GltfDocument, parse_gltf, read_gltf, serialize_gltf, write_gltf,
    };
    pub use crate::math::{Quaternion, X_AXIS_90, compose};
    pub use crate::operations::{ProcessReport, process_document, process_file};
    pub use crate::transform::{
        MaterialFactors, MaterialPatchReport, REORIENTED_ROOT_NAME, ReorientOutcome,
        apply_material_factors, reorient_scene,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

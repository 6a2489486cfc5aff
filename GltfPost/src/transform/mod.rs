//! In-place document transforms
//!
//! Both transforms are independent; when run together the scene is
//! reoriented before materials are patched.

pub mod materials;
pub mod reorient;

pub use materials::{MaterialFactors, MaterialPatchReport, apply_material_factors, clamp_factor};
pub use reorient::{REORIENTED_ROOT_NAME, ReorientOutcome, reorient_scene};

//! Math helpers for scene transforms

pub mod quaternion;

pub use quaternion::{Quaternion, X_AXIS_90, compose};

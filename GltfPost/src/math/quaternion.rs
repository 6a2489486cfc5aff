//! Rotation quaternions as stored in glTF nodes.
//!
//! glTF writes rotations as `[x, y, z, w]`. Composition follows the Hamilton
//! convention and never renormalizes, so chaining many compositions
//! accumulates floating-point drift.

use glam::DQuat;
use serde_json::Value;
use std::f64::consts::FRAC_1_SQRT_2;

/// A rotation quaternion `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// 90° rotation about the X axis, turning a Z-up scene into a Y-up one.
pub const X_AXIS_90: Quaternion = Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Build from glTF component order `[x, y, z, w]`.
    #[must_use]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Components in glTF order `[x, y, z, w]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Read a `rotation` value: a JSON array of exactly four numbers.
    ///
    /// Returns `None` for any other shape.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() != 4 {
            return None;
        }

        let mut components = [0.0; 4];
        for (slot, item) in components.iter_mut().zip(items) {
            *slot = item.as_f64()?;
        }
        Some(Self::from_array(components))
    }

    /// Write as a JSON `[x, y, z, w]` array.
    #[must_use]
    pub fn to_json(self) -> Value {
        Value::Array(self.to_array().into_iter().map(Value::from).collect())
    }

    /// Euclidean length; 1.0 for a well-formed rotation.
    #[must_use]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Component-wise comparison within `epsilon`.
    #[must_use]
    pub fn approx_eq(self, other: Quaternion, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<DQuat> for Quaternion {
    fn from(q: DQuat) -> Self {
        Self::from_array(q.to_array())
    }
}

impl From<Quaternion> for DQuat {
    fn from(q: Quaternion) -> Self {
        DQuat::from_array(q.to_array())
    }
}

/// Hamilton product `q1 ∘ q2`: the rotation that applies `q2`, then `q1`.
#[must_use]
pub fn compose(q1: Quaternion, q2: Quaternion) -> Quaternion {
    Quaternion {
        w: q1.w * q2.w - q1.x * q2.x - q1.y * q2.y - q1.z * q2.z,
        x: q1.w * q2.x + q1.x * q2.w + q1.y * q2.z - q1.z * q2.y,
        y: q1.w * q2.y - q1.x * q2.z + q1.y * q2.w + q1.z * q2.x,
        z: q1.w * q2.z + q1.x * q2.y - q1.y * q2.x + q1.z * q2.w,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn samples() -> Vec<Quaternion> {
        vec![
            Quaternion::IDENTITY,
            X_AXIS_90,
            DQuat::from_rotation_y(0.3).into(),
            DQuat::from_rotation_z(-1.2).into(),
            DQuat::from_euler(glam::EulerRot::XYZ, 0.4, -0.7, 2.1).into(),
        ]
    }

    #[test]
    fn test_identity_is_neutral() {
        for q in samples() {
            assert!(compose(q, Quaternion::IDENTITY).approx_eq(q, EPSILON));
            assert!(compose(Quaternion::IDENTITY, q).approx_eq(q, EPSILON));
        }
    }

    #[test]
    fn test_x_axis_90_matches_glam() {
        let expected: Quaternion = DQuat::from_rotation_x(FRAC_PI_2).into();
        assert!(X_AXIS_90.approx_eq(expected, EPSILON));
        assert!((X_AXIS_90.norm() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_compose_agrees_with_glam_product() {
        for a in samples() {
            for b in samples() {
                let ours = compose(a, b);
                let theirs: Quaternion = (DQuat::from(a) * DQuat::from(b)).into();
                assert!(ours.approx_eq(theirs, EPSILON), "{a:?} * {b:?}");
            }
        }
    }

    #[test]
    fn test_compose_is_not_commutative() {
        let y: Quaternion = DQuat::from_rotation_y(FRAC_PI_2).into();
        assert!(!compose(X_AXIS_90, y).approx_eq(compose(y, X_AXIS_90), 1e-6));
    }

    #[test]
    fn test_two_quarter_turns_make_half_turn() {
        let half = compose(X_AXIS_90, X_AXIS_90);
        assert!(half.approx_eq(Quaternion::new(1.0, 0.0, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn test_from_json() {
        let q = Quaternion::from_json(&json!([0, 0, 0.5, 1])).unwrap();
        assert_eq!(q.to_array(), [0.0, 0.0, 0.5, 1.0]);

        assert!(Quaternion::from_json(&json!([0, 0, 1])).is_none());
        assert!(Quaternion::from_json(&json!([0, 0, "1", 1])).is_none());
        assert!(Quaternion::from_json(&json!({"x": 0})).is_none());
    }

    #[test]
    fn test_to_json_keeps_gltf_order() {
        assert_eq!(
            Quaternion::new(1.0, 2.0, 3.0, 4.0).to_json(),
            json!([1.0, 2.0, 3.0, 4.0])
        );
    }
}

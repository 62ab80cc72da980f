/// Transform node rotated by the island component
use nalgebra::{Matrix4, Vector3};

/// Position, Euler rotation (radians) and scale of the island group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformNode {
    pub position: Vector3<f64>,
    pub rotation: Vector3<f64>,
    pub scale: Vector3<f64>,
}

impl TransformNode {
    pub fn new(position: Vector3<f64>, rotation: Vector3<f64>, scale: Vector3<f64>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros(), Vector3::repeat(1.0))
    }

    /// Model matrix: translate * rotate * scale
    pub fn model_matrix(&self) -> Matrix4<f64> {
        Transform::translation_matrix(&self.position)
            * Transform::rotation_matrix(&self.rotation)
            * Transform::scale_matrix(&self.scale)
    }
}

impl Default for TransformNode {
    fn default() -> Self {
        Self::identity()
    }
}

/// Matrix builders for [`TransformNode`]
pub struct Transform;

impl Transform {
    /// Rotation matrix from intrinsic `XYZ` Euler angles: `Rx * Ry * Rz`,
    /// the order scene graphs use for a node's default Euler rotation
    pub fn rotation_matrix(rotation: &Vector3<f64>) -> Matrix4<f64> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        rx * ry * rz
    }

    pub fn translation_matrix(translation: &Vector3<f64>) -> Matrix4<f64> {
        Matrix4::new_translation(translation)
    }

    pub fn scale_matrix(scale: &Vector3<f64>) -> Matrix4<f64> {
        Matrix4::new_nonuniform_scaling(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_node() {
        let node = TransformNode::identity();
        assert!((node.model_matrix() - Matrix4::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_yaw_rotates_x_into_negative_z() {
        let node = TransformNode::new(
            Vector3::zeros(),
            Vector3::new(0.0, FRAC_PI_2, 0.0),
            Vector3::repeat(1.0),
        );
        let p = node.model_matrix().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_tilt_applies_outside_yaw() {
        let node = TransformNode::new(
            Vector3::zeros(),
            Vector3::new(0.1, 4.7, 0.0),
            Vector3::repeat(1.0),
        );
        let m = node.model_matrix();
        assert!((m[(0, 2)] - 4.7f64.sin()).abs() < 1e-12);
        assert!((m[(1, 2)] + 0.1f64.sin() * 4.7f64.cos()).abs() < 1e-12);
        assert!((m[(2, 2)] - 0.1f64.cos() * 4.7f64.cos()).abs() < 1e-12);
    }

    #[test]
    fn test_xyz_order_with_roll() {
        let rotation = Vector3::new(0.3, -1.2, 0.7);
        let expected = Matrix4::new_rotation(Vector3::new(0.3, 0.0, 0.0))
            * Matrix4::new_rotation(Vector3::new(0.0, -1.2, 0.0))
            * Matrix4::new_rotation(Vector3::new(0.0, 0.0, 0.7));
        assert!((Transform::rotation_matrix(&rotation) - expected).norm() < 1e-12);
        // z is applied first: the local x axis is rolled before the yaw
        let p = Transform::rotation_matrix(&Vector3::new(0.0, FRAC_PI_2, FRAC_PI_2))
            .transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_scale_then_translate() {
        let node = TransformNode::new(
            Vector3::new(0.0, -6.5, -43.0),
            Vector3::zeros(),
            Vector3::repeat(2.0),
        );
        let p = node.model_matrix().transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert!((p - Point3::new(2.0, -4.5, -41.0)).norm() < 1e-12);
    }
}

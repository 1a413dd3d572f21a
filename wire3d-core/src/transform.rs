/// Point transforms and rotation matrices
///
/// Points are treated as row vectors `[x, y, z, 1]` multiplied on the left of
/// the matrix, so translation lives in row 3 and the homogeneous `w` is read
/// from column 3.
use nalgebra::{Matrix4, Point3};

/// Transform a point by a 4x4 matrix, applying the perspective divide.
///
/// When `w` comes out as exactly zero the undivided result is returned.
pub fn transform_point(point: &Point3<f32>, m: &Matrix4<f32>) -> Point3<f32> {
    let (x, y, z) = (point.x, point.y, point.z);

    let ox = x * m[(0, 0)] + y * m[(1, 0)] + z * m[(2, 0)] + m[(3, 0)];
    let oy = x * m[(0, 1)] + y * m[(1, 1)] + z * m[(2, 1)] + m[(3, 1)];
    let oz = x * m[(0, 2)] + y * m[(1, 2)] + z * m[(2, 2)] + m[(3, 2)];
    let w = x * m[(0, 3)] + y * m[(1, 3)] + z * m[(2, 3)] + m[(3, 3)];

    if w != 0.0 {
        Point3::new(ox / w, oy / w, oz / w)
    } else {
        Point3::new(ox, oy, oz)
    }
}

/// Matrix builders for the row-vector convention used by [`transform_point`]
pub struct Transform;

impl Transform {
    pub fn identity() -> Matrix4<f32> {
        Matrix4::identity()
    }

    /// Rotation about the z axis
    pub fn rotation_z(angle: f32) -> Matrix4<f32> {
        let (sin, cos) = angle.sin_cos();
        let mut m = Matrix4::zeros();
        m[(0, 0)] = cos;
        m[(0, 1)] = sin;
        m[(1, 0)] = -sin;
        m[(1, 1)] = cos;
        m[(2, 2)] = 1.0;
        m[(3, 3)] = 1.0;
        m
    }

    /// Rotation about the x axis
    pub fn rotation_x(angle: f32) -> Matrix4<f32> {
        let (sin, cos) = angle.sin_cos();
        let mut m = Matrix4::zeros();
        m[(0, 0)] = 1.0;
        m[(1, 1)] = cos;
        m[(1, 2)] = sin;
        m[(2, 1)] = -sin;
        m[(2, 2)] = cos;
        m[(3, 3)] = 1.0;
        m
    }
}

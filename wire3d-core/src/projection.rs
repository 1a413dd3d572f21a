/// Perspective projection and viewport mapping
use nalgebra::{Matrix4, Point3};

use crate::error::{Error, Result};

/// Build the perspective projection matrix.
///
/// `aspect` is height over width. The matrix is laid out for row vectors, so
/// the depth translation sits at `m[3][2]` and `w` picks up the input z via
/// `m[2][3]`.
pub fn build_projection(fov_deg: f32, near: f32, far: f32, aspect: f32) -> Result<Matrix4<f32>> {
    if !(fov_deg > 0.0 && fov_deg < 180.0) || !(far > near) {
        return Err(Error::InvalidProjection { fov_deg, near, far });
    }

    let fov_rad = 1.0 / (fov_deg * 0.5).to_radians().tan();
    let depth = far - near;

    let mut m = Matrix4::zeros();
    m[(0, 0)] = aspect * fov_rad;
    m[(1, 1)] = fov_rad;
    m[(2, 2)] = far / depth;
    m[(3, 2)] = (-far * near) / depth;
    m[(2, 3)] = 1.0;
    m[(3, 3)] = 0.0;

    log::debug!(
        "projection: fov={fov_deg} near={near} far={far} aspect={aspect:.4} scale={fov_rad:.4}"
    );
    Ok(m)
}

/// Pixel-space target of the normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map [-1, 1] to [0, width] x [0, height]; z passes through
    pub fn map(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::new(
            (point.x + 1.0) * 0.5 * self.width,
            (point.y + 1.0) * 0.5 * self.height,
            point.z,
        )
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}

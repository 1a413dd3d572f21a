/// Per-frame transform pipeline: object space to screen space
use nalgebra::Matrix4;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::geometry::{Mesh, Triangle};
use crate::projection::Viewport;
use crate::transform::{transform_point, Transform};

/// Distance the mesh is pushed in front of the camera
pub const Z_OFFSET: f32 = 3.0;

/// Projection and viewport state fixed at startup
#[derive(Debug, Clone)]
pub struct FramePipeline {
    projection: Matrix4<f32>,
    viewport: Viewport,
    z_offset: f32,
}

impl FramePipeline {
    pub fn new(config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            projection: config.projection()?,
            viewport: config.viewport(),
            z_offset: config.z_offset,
        })
    }

    pub fn with_projection(projection: Matrix4<f32>, viewport: Viewport) -> Self {
        Self {
            projection,
            viewport,
            z_offset: Z_OFFSET,
        }
    }

    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Transform every triangle of `mesh` for the given rotation angle.
    ///
    /// The mesh spins about z at `angle` and about x at half that rate.
    /// Output keeps mesh order.
    pub fn render(&self, mesh: &Mesh, angle: f32) -> Vec<Triangle> {
        let rot_z = Transform::rotation_z(angle);
        let rot_x = Transform::rotation_x(angle * 0.5);

        mesh.triangles
            .iter()
            .map(|triangle| self.project_triangle(triangle, &rot_z, &rot_x))
            .collect()
    }

    fn project_triangle(
        &self,
        triangle: &Triangle,
        rot_z: &Matrix4<f32>,
        rot_x: &Matrix4<f32>,
    ) -> Triangle {
        triangle.map(|p| {
            // Z first, then X: the two are applied separately, not pre-multiplied
            let rotated = transform_point(&transform_point(p, rot_z), rot_x);
            let mut translated = rotated;
            translated.z += self.z_offset;
            let projected = transform_point(&translated, &self.projection);
            self.viewport.map(&projected)
        })
    }
}

/// One-shot form of [`FramePipeline::render`] with the default z offset
pub fn render_frame(
    mesh: &Mesh,
    projection: &Matrix4<f32>,
    angle: f32,
    viewport: Viewport,
) -> Vec<Triangle> {
    FramePipeline::with_projection(*projection, viewport).render(mesh, angle)
}

/// Fixed render parameters
use nalgebra::Matrix4;

use crate::error::Result;
use crate::projection::{build_projection, Viewport};

/// Viewport width in pixels
pub const WIDTH: u32 = 1440;
/// Viewport height in pixels
pub const HEIGHT: u32 = 900;
/// Target frame rate in Hz
pub const FRAMES: u32 = 30;

/// Everything the engine needs to know before the first frame.
///
/// `Default` reproduces the built-in constants; nothing here is re-read
/// once the engine has been constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Distance the mesh is pushed along +z before projection
    pub z_offset: f32,
    /// Radians per second
    pub angular_speed: f32,
}

impl RenderConfig {
    /// Aspect ratio as height over width
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    /// Minimum milliseconds between two ticks (integer division, 33 at 30 Hz)
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.frames.max(1))
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    pub fn projection(&self) -> Result<Matrix4<f32>> {
        build_projection(self.fov_deg, self.near, self.far, self.aspect())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            frames: FRAMES,
            fov_deg: 90.0,
            near: 0.1,
            far: 1000.0,
            z_offset: 3.0,
            angular_speed: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 1440);
        assert_eq!(config.height, 900);
        assert_eq!(config.frame_interval_ms(), 33);
        assert!((config.aspect() - 0.625).abs() < 1e-6);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let config = RenderConfig {
            frames: 0,
            ..RenderConfig::default()
        };
        assert_eq!(config.frame_interval_ms(), 1000);
    }
}

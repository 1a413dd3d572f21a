/// Error types shared by the core and the platform backends
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Projection parameters that would divide by zero or flip the depth range
    #[error("invalid projection: fov {fov_deg} deg, near {near}, far {far} (need 0 < fov < 180 and far > near)")]
    InvalidProjection { fov_deg: f32, near: f32, far: f32 },

    /// Failure reported by the windowing/drawing layer
    #[error("platform error: {0}")]
    Platform(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

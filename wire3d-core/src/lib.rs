/// wire3d Core Library - Wireframe transform pipeline and frame pacing
///
/// This library holds everything that does not touch a real display: the
/// point/matrix math, the cube mesh, the projection, the per-frame pipeline,
/// the fixed-rate pacer and the loop that ties them to a [`Surface`].

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod pacing;
pub mod pipeline;
pub mod projection;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use config::{RenderConfig, FRAMES, HEIGHT, WIDTH};
pub use engine::Engine;
pub use error::{Error, Result};
pub use geometry::{build_cube, Mesh, Triangle};
pub use pacing::{FramePacer, FrameTime, MonotonicClock, TickSource};
pub use pipeline::{render_frame, FramePipeline};
pub use projection::{build_projection, Viewport};
pub use surface::{Color, Surface};
pub use transform::{transform_point, Transform};

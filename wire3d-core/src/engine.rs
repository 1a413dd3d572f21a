/// Top-level render loop
use crate::config::RenderConfig;
use crate::error::Result;
use crate::geometry::Mesh;
use crate::pacing::{FramePacer, FrameTime, TickSource};
use crate::pipeline::FramePipeline;
use crate::surface::{Color, Surface};

const BACKGROUND: Color = Color::BLACK;
const WIREFRAME: Color = Color::WHITE;

/// Owns the mesh, the projection and the clock state for the lifetime of
/// the program.
pub struct Engine {
    mesh: Mesh,
    pipeline: FramePipeline,
    pacer: FramePacer,
    frames_rendered: u64,
    max_frames: Option<u64>,
}

impl Engine {
    /// Build the engine around the unit cube
    pub fn new(config: &RenderConfig) -> Result<Self> {
        Self::with_mesh(Mesh::cube(), config)
    }

    pub fn with_mesh(mesh: Mesh, config: &RenderConfig) -> Result<Self> {
        let pipeline = FramePipeline::new(config)?;
        let pacer = FramePacer::new(config.frame_interval_ms(), config.angular_speed);
        log::debug!(
            "engine: {} triangles, {}x{} @ {} Hz",
            mesh.len(),
            config.width,
            config.height,
            config.frames
        );

        Ok(Self {
            mesh,
            pipeline,
            pacer,
            frames_rendered: 0,
            max_frames: None,
        })
    }

    /// Stop after `limit` frames even without a quit request
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.max_frames = limit;
        self
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn angle(&self) -> f32 {
        self.pacer.angle()
    }

    /// Run until the surface reports a quit request or the frame limit is hit.
    ///
    /// Quit is only checked between frames. Returns the number of frames
    /// rendered by this call.
    pub fn run<S, C>(&mut self, surface: &mut S, clock: &mut C) -> Result<u64>
    where
        S: Surface + ?Sized,
        C: TickSource + ?Sized,
    {
        let start = self.frames_rendered;

        loop {
            if surface.poll_quit()? {
                log::debug!("quit requested");
                break;
            }
            if self.max_frames.is_some_and(|limit| self.frames_rendered >= limit) {
                log::debug!("frame limit reached");
                break;
            }

            let time = self.pacer.wait(clock);
            self.frame(surface, &time)?;
        }

        let rendered = self.frames_rendered - start;
        log::info!("render loop stopped after {rendered} frames");
        Ok(rendered)
    }

    /// Draw one frame for an already-taken tick
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, time: &FrameTime) -> Result<()> {
        surface.clear(BACKGROUND);
        surface.set_draw_color(WIREFRAME);

        for triangle in self.pipeline.render(&self.mesh, time.angle) {
            for (a, b) in triangle.edges() {
                surface.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32);
            }
        }

        surface.present()?;
        self.frames_rendered += 1;
        log::trace!(
            "frame {} dt={:.4}s angle={:.4}",
            self.frames_rendered,
            time.dt,
            time.angle
        );
        Ok(())
    }
}

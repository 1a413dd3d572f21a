/// wire3d Terminal Demo - Rotating Wireframe Cube
///
/// Renders the unit cube as a spinning wireframe at a fixed frame rate.
/// Controls:
///   - Q / ESC / Ctrl-C: Quit

use anyhow::Context;
use clap::Parser;
use wire3d_core::{RenderConfig, FRAMES};
use wire3d_terminal::{logging, TerminalApp};

#[derive(Parser)]
#[command(name = "wire3d-terminal", about = "Spinning wireframe cube in the terminal")]
struct Cli {
    /// Target frame rate in Hz
    #[arg(long, default_value_t = FRAMES)]
    fps: u32,

    /// Stop after this many frames
    #[arg(long)]
    max_frames: Option<u64>,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref());

    let config = RenderConfig {
        frames: cli.fps.max(1),
        ..RenderConfig::default()
    };

    let mut app = TerminalApp::new(config)
        .context("failed to set up the renderer")?
        .with_title("wire3d")
        .with_frame_limit(cli.max_frames);

    let frames = app.run().context("terminal rendering failed")?;

    println!("Rendered {frames} frames.");
    Ok(())
}

/// Terminal backend for the wire3d engine
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;
use wire3d_core::{Color, Engine, MonotonicClock, RenderConfig, Surface};

pub mod logging;
pub mod renderer;

pub use renderer::AsciiCanvas;

/// A terminal treated as a framebuffer of `width` x `height` viewport pixels.
///
/// Opening the surface switches the terminal to raw mode on the alternate
/// screen; dropping it restores the terminal.
pub struct TerminalSurface {
    out: Stdout,
    canvas: AsciiCanvas,
    title: String,
    viewport_width: u32,
    viewport_height: u32,
    presented: u64,
    quit: bool,
}

impl TerminalSurface {
    pub fn open(title: &str, width: u32, height: u32) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        terminal::enable_raw_mode()?;

        // From here on Drop undoes the terminal setup, even if the rest fails
        let mut surface = Self {
            out: stdout(),
            canvas: AsciiCanvas::new(cols as usize, canvas_rows(rows)),
            title: title.to_string(),
            viewport_width: width.max(1),
            viewport_height: height.max(1),
            presented: 0,
            quit: false,
        };
        execute!(
            surface.out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(title),
            cursor::Hide
        )?;

        log::debug!("terminal surface {cols}x{rows} cells for a {width}x{height} viewport");
        Ok(surface)
    }

    fn to_cell(&self, x: i32, y: i32) -> (i64, i64) {
        scale_to_cell(
            x,
            y,
            (self.viewport_width, self.viewport_height),
            (self.canvas.width(), self.canvas.height()),
        )
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(to_term_color(color));
    }

    fn set_draw_color(&mut self, color: Color) {
        self.canvas.set_ink(to_term_color(color));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let (cx1, cy1) = self.to_cell(x1, y1);
        let (cx2, cy2) = self.to_cell(x2, y2);
        self.canvas.draw_line(cx1, cy1, cx2, cy2);
    }

    fn present(&mut self) -> wire3d_core::Result<()> {
        self.presented += 1;

        queue!(self.out, cursor::MoveTo(0, 0))?;
        self.canvas.draw(&mut self.out)?;

        // Status line below the canvas
        queue!(
            self.out,
            SetForegroundColor(style::Color::Yellow),
            Print(format!("{} | frame {} | Q=Quit", self.title, self.presented)),
            ResetColor
        )?;

        self.out.flush()?;
        Ok(())
    }

    fn poll_quit(&mut self) -> wire3d_core::Result<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if is_quit_key(&key) => {
                    self.quit = true;
                }
                Event::Resize(cols, rows) => {
                    log::debug!("terminal resized to {cols}x{rows}");
                    self.canvas.resize(cols as usize, canvas_rows(rows));
                    queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
                }
                _ => {}
            }
        }
        Ok(self.quit)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        // Nothing useful to do with a failure while tearing down
        let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// The last row is kept for the status line.
fn canvas_rows(rows: u16) -> usize {
    (rows as usize).saturating_sub(1)
}

/// Map a viewport pixel onto the cell grid. Floors, so negative pixels stay
/// off-grid.
fn scale_to_cell(x: i32, y: i32, viewport: (u32, u32), grid: (usize, usize)) -> (i64, i64) {
    let cx = (i64::from(x) * grid.0 as i64).div_euclid(i64::from(viewport.0));
    let cy = (i64::from(y) * grid.1 as i64).div_euclid(i64::from(viewport.1));
    (cx, cy)
}

fn to_term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Main application struct: an engine bound to the terminal
pub struct TerminalApp {
    engine: Engine,
    config: RenderConfig,
    title: String,
}

impl TerminalApp {
    pub fn new(config: RenderConfig) -> wire3d_core::Result<Self> {
        Ok(Self {
            engine: Engine::new(&config)?,
            config,
            title: "wire3d".to_string(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.engine = self.engine.with_frame_limit(limit);
        self
    }

    /// Open the terminal and render until quit. Returns frames rendered.
    pub fn run(&mut self) -> wire3d_core::Result<u64> {
        let mut surface =
            TerminalSurface::open(&self.title, self.config.width, self.config.height)?;
        let mut clock = MonotonicClock::new();
        self.engine.run(&mut surface, &mut clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let none = KeyModifiers::NONE;
        assert!(is_quit_key(&key(KeyCode::Char('q'), none, KeyEventKind::Press)));
        assert!(is_quit_key(&key(KeyCode::Esc, none, KeyEventKind::Press)));
        assert!(is_quit_key(&key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press
        )));
        assert!(!is_quit_key(&key(KeyCode::Char('c'), none, KeyEventKind::Press)));
        assert!(!is_quit_key(&key(KeyCode::Char('w'), none, KeyEventKind::Press)));
        assert!(!is_quit_key(&key(KeyCode::Char('q'), none, KeyEventKind::Release)));
    }

    #[test]
    fn test_viewport_to_cells() {
        let viewport = (1440, 900);
        let grid = (144, 45);
        assert_eq!(scale_to_cell(0, 0, viewport, grid), (0, 0));
        assert_eq!(scale_to_cell(720, 450, viewport, grid), (72, 22));
        assert_eq!(scale_to_cell(1439, 899, viewport, grid), (143, 44));
        assert_eq!(scale_to_cell(-1, -1, viewport, grid), (-1, -1));
    }

    #[test]
    fn test_status_row_reserved() {
        assert_eq!(canvas_rows(24), 23);
        assert_eq!(canvas_rows(0), 0);
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(
            to_term_color(Color::WHITE),
            style::Color::Rgb { r: 255, g: 255, b: 255 }
        );
    }
}

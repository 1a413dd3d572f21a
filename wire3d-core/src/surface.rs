/// Drawing capabilities the engine needs from a platform backend
use crate::error::Result;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A framebuffer the engine can draw wireframes into.
///
/// Creating the window (or terminal, or buffer) is the implementation's
/// constructor; the engine only needs the per-frame operations.
pub trait Surface {
    /// Fill the whole framebuffer
    fn clear(&mut self, color: Color);

    /// Set the color used by subsequent [`Surface::draw_line`] calls
    fn set_draw_color(&mut self, color: Color);

    /// Draw a line between two pixel positions in viewport coordinates
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Show the finished frame
    fn present(&mut self) -> Result<()>;

    /// Non-blocking check for a termination request
    fn poll_quit(&mut self) -> Result<bool>;
}

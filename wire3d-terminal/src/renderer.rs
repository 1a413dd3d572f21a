/// ASCII line canvas for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

const BLANK: char = ' ';

/// Character grid that lines are rasterized into, one char per cell
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    background: Color,
    ink: Color,
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![BLANK; width * height],
            background: Color::Black,
            ink: Color::White,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Change the grid size, dropping the current contents
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.char_buffer = vec![BLANK; width * height];
    }

    pub fn clear(&mut self, background: Color) {
        self.background = background;
        self.char_buffer.fill(BLANK);
    }

    pub fn set_ink(&mut self, ink: Color) {
        self.ink = ink;
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.char_buffer[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of non-blank cells
    pub fn lit_cells(&self) -> usize {
        self.char_buffer.iter().filter(|&&c| c != BLANK).count()
    }

    fn plot(&mut self, x: i64, y: i64, glyph: char) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = glyph;
    }

    /// Bresenham line between two cells; off-grid cells are skipped
    pub fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let glyph = line_glyph(x1 - x0, y1 - y0);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y, glyph);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(self.background))?;
        writer.queue(SetForegroundColor(self.ink))?;
        for row in self.char_buffer.chunks(self.width.max(1)) {
            let line: String = row.iter().collect();
            writer.queue(Print(line))?;
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Pick a character that follows the line's direction. Rows grow downward.
fn line_glyph(dx: i64, dy: i64) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax == 0 && ay == 0 {
        '+'
    } else if ay * 2 < ax {
        '-'
    } else if ax * 2 < ay {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_line() {
        let mut canvas = AsciiCanvas::new(10, 3);
        canvas.draw_line(1, 1, 8, 1);
        assert_eq!(canvas.lit_cells(), 8);
        assert_eq!(canvas.cell(1, 1), Some('-'));
        assert_eq!(canvas.cell(8, 1), Some('-'));
        assert_eq!(canvas.cell(0, 1), Some(' '));
    }

    #[test]
    fn test_diagonal_glyphs() {
        let mut canvas = AsciiCanvas::new(5, 5);
        canvas.draw_line(0, 0, 4, 4);
        assert_eq!(canvas.cell(2, 2), Some('\\'));

        canvas.clear(Color::Black);
        canvas.draw_line(0, 4, 4, 0);
        assert_eq!(canvas.cell(2, 2), Some('/'));
        assert_eq!(canvas.lit_cells(), 5);
    }

    #[test]
    fn test_line_is_clipped_to_grid() {
        let mut canvas = AsciiCanvas::new(4, 4);
        canvas.draw_line(-10, 2, 10, 2);
        assert_eq!(canvas.lit_cells(), 4);
        canvas.draw_line(100, 100, 200, 200);
        assert_eq!(canvas.lit_cells(), 4);
    }

    #[test]
    fn test_single_point() {
        let mut canvas = AsciiCanvas::new(3, 3);
        canvas.draw_line(1, 1, 1, 1);
        assert_eq!(canvas.cell(1, 1), Some('+'));
        assert_eq!(canvas.lit_cells(), 1);
    }

    #[test]
    fn test_resize_and_clear() {
        let mut canvas = AsciiCanvas::new(3, 3);
        canvas.draw_line(0, 0, 2, 0);
        canvas.resize(6, 2);
        assert_eq!((canvas.width(), canvas.height()), (6, 2));
        assert_eq!(canvas.lit_cells(), 0);
        assert_eq!(canvas.cell(6, 0), None);
    }

    #[test]
    fn test_draw_writes_every_row() {
        let mut canvas = AsciiCanvas::new(4, 2);
        canvas.draw_line(0, 0, 3, 0);
        let mut out = Vec::new();
        canvas.draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("----"));
        assert_eq!(text.matches("\r\n").count(), 2);
    }
}

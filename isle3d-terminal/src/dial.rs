/// Top-down stage dial drawn with terminal characters
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use isle3d_core::stage::{classify_normalized, normalize_angle};
use std::f64::consts::TAU;
use std::io::Write;

/// Ring samples around the dial
const RING_SAMPLES: usize = 120;

/// Terminal cells are roughly twice as tall as wide
const CELL_ASPECT: f64 = 2.0;

const MARKER: char = '@';

/// Character dial: the stage windows on a ring plus a marker for the
/// island's current heading
pub struct DialRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl DialRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.char_buffer[y * self.width + x])
    }

    /// Draw the ring and the heading marker for `angle` (unbounded radians)
    pub fn render_dial(&mut self, angle: f64) {
        let (cx, cy, ry) = self.geometry();
        if ry < 1.0 {
            return;
        }

        for i in 0..RING_SAMPLES {
            let theta = i as f64 / RING_SAMPLES as f64 * TAU;
            let (character, color) = match classify_normalized(theta) {
                Some(stage) => (
                    char::from_digit(stage.number() as u32, 10).unwrap_or('?'),
                    stage_color(stage.number()),
                ),
                None => ('.', Color::DarkGrey),
            };
            self.plot(cx, cy, ry, theta, character, color);
        }

        let heading = normalize_angle(angle);
        let color = classify_normalized(heading)
            .map(|stage| stage_color(stage.number()))
            .unwrap_or(Color::White);
        self.plot(cx, cy, ry * 0.7, heading, MARKER, color);
    }

    /// Center and vertical radius, leaving the first row for the status line
    fn geometry(&self) -> (f64, f64, f64) {
        let cx = self.width as f64 / 2.0;
        let cy = (self.height as f64 + 1.0) / 2.0;
        let ry = ((self.height as f64 - 3.0) / 2.0).min((self.width as f64 - 2.0) / (2.0 * CELL_ASPECT));
        (cx, cy, ry)
    }

    fn plot(&mut self, cx: f64, cy: f64, ry: f64, theta: f64, character: char, color: Color) {
        let x = (cx + ry * CELL_ASPECT * theta.sin()).round();
        let y = (cy - ry * theta.cos()).round();
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            let idx = y * self.width + x;
            self.char_buffer[idx] = character;
            self.color_buffer[idx] = color;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn stage_color(number: u8) -> Color {
    match number {
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Cyan,
        4 => Color::Magenta,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(renderer: &DialRenderer, target: char) -> usize {
        let mut n = 0;
        for y in 0..renderer.height {
            for x in 0..renderer.width {
                if renderer.cell(x, y) == Some(target) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_dial_draws_all_stages_and_marker() {
        let mut renderer = DialRenderer::new(80, 24);
        renderer.render_dial(0.0);
        for digit in ['1', '2', '3', '4'] {
            assert!(count(&renderer, digit) > 0, "missing stage {digit}");
        }
        assert_eq!(count(&renderer, MARKER), 1);
    }

    #[test]
    fn test_marker_at_top_for_zero_angle() {
        let mut renderer = DialRenderer::new(80, 24);
        renderer.render_dial(std::f64::consts::TAU * 3.0);
        let (cx, cy, ry) = renderer.geometry();
        let x = cx.round() as usize;
        let y = (cy - ry * 0.7).round() as usize;
        assert_eq!(renderer.cell(x, y), Some(MARKER));
    }

    #[test]
    fn test_tiny_terminal_draws_nothing() {
        let mut renderer = DialRenderer::new(3, 2);
        renderer.render_dial(1.0);
        assert_eq!(count(&renderer, MARKER), 0);
    }

    #[test]
    fn test_clear() {
        let mut renderer = DialRenderer::new(40, 20);
        renderer.render_dial(1.0);
        renderer.clear();
        assert_eq!(count(&renderer, ' '), 40 * 20);
    }
}

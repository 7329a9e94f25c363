use macroquad::prelude::*;

use super::Renderer;
use crate::application::Viewport;
use crate::domain::Point;

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const BACKGROUND_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);

/// Retained tile surface.
///
/// Draw instructions from the core land here; macroquad repaints from it
/// every frame since it has no persistent canvas of its own.
pub struct Canvas {
    size: usize,
    lit: Vec<bool>,
}

impl Canvas {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            lit: vec![false; size * size],
        }
    }

    pub fn is_lit(&self, p: Point) -> bool {
        self.index(p).is_some_and(|idx| self.lit[idx])
    }

    fn index(&self, p: Point) -> Option<usize> {
        (p.x < self.size && p.y < self.size).then(|| p.y * self.size + p.x)
    }

    fn paint(&mut self, p: Point, alive: bool) {
        if let Some(idx) = self.index(p) {
            self.lit[idx] = alive;
        }
    }

    /// Paint the surface into the viewport square
    pub fn present(&self, viewport: &Viewport) {
        draw_rectangle(
            viewport.origin_x,
            viewport.origin_y,
            viewport.side(),
            viewport.side(),
            BACKGROUND_COLOR,
        );

        let cell_size = viewport.cell_size;
        for y in 0..self.size {
            for x in 0..self.size {
                if !self.lit[y * self.size + x] {
                    continue;
                }
                let (screen_x, screen_y) = viewport.cell_origin(Point::new(x, y));
                draw_rectangle(screen_x, screen_y, cell_size, cell_size, ALIVE_COLOR);
            }
        }
    }
}

impl Renderer for Canvas {
    fn draw_alive(&mut self, p: Point) {
        self.paint(p, true);
    }

    fn draw_dead(&mut self, p: Point) {
        self.paint(p, false);
    }

    fn clear_all(&mut self) {
        self.lit.fill(false);
    }
}

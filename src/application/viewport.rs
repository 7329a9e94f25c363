use crate::domain::Point;

/// Maps device coordinates onto the board.
///
/// The drawable square is the largest side that fits the available area and
/// divides evenly by the tile count, so every cell gets a whole pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    tiles: usize,
}

impl Viewport {
    /// Fit `tiles × tiles` cells into the available area.
    /// `None` when the area is smaller than one pixel per tile.
    pub fn fit(origin: (f32, f32), available: (f32, f32), tiles: usize) -> Option<Self> {
        if tiles == 0 {
            return None;
        }
        let min_dimension = available.0.min(available.1).max(0.0).floor() as usize;
        let cell_size = min_dimension / tiles;
        (cell_size > 0).then(|| Self {
            origin_x: origin.0,
            origin_y: origin.1,
            cell_size: cell_size as f32,
            tiles,
        })
    }

    pub const fn tiles(&self) -> usize {
        self.tiles
    }

    /// Side of the drawable square in pixels
    pub fn side(&self) -> f32 {
        self.cell_size * self.tiles as f32
    }

    /// Cell under a pointer position; `None` outside the board.
    pub fn point_at(&self, client_x: f32, client_y: f32) -> Option<Point> {
        let gx = ((client_x - self.origin_x) / self.cell_size).floor();
        let gy = ((client_y - self.origin_y) / self.cell_size).floor();
        let limit = self.tiles as f32;
        if gx < 0.0 || gy < 0.0 || gx >= limit || gy >= limit {
            return None;
        }
        Some(Point::new(gx as usize, gy as usize))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, p: Point) -> (f32, f32) {
        (
            self.origin_x + p.x as f32 * self.cell_size,
            self.origin_y + p.y as f32 * self.cell_size,
        )
    }
}

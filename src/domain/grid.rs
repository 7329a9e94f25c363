use super::{Cell, LifeError, Point, Result, rules::Rule};

/// Offsets of the Moore neighbourhood, excluding the cell itself.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid manages the square cellular automaton board.
/// Edges are bounded: nothing wraps around.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new `size × size` grid with all cells dead
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LifeError::InvalidConfiguration(
                "number of tiles must be positive".to_owned(),
            ));
        }
        let len = size.checked_mul(size).ok_or_else(|| {
            LifeError::InvalidConfiguration(format!("{size}x{size} grid is too large"))
        })?;
        Ok(Self {
            size,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Side length N
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, p: Point) -> usize {
        p.y * self.size + p.x
    }

    pub const fn in_bounds(&self, p: Point) -> bool {
        p.x < self.size && p.y < self.size
    }

    fn check(&self, p: Point) -> Result<usize> {
        if self.in_bounds(p) {
            Ok(self.get_index(p))
        } else {
            Err(LifeError::OutOfRange { point: p, size: self.size })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, p: Point) -> Result<Cell> {
        self.check(p).map(|idx| self.cells[idx])
    }

    /// Set cell at position (with bounds checking)
    pub fn set(&mut self, p: Point, cell: Cell) -> Result<()> {
        let idx = self.check(p)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Mutable access to the cell at `p`, `None` off the board
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        if self.in_bounds(p) {
            let idx = self.get_index(p);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Neighbours of `p` that exist on this grid.
    /// Candidates are filtered before any cell is read.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| p.offset(dx, dy))
            .filter(move |&n| self.in_bounds(n))
    }

    /// Count live neighbours; cells beyond the edge contribute nothing
    pub fn live_neighbors(&self, p: Point) -> u8 {
        self.neighbors(p)
            .map(|n| self.cells[self.get_index(n)])
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns a freshly allocated next generation.
    /// `self` is only read, so every cell sees the same snapshot.
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = self
            .points()
            .map(|p| rule.evolve(self.cells[self.get_index(p)], self.live_neighbors(p)))
            .collect();

        Self { size: self.size, cells }
    }

    /// Flip the cell at `p` and return its new state
    pub fn toggle(&mut self, p: Point) -> Result<Cell> {
        let idx = self.check(p)?;
        let cell = self.cells[idx].toggle();
        self.cells[idx] = cell;
        Ok(cell)
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Every coordinate in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.points().map(move |p| (p, self.cells[self.get_index(p)]))
    }
}

use crate::domain::{Cell, ConwayRule, Grid, Point, Result, Rule};
use crate::rendering::Renderer;

/// Advance one generation.
///
/// The result is a freshly allocated grid; `current` is never written, so
/// every neighbour count sees the previous generation only.
pub fn step(current: &Grid, rule: &dyn Rule) -> Grid {
    current.evolve(rule)
}

/// Flip one cell for a direct user edit and return its new state.
pub fn toggle_manual(grid: &mut Grid, p: Point) -> Result<Cell> {
    grid.toggle(p)
}

/// Owns the current generation and publishes changes to a renderer.
pub struct SimulationEngine {
    current: Grid,
    rule: ConwayRule,
}

impl SimulationEngine {
    pub fn new(grid: Grid, rule: ConwayRule) -> Self {
        Self { current: grid, rule }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn rule(&self) -> &ConwayRule {
        &self.rule
    }

    /// Compute the next generation, report changed cells, swap it in.
    /// Returns how many cells changed.
    pub fn commit(&mut self, renderer: &mut dyn Renderer) -> usize {
        let next = step(&self.current, &self.rule);

        let mut changed = 0;
        for ((p, before), (_, after)) in self.current.iter_cells().zip(next.iter_cells()) {
            if before == after {
                continue;
            }
            changed += 1;
            match after {
                Cell::Alive => renderer.draw_alive(p),
                Cell::Dead => renderer.draw_dead(p),
            }
        }

        self.current = next;
        changed
    }

    /// Manual edit between or during generations
    pub fn toggle(&mut self, p: Point, renderer: &mut dyn Renderer) -> Result<Cell> {
        let cell = toggle_manual(&mut self.current, p)?;
        match cell {
            Cell::Alive => renderer.draw_alive(p),
            Cell::Dead => renderer.draw_dead(p),
        }
        Ok(cell)
    }

    /// Swap in a whole new board, e.g. after reseeding
    pub fn replace(&mut self, grid: Grid, renderer: &mut dyn Renderer) {
        self.current = grid;
        self.redraw(renderer);
    }

    /// Repaint the current snapshot from scratch
    pub fn redraw(&self, renderer: &mut dyn Renderer) {
        renderer.clear_all();
        self.current
            .iter_cells()
            .filter(|(_, cell)| cell.is_alive())
            .for_each(|(p, _)| renderer.draw_alive(p));
    }

    /// Mutable access for pattern stamping; callers report draws themselves
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }
}

use super::{Cell, Grid, LifeError, Result, WeightedChoice};

/// Fills a grid with a random starting population.
///
/// Every cell is drawn independently with weight 1 for alive and
/// `(100 - p) / p` for dead, so roughly `p` percent of cells start alive.
#[derive(Clone, Copy, Debug)]
pub struct Seeder {
    dead_weight: f64,
}

impl Seeder {
    const ALIVE_WEIGHT: f64 = 1.0;

    pub fn new(alive_start_percentage: f64) -> Result<Self> {
        if !(alive_start_percentage > 0.0 && alive_start_percentage < 100.0) {
            return Err(LifeError::InvalidConfiguration(format!(
                "alive start percentage must lie strictly between 0 and 100, got {alive_start_percentage}"
            )));
        }
        Ok(Self {
            dead_weight: (100.0 - alive_start_percentage) / alive_start_percentage,
        })
    }

    /// Overwrite every cell of `grid` with a fresh draw.
    pub fn seed(&self, grid: &mut Grid, chance: &mut dyn WeightedChoice) -> Result<()> {
        for p in grid.points() {
            let alive = chance.pick_first(Self::ALIVE_WEIGHT, self.dead_weight);
            grid.set(p, Cell::from_alive(alive))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RandomWeightedChoice;

    /// Always answers the same way, whatever the weights
    struct Fixed(bool);

    impl WeightedChoice for Fixed {
        fn pick_first(&mut self, _first: f64, _second: f64) -> bool {
            self.0
        }
    }

    #[test]
    fn test_boundary_percentages_rejected() {
        for bad in [0.0, 100.0, -5.0, 150.0, f64::NAN] {
            assert!(
                matches!(Seeder::new(bad), Err(LifeError::InvalidConfiguration(_))),
                "{bad} accepted"
            );
        }
        assert!(Seeder::new(0.5).is_ok());
        assert!(Seeder::new(99.5).is_ok());
    }

    #[test]
    fn test_seed_writes_every_cell() {
        let mut grid = Grid::new(8).unwrap();
        Seeder::new(25.0).unwrap().seed(&mut grid, &mut Fixed(true)).unwrap();
        assert_eq!(grid.population(), 64);

        Seeder::new(25.0).unwrap().seed(&mut grid, &mut Fixed(false)).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_half_percentage_converges() {
        let mut grid = Grid::new(100).unwrap();
        let mut chance = RandomWeightedChoice::seeded(2024);
        Seeder::new(50.0).unwrap().seed(&mut grid, &mut chance).unwrap();
        let fraction = grid.population() as f64 / 10_000.0;
        assert!((fraction - 0.5).abs() < 0.03, "alive fraction {fraction}");
    }

    #[test]
    fn test_low_percentage_converges() {
        let mut grid = Grid::new(100).unwrap();
        let mut chance = RandomWeightedChoice::seeded(5);
        Seeder::new(5.0).unwrap().seed(&mut grid, &mut chance).unwrap();
        let fraction = grid.population() as f64 / 10_000.0;
        assert!((fraction - 0.05).abs() < 0.015, "alive fraction {fraction}");
    }
}

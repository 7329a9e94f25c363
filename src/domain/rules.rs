use serde::{Deserialize, Serialize};

use super::{Cell, LifeError, Result};

/// Trait for cellular automaton rules
/// Keeps the simulation step independent of the concrete ruleset
pub trait Rule {
    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Death and birth thresholds for a Conway-style rule.
///
/// A live cell dies with `neighbors <= underpopulation` or
/// `neighbors >= overpopulation`; a dead cell is born with exactly `birth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleThresholds {
    pub underpopulation: u8,
    pub overpopulation: u8,
    pub birth: u8,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            underpopulation: 1,
            overpopulation: 4,
            birth: 3,
        }
    }
}

impl RuleThresholds {
    pub fn validate(&self) -> Result<()> {
        if self.underpopulation >= self.overpopulation {
            return Err(LifeError::InvalidConfiguration(format!(
                "underpopulation threshold {} must be below overpopulation threshold {}",
                self.underpopulation, self.overpopulation
            )));
        }
        if self.overpopulation > 9 || self.birth > 8 {
            return Err(LifeError::InvalidConfiguration(format!(
                "thresholds must fit a Moore neighbourhood (overpopulation {}, birth {})",
                self.overpopulation, self.birth
            )));
        }
        Ok(())
    }
}

/// Conway's Game of Life (B3/S23 with the default thresholds)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule {
    thresholds: RuleThresholds,
}

impl ConwayRule {
    pub fn new(thresholds: RuleThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub const fn thresholds(&self) -> RuleThresholds {
        self.thresholds
    }

    /// Decide the next liveness of one cell.
    pub const fn next_state(&self, is_alive: bool, live_neighbors: u8) -> bool {
        let t = self.thresholds;
        if is_alive {
            live_neighbors > t.underpopulation && live_neighbors < t.overpopulation
        } else {
            live_neighbors == t.birth
        }
    }
}

impl Rule for ConwayRule {
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        Cell::from_alive(self.next_state(current.is_alive(), neighbors))
    }
}

/// Classic B3/S23 transition.
pub const fn next_state(is_alive: bool, live_neighbors: u8) -> bool {
    match (is_alive, live_neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule::default();

        // Underpopulation
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 1), Cell::Dead);

        // Survival
        assert_eq!(rule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(Cell::Alive, 4), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 8), Cell::Dead);

        // Reproduction
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
    }

    #[test]
    fn test_dead_cells_only_born_with_three() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead cell with {n} neighbours");
        }
    }

    #[test]
    fn test_alive_cells_survive_with_two_or_three() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live cell with {n} neighbours");
        }
    }

    #[test]
    fn test_default_thresholds_match_classic_rule() {
        let rule = ConwayRule::default();
        for alive in [false, true] {
            for n in 0..=8 {
                assert_eq!(rule.next_state(alive, n), next_state(alive, n));
            }
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = RuleThresholds { underpopulation: 0, overpopulation: 5, birth: 2 };
        let rule = ConwayRule::new(thresholds).unwrap();
        assert!(rule.next_state(true, 1));
        assert!(rule.next_state(true, 4));
        assert!(!rule.next_state(true, 5));
        assert!(rule.next_state(false, 2));
        assert!(!rule.next_state(false, 3));
    }

    #[test]
    fn test_inconsistent_thresholds_rejected() {
        let bad = RuleThresholds { underpopulation: 4, overpopulation: 4, birth: 3 };
        assert!(matches!(ConwayRule::new(bad), Err(LifeError::InvalidConfiguration(_))));

        let bad = RuleThresholds { underpopulation: 1, overpopulation: 4, birth: 9 };
        assert!(matches!(ConwayRule::new(bad), Err(LifeError::InvalidConfiguration(_))));
    }
}

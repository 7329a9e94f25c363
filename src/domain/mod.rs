mod cell;
mod chance;
mod config;
mod error;
mod grid;
mod patterns;
mod rules;
mod seeder;

pub use cell::{Cell, Point};
pub use chance::{RandomWeightedChoice, WeightedChoice};
pub use config::Configuration;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, Rule, RuleThresholds, next_state};
pub use seeder::Seeder;

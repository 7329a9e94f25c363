// Domain layer - board, rules, seeding
pub mod domain;

// Application layer - simulation engine, turn scheduler, host facade
pub mod application;

// Infrastructure layer - rendering boundary, host UI and input
pub mod rendering;
pub mod ui;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Configuration, Grid, LifeError, Point, Result};
pub use application::{GameOfLife, SimulationEngine, TurnScheduler, Viewport};
pub use rendering::Renderer;

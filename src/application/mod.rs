mod game;
mod simulation;
mod turn_scheduler;
mod viewport;

pub use game::GameOfLife;
pub use simulation::{SimulationEngine, step, toggle_manual};
pub use turn_scheduler::{
    MAX_FIRES_PER_ADVANCE, PeriodicSource, SubscriptionId, TimerState, TurnScheduler,
};
pub use viewport::Viewport;

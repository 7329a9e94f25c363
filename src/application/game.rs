use std::time::Duration;

use super::{SimulationEngine, SubscriptionId, TimerState, TurnScheduler, Viewport};
use crate::domain::{
    Cell, Configuration, ConwayRule, Grid, LifeError, Pattern, Point, RandomWeightedChoice, Result,
    Seeder, WeightedChoice,
};
use crate::rendering::Renderer;

/// GameOfLife orchestrates the simulation.
/// The host calls `create`, `start` and `stop` at points of its choosing and
/// forwards clock, pointer and resize events.
pub struct GameOfLife {
    config: Configuration,
    seeder: Seeder,
    chance: Box<dyn WeightedChoice>,
    engine: SimulationEngine,
    scheduler: TurnScheduler,
    surface: Option<Surface>,
}

/// Last area the host offered for drawing
#[derive(Clone, Copy, Debug)]
struct Surface {
    origin: (f32, f32),
    available: (f32, f32),
    viewport: Option<Viewport>,
}

impl GameOfLife {
    /// Validate the configuration and seed the first board.
    /// Uses `config.seed` when present, OS entropy otherwise.
    pub fn create(config: Configuration) -> Result<Self> {
        let chance: Box<dyn WeightedChoice> = match config.seed {
            Some(seed) => Box::new(RandomWeightedChoice::seeded(seed)),
            None => Box::new(RandomWeightedChoice::from_entropy()),
        };
        Self::with_chance(config, chance)
    }

    /// Same as [`GameOfLife::create`] with an injected randomness source
    pub fn with_chance(config: Configuration, mut chance: Box<dyn WeightedChoice>) -> Result<Self> {
        config.validate()?;
        let rule = ConwayRule::new(config.rule)?;
        let seeder = Seeder::new(config.alive_start_percentage)?;
        let grid = seeded_grid(config.number_of_tiles, &seeder, chance.as_mut())?;
        let scheduler =
            TurnScheduler::new(config.period(), config.start_delay(), TimerState::default())?;

        log::info!(
            "Created {0}x{0} game, {1} alive, tick every {2} ms",
            config.number_of_tiles,
            grid.population(),
            config.speed_in_milliseconds
        );

        Ok(Self {
            config,
            seeder,
            chance,
            engine: SimulationEngine::new(grid, rule),
            scheduler,
            surface: None,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn counter(&self) -> u64 {
        self.scheduler.counter()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn is_stopped(&self) -> bool {
        self.scheduler.is_torn_down()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.surface.and_then(|s| s.viewport)
    }

    /// Begin (or continue) ticking
    pub fn start(&mut self) {
        self.resume();
    }

    /// Tear the scheduler down; no tick is delivered afterwards
    pub fn stop(&mut self) {
        self.scheduler.teardown();
    }

    pub fn resume(&mut self) {
        if !self.scheduler.is_running() {
            self.scheduler.resume();
            log::info!("Simulation resumed at generation {}", self.counter());
        }
    }

    pub fn pause(&mut self) {
        if self.scheduler.is_running() {
            self.scheduler.pause();
            log::info!("Simulation paused at generation {}", self.counter());
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.scheduler.is_running() {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Stop, zero the counter and reseed a fresh board
    pub fn reset(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        self.scheduler.reset();
        self.reseed(renderer)
    }

    /// Feed elapsed host time; returns how many generations were committed
    pub fn advance(&mut self, elapsed: Duration, renderer: &mut dyn Renderer) -> u32 {
        let engine = &mut self.engine;
        self.scheduler.advance(elapsed, |counter| commit(engine, renderer, counter))
    }

    /// One clock event from a host with its own timer
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> Option<u64> {
        let engine = &mut self.engine;
        self.scheduler.tick(|counter| commit(engine, renderer, counter))
    }

    pub fn subscribe_counter(&mut self, observer: impl FnMut(u64) + 'static) -> SubscriptionId {
        self.scheduler.subscribe(observer)
    }

    pub fn unsubscribe_counter(&mut self, id: SubscriptionId) -> bool {
        self.scheduler.unsubscribe(id)
    }

    /// Replace the scheduler with one at the new cadence, keeping progress.
    /// Refused with [`LifeError::TornDown`] once the game is stopped.
    pub fn change_speed(&mut self, speed_in_milliseconds: u64) -> Result<()> {
        if speed_in_milliseconds == 0 {
            return Err(LifeError::InvalidConfiguration(
                "speed in milliseconds must be positive".to_owned(),
            ));
        }
        let mut config = self.config.clone();
        config.speed_in_milliseconds = speed_in_milliseconds;

        let replacement = self.scheduler.carry_over(config.period(), config.start_delay())?;
        self.scheduler = replacement;
        self.config = config;
        log::info!("Tick period changed to {speed_in_milliseconds} ms");
        Ok(())
    }

    /// Resize the board; only before the first generation
    pub fn set_number_of_tiles(&mut self, tiles: usize, renderer: &mut dyn Renderer) -> Result<()> {
        self.ensure_editable()?;
        let mut config = self.config.clone();
        config.number_of_tiles = tiles;
        config.validate()?;
        self.config = config;
        self.refit();
        self.reseed(renderer)
    }

    /// Change the seeding density; only before the first generation
    pub fn set_alive_start_percentage(
        &mut self,
        percentage: f64,
        renderer: &mut dyn Renderer,
    ) -> Result<()> {
        self.ensure_editable()?;
        let seeder = Seeder::new(percentage)?;
        self.config.alive_start_percentage = percentage;
        self.seeder = seeder;
        self.reseed(renderer)
    }

    /// Host surface changed: refit the board and repaint the current
    /// generation. The counter is untouched.
    pub fn resize(
        &mut self,
        origin: (f32, f32),
        available: (f32, f32),
        renderer: &mut dyn Renderer,
    ) {
        self.surface = Some(Surface { origin, available, viewport: None });
        self.refit();
        self.engine.redraw(renderer);
    }

    /// Pointer click in device coordinates; toggles the cell underneath.
    /// Returns `None` when the click missed the board.
    pub fn click(
        &mut self,
        client_x: f32,
        client_y: f32,
        renderer: &mut dyn Renderer,
    ) -> Result<Option<(Point, Cell)>> {
        let Some(point) = self.viewport().and_then(|vp| vp.point_at(client_x, client_y)) else {
            return Ok(None);
        };
        let cell = self.toggle_cell(point, renderer)?;
        Ok(Some((point, cell)))
    }

    /// Manual edit; does not advance the counter
    pub fn toggle_cell(&mut self, p: Point, renderer: &mut dyn Renderer) -> Result<Cell> {
        self.engine.toggle(p, renderer)
    }

    /// Stamp a pattern centred on the board
    pub fn place_pattern(&mut self, pattern: &Pattern, renderer: &mut dyn Renderer) {
        let origin = pattern.centred_origin(self.config.number_of_tiles);
        for p in pattern.place_on(self.engine.grid_mut(), origin) {
            renderer.draw_alive(p);
        }
        log::info!("Placed {} at ({}, {})", pattern.name, origin.x, origin.y);
    }

    /// Repaint everything, e.g. when a renderer is first attached
    pub fn redraw(&self, renderer: &mut dyn Renderer) {
        self.engine.redraw(renderer);
    }

    fn ensure_editable(&self) -> Result<()> {
        let counter = self.counter();
        if counter != 0 {
            log::warn!("Configuration edit rejected at generation {counter}");
            return Err(LifeError::ConfigurationLocked { counter });
        }
        Ok(())
    }

    fn refit(&mut self) {
        let tiles = self.config.number_of_tiles;
        if let Some(surface) = self.surface.as_mut() {
            surface.viewport = Viewport::fit(surface.origin, surface.available, tiles);
            if surface.viewport.is_none() {
                log::warn!("Surface {:?} too small for {tiles} tiles", surface.available);
            }
        }
    }

    fn reseed(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let grid = seeded_grid(self.config.number_of_tiles, &self.seeder, self.chance.as_mut())?;
        log::info!(
            "Seeded {0}x{0} board with {1} live cells",
            self.config.number_of_tiles,
            grid.population()
        );
        self.engine.replace(grid, renderer);
        Ok(())
    }
}

fn seeded_grid(tiles: usize, seeder: &Seeder, chance: &mut dyn WeightedChoice) -> Result<Grid> {
    let mut grid = Grid::new(tiles)?;
    seeder.seed(&mut grid, chance)?;
    Ok(grid)
}

fn commit(engine: &mut SimulationEngine, renderer: &mut dyn Renderer, counter: u64) {
    let changed = engine.commit(renderer);
    log::debug!("Generation {counter}: {changed} cells changed");
}

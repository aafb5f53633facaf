use log::{debug, info};

use crate::collision::{Collision, CollisionDetector};
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::food::{FoodPulse, FoodSpawner};
use crate::geometry::Cell;
use crate::render::{FOOD, RenderSurface, SNAKE_BODY, SNAKE_HEAD};
use crate::scheduler::{TaskHandle, TickScheduler};
use crate::score::{BestScoreStore, ScoreTracker};
use crate::snake::SnakeState;

/// Why a session ended
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    /// The snake filled the board and no food could be placed
    BoardCleared,
}

impl GameOverReason {
    pub fn headline(self) -> &'static str {
        match self {
            GameOverReason::BoardCleared => "BOARD CLEARED",
            GameOverReason::Wall | GameOverReason::SelfCollision => "GAME OVER",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    GameOver(GameOverReason),
}

/// What a single tick did
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    FoodEaten,
    Ended(GameOverReason),
}

/// Mutable state of one play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: SnakeState,
    /// `None` before the first spawn and once the board is full
    pub food: Option<Cell>,
    pub pulse: FoodPulse,
    /// Seconds between ticks
    pub tick_interval: f64,
}

impl GameSession {
    fn new(config: &GameConfig) -> Self {
        Self {
            snake: SnakeState::new(config.start),
            food: None,
            pulse: FoodPulse::new(
                config.food_min_size,
                config.food_max_size,
                config.food_pulse_step,
            ),
            tick_interval: config.initial_tick_interval,
        }
    }
}

/// Drives a session through `Idle -> Running -> GameOver`.
///
/// Input only reaches the snake's pending-direction buffer; everything else
/// changes inside [`GameLoopController::tick`], which the scheduler fires at
/// most once per [`GameLoopController::update`].
pub struct GameLoopController<S: BestScoreStore> {
    config: GameConfig,
    phase: Phase,
    session: GameSession,
    scores: ScoreTracker<S>,
    scheduler: TickScheduler,
    tick_handle: Option<TaskHandle>,
    spawner: FoodSpawner,
    collisions: CollisionDetector,
}

impl<S: BestScoreStore> GameLoopController<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self {
            session: GameSession::new(&config),
            collisions: CollisionDetector::new(config.grid()),
            scores: ScoreTracker::new(store),
            scheduler: TickScheduler::new(),
            tick_handle: None,
            spawner: FoodSpawner::new(),
            phase: Phase::Idle,
            config,
        }
    }

    /// Fix the food placement sequence; equal seeds replay equal games
    pub fn with_food_seed(self, seed: u64) -> Self {
        self.spawner.reseed(seed);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    pub fn scores(&self) -> &ScoreTracker<S> {
        &self.scores
    }

    /// `Idle -> Running`: place the first food, refresh the best score and
    /// start ticking at the session's interval.
    pub fn start(&mut self, now: f64) {
        if self.phase != Phase::Idle {
            debug!("start ignored in phase {:?}", self.phase);
            return;
        }
        self.scores.reset();
        self.phase = Phase::Running;
        info!(
            "Session started on a {}x{} grid, best score {}",
            self.config.grid_width,
            self.config.grid_height,
            self.scores.best()
        );

        self.session.food = self
            .spawner
            .spawn(&self.session.snake.occupied(), self.config.grid());
        if self.session.food.is_none() {
            self.finish(GameOverReason::BoardCleared);
            return;
        }
        self.tick_handle = Some(
            self.scheduler
                .schedule_every(self.session.tick_interval, now),
        );
    }

    /// Full reset followed by a fresh start, from any phase
    pub fn restart(&mut self, now: f64) {
        self.cancel_ticking();
        self.session.snake.reset(self.config.start);
        self.session.pulse.reset();
        self.session.food = None;
        self.session.tick_interval = self.config.initial_tick_interval;
        self.phase = Phase::Idle;
        info!("Session restarted");
        self.start(now);
    }

    /// Buffer a steering input. Ignored unless the session is running.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.session.snake.buffer_direction(direction)
    }

    /// Run the tick that is due at `now`, if any
    pub fn update(&mut self, now: f64) -> Option<TickOutcome> {
        if self.phase != Phase::Running {
            return None;
        }
        let due = self.scheduler.poll(now)?;
        match &self.tick_handle {
            Some(handle) if handle.id() == due => Some(self.tick(now)),
            _ => None,
        }
    }

    /// One simulation step: move, eat, animate, then check for collisions
    pub fn tick(&mut self, now: f64) -> TickOutcome {
        if self.phase != Phase::Running {
            return match self.phase {
                Phase::GameOver(reason) => TickOutcome::Ended(reason),
                _ => TickOutcome::Advanced,
            };
        }
        let Some(food) = self.session.food else {
            return self.finish(GameOverReason::BoardCleared);
        };

        let moved = self.session.snake.advance(food);
        let mut outcome = TickOutcome::Advanced;
        if moved.grew {
            self.scores.on_food_eaten();
            self.session.food = self
                .spawner
                .spawn(&self.session.snake.occupied(), self.config.grid());
            if self.session.food.is_none() {
                return self.finish(GameOverReason::BoardCleared);
            }
            self.ramp_speed(now);
            outcome = TickOutcome::FoodEaten;
        }

        self.session.pulse.advance();

        match self.collisions.check(self.session.snake.body()) {
            Collision::None => outcome,
            Collision::Wall => self.finish(GameOverReason::Wall),
            Collision::SelfCollision => self.finish(GameOverReason::SelfCollision),
        }
    }

    /// Draw the snake, head first in its own colour, then the food
    pub fn render(&self, surface: &mut impl RenderSurface) {
        surface.clear();
        for (i, cell) in self.session.snake.body().iter().enumerate() {
            let color = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
            surface.draw_cell(*cell, color);
        }
        if let Some(food) = self.session.food {
            surface.draw_food_block(food, self.session.pulse.size(), FOOD);
        }
    }

    /// Shorten the tick interval and reschedule. The new interval applies
    /// from the tick after this one.
    fn ramp_speed(&mut self, now: f64) {
        let current = self.session.tick_interval;
        let next = (current * self.config.speed_ramp_factor)
            .max(self.config.min_tick_interval)
            .min(current);
        if next == current {
            return;
        }
        self.session.tick_interval = next;
        self.cancel_ticking();
        self.tick_handle = Some(self.scheduler.schedule_every(next, now));
        debug!("Tick interval now {:.1}ms", next * 1000.0);
    }

    fn cancel_ticking(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> TickOutcome {
        self.cancel_ticking();
        self.phase = Phase::GameOver(reason);
        let new_best = self.scores.on_game_over();
        info!(
            "Game over ({:?}) with score {}{}",
            reason,
            self.scores.score(),
            if new_best { ", new best" } else { "" }
        );
        TickOutcome::Ended(reason)
    }
}

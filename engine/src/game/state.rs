use crate::log;

use super::food::Food;
use super::particles::ParticleSystem;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::{Snake, StepOutcome};
use super::types::{ColorRange, Direction};

/// Why the round ended. Not an error: a terminal state that only an explicit
/// reset leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    SelfCollision,
    BoardFull,
}

/// Warm reds, matching the food the burst celebrates.
const BURST_COLORS: ColorRange = ColorRange {
    r: (200, 255),
    g: (0, 100),
    b: (0, 100),
};

pub struct GameState {
    settings: GameSettings,
    snake: Snake,
    food: Food,
    particles: ParticleSystem,
    level: u32,
    tick_rate: u32,
    end_reason: Option<GameEndReason>,
}

impl GameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(settings.grid, settings.initial_snake_length);
        let food = Food::spawn(settings.grid, &snake.occupied_set(), rng)
            .expect("a fresh board always has a free cell");
        Self {
            snake,
            food,
            particles: ParticleSystem::new(),
            level: 1,
            tick_rate: settings.base_tick_rate,
            end_reason: None,
            settings,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn score(&self) -> u32 {
        self.snake.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn is_game_over(&self) -> bool {
        self.end_reason.is_some()
    }

    /// Buffers a direction intent for the next tick. Ignored once the round
    /// is over.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.end_reason.is_none() {
            self.snake.set_pending_direction(direction);
        }
    }

    /// One simulation tick. The snake only moves while the round is live;
    /// particles keep decaying over the game-over screen.
    pub fn update(&mut self, rng: &mut SessionRng) {
        if self.end_reason.is_none() {
            self.step_snake(rng);
        }
        self.particles.tick();
    }

    /// Back to the initial aggregate: fresh snake and food, no particles,
    /// level 1 at the base rate. The only transition out of game over.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        *self = Self::new(self.settings.clone(), rng);
        log!("Round reset");
    }

    fn step_snake(&mut self, rng: &mut SessionRng) {
        if self.snake.advance(self.settings.grid) == StepOutcome::Collided {
            self.end_reason = Some(GameEndReason::SelfCollision);
            log!("Game over: snake hit itself at score {}", self.snake.score);
            return;
        }

        if self.snake.head() == self.food.position {
            self.eat_food(rng);
        }
    }

    fn eat_food(&mut self, rng: &mut SessionRng) {
        let eaten_at = self.food.position;
        self.snake.grow();
        self.snake.score += 1;
        log!(
            "Ate food at ({}, {}). Score: {}",
            eaten_at.x,
            eaten_at.y,
            self.snake.score
        );

        match Food::spawn(self.settings.grid, &self.snake.occupied_set(), rng) {
            Some(food) => {
                log!("Food spawned at ({}, {})", food.position.x, food.position.y);
                self.food = food;
            }
            None => {
                self.end_reason = Some(GameEndReason::BoardFull);
                log!("Board full at score {}", self.snake.score);
            }
        }

        // The burst marks the cell that was just eaten, not wherever the
        // food respawned.
        self.particles.spawn_burst(
            eaten_at,
            self.settings.burst_particle_count,
            self.settings.particle_lifespan,
            BURST_COLORS,
            rng,
        );

        if self.snake.score % self.settings.points_per_level == 0 {
            self.level += 1;
            self.tick_rate =
                (self.settings.base_tick_rate + self.level).min(self.settings.max_tick_rate);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, position: super::types::Point) {
        self.food = Food {
            position,
        };
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}

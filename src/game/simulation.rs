use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    action::Action,
    config::SimConfig,
    coord::{Bounds, Coordinate},
    food::Food,
    snake::Snake,
};

/// Read-only view of the simulation after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub head: Coordinate,
    /// Body segments, oldest first
    pub body: Vec<Coordinate>,
    pub food_position: Coordinate,
    /// The head reached the food on the last tick
    pub just_ate: bool,
    pub alive: bool,
    pub length: usize,
    pub score: u32,
}

/// One snake and one piece of food on a bounded grid
///
/// Food consumption is applied with a one-tick lag: the tick that moves the
/// head onto the food only sets `just_ate`; the following tick bumps the
/// score, respawns the food and grows the snake.
#[derive(Debug)]
pub struct Simulation<R = ChaCha8Rng> {
    config: SimConfig,
    snake: Snake,
    food: Food,
    score: u32,
    just_ate: bool,
    alive: bool,
    rng: R,
}

impl Simulation<ChaCha8Rng> {
    /// Create a simulation whose food placement is seeded from `config.seed`
    pub fn new(config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    /// Create a simulation drawing food positions from `rng`
    pub fn with_rng(config: SimConfig, mut rng: R) -> Self {
        let bounds = config.bounds();
        let snake = Snake::new(bounds, config.tile_size);
        let food = Food::new(bounds, config.tile_size, &mut rng);

        Self {
            config,
            snake,
            food,
            score: 0,
            just_ate: false,
            alive: true,
            rng,
        }
    }

    /// Reset the game to its initial state
    pub fn reset(&mut self) -> Snapshot {
        self.snake.respawn();
        self.food.respawn(&mut self.rng);
        self.score = 0;
        self.just_ate = false;
        self.alive = true;

        debug!(
            head_x = self.snake.head.x,
            head_y = self.snake.head.y,
            food_x = self.food.position.x,
            food_y = self.food.position.y,
            "simulation reset"
        );

        self.snapshot()
    }

    /// Execute one tick of the game
    ///
    /// Once the snake has died nothing changes until `reset`.
    pub fn advance(&mut self, action: impl Into<Action>) {
        if !self.alive {
            return;
        }

        let action = action.into();

        if self.just_ate {
            self.score += 1;
            self.food.respawn(&mut self.rng);
        }

        self.snake.take_action(action, self.just_ate);
        self.just_ate = self.snake.head == self.food.position;
        self.alive = self.snake.alive;

        trace!(
            ?action,
            head_x = self.snake.head.x,
            head_y = self.snake.head.y,
            just_ate = self.just_ate,
            alive = self.alive,
            "tick"
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            head: self.snake.head,
            body: self.snake.body.iter().copied().collect(),
            food_position: self.food.position,
            just_ate: self.just_ate,
            alive: self.alive,
            length: self.snake.length(),
            score: self.score,
        }
    }

    /// Put the food at an exact position
    pub fn place_food(&mut self, position: Coordinate) {
        self.food.place(position);
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

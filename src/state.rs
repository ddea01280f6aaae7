use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::vec2::Vec2;

pub const BOARD_WIDTH: i32 = 50;
pub const BOARD_HEIGHT: i32 = 20;

const INITIAL_SNAKE_LENGTH: i32 = 4;
const INITIAL_VELOCITY: Vec2 = Vec2::DOWN;

// Speed ramp tunables: interval = TICK_NUMERATOR / (TICK_BASE_DIVISOR + score / TICK_SCORE_DIVISOR).
const TICK_NUMERATOR: Duration = Duration::from_secs(3);
const TICK_BASE_DIVISOR: u32 = 50;
const TICK_SCORE_DIVISOR: u32 = 3;

/// Whole game state: snake body, food, velocity, score and board bounds.
///
/// Valid coordinates span `0..=width` and `0..=height`; a head stepping past
/// either bound re-enters from the opposite edge.
pub struct GameState {
    snake: VecDeque<Vec2>,
    food: Vec2,
    velocity: Vec2,
    score: u32,
    game_over: bool,
    width: i32,
    height: i32,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let snake = (0..INITIAL_SNAKE_LENGTH).map(|i| Vec2::new(0, i)).collect();
        let mut state = GameState {
            snake,
            food: Vec2::new(0, 0),
            velocity: INITIAL_VELOCITY,
            score: 0,
            game_over: false,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            rng,
        };
        state.food = state
            .random_free_cell()
            .expect("a fresh board always has free cells");
        state
    }

    pub fn snake(&self) -> &VecDeque<Vec2> {
        &self.snake
    }

    pub fn food(&self) -> Vec2 {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Advances the game by one tick.
    ///
    /// The projected head is wrapped first, then checked against the
    /// post-move body: every segment except the tail cell being vacated this
    /// tick is a collision target. On collision the body is left untouched
    /// and the game-over flag is set. Eating food grows the snake by
    /// duplicating the tail in place and relocates the food to a random
    /// free cell.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        let head = *self
            .snake
            .back()
            .expect("snake always has at least one segment");
        let next = self.wrap(head + self.velocity);

        if self.snake.iter().skip(1).any(|&seg| seg == next) {
            info!("snake crashed into itself at ({}, {})", next.x, next.y);
            self.game_over = true;
            return;
        }

        self.snake.pop_front();
        self.snake.push_back(next);

        if next == self.food {
            self.score += 1;
            let tail = *self
                .snake
                .front()
                .expect("snake always has at least one segment");
            self.snake.push_front(tail);

            match self.random_free_cell() {
                Some(food) => {
                    debug!("food eaten, score {}, next food at ({}, {})", self.score, food.x, food.y);
                    self.food = food;
                }
                None => {
                    // Board filled up entirely; nowhere left to place food.
                    info!("board full at score {}", self.score);
                    self.game_over = true;
                }
            }
        }
    }

    /// Updates the velocity, ignoring a reversal onto the snake's own neck.
    pub fn steer(&mut self, direction: Vec2) {
        if direction == self.velocity.opposite() {
            return;
        }
        self.velocity = direction;
    }

    /// Time until the next tick; shrinks as the score grows, never zero.
    pub fn tick_interval(&self) -> Duration {
        TICK_NUMERATOR / (TICK_BASE_DIVISOR + self.score / TICK_SCORE_DIVISOR)
    }

    fn wrap(&self, mut pos: Vec2) -> Vec2 {
        if pos.x > self.width {
            pos.x = 0;
        }
        if pos.x < 0 {
            pos.x = self.width;
        }
        if pos.y > self.height {
            pos.y = 0;
        }
        if pos.y < 0 {
            pos.y = self.height;
        }
        pos
    }

    fn random_free_cell(&mut self) -> Option<Vec2> {
        let (width, height) = (self.width, self.height);
        let snake = &self.snake;
        let free: Vec<Vec2> = (0..=height)
            .flat_map(|y| (0..=width).map(move |x| Vec2::new(x, y)))
            .filter(|pos| !snake.contains(pos))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}

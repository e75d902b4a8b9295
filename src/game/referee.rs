use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::HashSet;
use std::time::Duration;

use super::{
    board::Board,
    config::{FoodPlacement, GameConfig},
    direction::Direction,
    element::GridElement,
    food::{Food, placement_extent},
    point::Point,
    snake::Snake,
    surface::RenderSurface,
};

/// Above this share of blocked cells, food is picked from the free cells
/// instead of by rejection sampling
const DENSE_BOARD_RATIO: (usize, usize) = (4, 5);

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefereeState {
    Running,
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The snake advanced one cell
    Moved,
    /// The snake ate, grew and advanced; the loop sped up
    Ate { score: u32, interval_ms: f64 },
    /// The next cell was part of the body; the game is over
    Crashed { score: u32 },
    /// No free cell was left for new food; the game is over
    Cleared { score: u32 },
    /// The game was already over, nothing changed
    Idle,
}

/// Drives the game: eat and crash detection, growth, food placement and tick pacing
pub struct Referee {
    board: Board,
    snake: Snake,
    food: Option<Food>,
    placement: FoodPlacement,
    interval_ms: f64,
    speedup_factor: f64,
    state: RefereeState,
    rng: StdRng,
}

impl Referee {
    /// Set up a fresh game for `config`: a one-cell snake at the center and one food item
    pub fn from_config(config: &GameConfig) -> Self {
        let board = Board::new(config.canvas_width, config.canvas_height, config.cell_size);
        let snake = Snake::new(&board);
        Self::new(board, snake, config)
    }

    /// Referee for an existing snake; places the first food item
    pub fn new(board: Board, snake: Snake, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut referee = Self {
            board,
            snake,
            food: None,
            placement: config.food_placement,
            interval_ms: config.initial_interval_ms,
            speedup_factor: config.speedup_factor,
            state: RefereeState::Running,
            rng,
        };

        referee.food = referee.spawn_food(None);
        if referee.food.is_none() {
            tracing::warn!("no free cell for the first food item, game over");
            referee.state = RefereeState::GameOver;
        }

        let grid_size = referee.board.grid_size();
        tracing::info!(
            columns = grid_size.x + 1,
            rows = grid_size.y + 1,
            interval_ms = referee.interval_ms,
            "game started"
        );

        referee
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn state(&self) -> RefereeState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RefereeState::Running
    }

    /// Food eaten so far; the snake starts at length one
    pub fn score(&self) -> u32 {
        (self.snake.target_length() - 1) as u32
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Delay before the next tick
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_ms / 1000.0)
    }

    /// Replace the current food item
    pub fn place_food(&mut self, food: Food) {
        self.food = Some(food);
    }

    /// Input entry point; ignored once the game is over
    pub fn request_direction_change(&mut self, direction: Direction) {
        if self.is_running() {
            self.snake.change_direction(direction);
        }
    }

    pub fn is_snake_about_to_eat(&self) -> bool {
        self.food
            .is_some_and(|food| food.cell() == self.snake.next_move())
    }

    /// Check if any cell of `first` is also a cell of `second`
    pub fn is_colliding(first: &dyn GridElement, second: &dyn GridElement) -> bool {
        first
            .grid_positions()
            .iter()
            .any(|a| second.grid_positions().iter().any(|b| a == b))
    }

    /// Pick a food cell clear of the snake's body and of the cell its head moves into
    /// next. Returns `None` when the placement region has no such cell.
    pub fn create_new_food(&mut self) -> Option<Food> {
        let incoming = self.snake.next_move();
        self.spawn_food(Some(incoming))
    }

    fn spawn_food(&mut self, avoid: Option<Point>) -> Option<Food> {
        let (columns, rows) = placement_extent(&self.board, self.placement);
        let in_region = |p: &Point| (0..columns).contains(&p.x) && (0..rows).contains(&p.y);

        let blocked: HashSet<Point> = self
            .snake
            .grid_positions()
            .iter()
            .copied()
            .chain(avoid)
            .filter(in_region)
            .collect();

        let region = (columns * rows) as usize;
        if blocked.len() >= region {
            return None;
        }

        let (num, den) = DENSE_BOARD_RATIO;
        if blocked.len() * den > region * num {
            let free: Vec<Point> = (0..rows)
                .flat_map(|y| (0..columns).map(move |x| Point::new(x, y)))
                .filter(|p| !blocked.contains(p))
                .collect();
            return free.choose(&mut self.rng).copied().map(Food::at);
        }

        loop {
            let food = Food::random(&self.board, self.placement, &mut self.rng);
            if !Self::is_colliding(&food, &self.snake) && Some(food.cell()) != avoid {
                return Some(food);
            }
        }
    }

    /// Advance the game state by one tick without drawing anything
    pub fn step(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        let mut ate = false;
        if self.is_snake_about_to_eat() {
            self.snake.increase_length();
            self.interval_ms *= self.speedup_factor;
            ate = true;

            self.food = self.create_new_food();
            if self.food.is_none() {
                self.snake.do_move();
                self.state = RefereeState::GameOver;
                tracing::info!(score = self.score(), "board cleared");
                return TickOutcome::Cleared {
                    score: self.score(),
                };
            }

            tracing::info!(
                score = self.score(),
                interval_ms = self.interval_ms,
                "food eaten"
            );
        }

        if self.snake.is_about_to_crash() {
            self.state = RefereeState::GameOver;
            tracing::info!(
                score = self.score(),
                head = ?self.snake.head(),
                "snake crashed"
            );
            return TickOutcome::Crashed {
                score: self.score(),
            };
        }

        self.snake.do_move();
        tracing::trace!(head = ?self.snake.head(), "moved");

        if ate {
            TickOutcome::Ate {
                score: self.score(),
                interval_ms: self.interval_ms,
            }
        } else {
            TickOutcome::Moved
        }
    }

    /// Paint the initial frame: background, snake and food
    pub fn start(&self, surface: &mut impl RenderSurface) {
        self.board.draw(surface);
        self.board.attach(surface, &self.snake);
        if let Some(food) = &self.food {
            self.board.attach(surface, food);
        }
        if !self.is_running() {
            self.board.show_game_over(surface, "Game over", self.score());
        }
    }

    /// One step of the game loop, redrawing only what changed
    pub fn tick(&mut self, surface: &mut impl RenderSurface) -> TickOutcome {
        let old_body = self.snake.grid_positions().to_vec();
        let old_food = self.food;

        let outcome = self.step();

        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Crashed { score } => {
                self.board.show_game_over(surface, "Game over", score);
            }
            TickOutcome::Moved | TickOutcome::Ate { .. } | TickOutcome::Cleared { .. } => {
                if old_food != self.food {
                    if let Some(food) = &old_food {
                        self.board.detach(surface, food);
                    }
                }
                self.board.erase(surface, &old_body);
                self.board.attach(surface, &self.snake);
                if let Some(food) = &self.food {
                    self.board.attach(surface, food);
                }
                if let TickOutcome::Cleared { score } = outcome {
                    self.board.show_game_over(surface, "Board cleared", score);
                }
            }
        }

        outcome
    }
}

use super::board::Board;
use super::direction::Direction;
use super::element::GridElement;
use super::point::Point;
use super::surface::Paint;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, tail first; the head is the last element
    position: Vec<Point>,
    /// Length the body grows to; may run one ahead of `position` until the next move
    length: usize,
    direction: Direction,
    grid_size: Point,
}

impl Snake {
    /// A one-cell snake at the board center, heading right
    pub fn new(board: &Board) -> Self {
        Self {
            position: vec![board.calculate_center()],
            length: 1,
            direction: Direction::Right,
            grid_size: board.grid_size(),
        }
    }

    /// Create a snake from explicit cells, tail first. `body` must not be empty.
    pub fn with_body(body: Vec<Point>, direction: Direction, board: &Board) -> Self {
        debug_assert!(!body.is_empty(), "a snake needs at least one cell");
        let length = body.len();
        Self {
            position: body,
            length,
            direction,
            grid_size: board.grid_size(),
        }
    }

    /// Get the head position
    pub fn head(&self) -> Point {
        self.position[self.position.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Length the snake is growing towards
    pub fn target_length(&self) -> usize {
        self.length
    }

    /// Cell the head will occupy after the next move, wrapping at the edges
    pub fn next_move(&self) -> Point {
        self.head().wrapped_step(self.direction, self.grid_size)
    }

    /// Turn the snake. A 180-degree turn is ignored unless the snake is a single cell.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.direction == direction {
            return;
        }
        if self.length > 1 && self.direction.is_opposite(direction) {
            return;
        }
        self.direction = direction;
    }

    /// Check if the next move lands on any currently occupied cell
    pub fn is_about_to_crash(&self) -> bool {
        self.position.contains(&self.next_move())
    }

    /// Advance one cell, dropping the tail unless the snake is growing
    pub fn do_move(&mut self) {
        let next = self.next_move();
        self.position.push(next);

        if self.position.len() > self.length {
            let excess = self.position.len() - self.length;
            self.position.drain(..excess);
        }
    }

    /// Grow by one cell on the next move
    pub fn increase_length(&mut self) {
        self.length += 1;
    }
}

impl GridElement for Snake {
    fn grid_positions(&self) -> &[Point] {
        &self.position
    }

    fn paint(&self) -> Paint {
        Paint::Snake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(200, 200, 20)
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(&board());
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.target_length(), 1);
        assert_eq!(snake.head(), Point::new(4, 4));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_next_move_without_wrap() {
        let mut snake = Snake::with_body(vec![Point::new(5, 5)], Direction::Right, &board());

        for direction in Direction::ALL {
            snake.change_direction(direction);
            let (dx, dy) = direction.delta();
            assert_eq!(snake.next_move(), Point::new(5 + dx, 5 + dy));
        }
    }

    #[test]
    fn test_next_move_wraps_on_every_edge() {
        let board = board();

        let snake = Snake::with_body(vec![Point::new(9, 3)], Direction::Right, &board);
        assert_eq!(snake.next_move(), Point::new(0, 3));

        let snake = Snake::with_body(vec![Point::new(0, 3)], Direction::Left, &board);
        assert_eq!(snake.next_move(), Point::new(9, 3));

        let snake = Snake::with_body(vec![Point::new(3, 0)], Direction::Up, &board);
        assert_eq!(snake.next_move(), Point::new(3, 9));

        let snake = Snake::with_body(vec![Point::new(3, 9)], Direction::Down, &board);
        assert_eq!(snake.next_move(), Point::new(3, 0));
    }

    #[test]
    fn test_change_direction_same_is_noop() {
        let body = vec![Point::new(2, 2), Point::new(3, 2)];
        let mut snake = Snake::with_body(body, Direction::Right, &board());
        let before = snake.clone();

        snake.change_direction(Direction::Right);
        assert_eq!(snake, before);
    }

    #[test]
    fn test_reversal_rejected_with_body() {
        let body = vec![Point::new(2, 2), Point::new(3, 2), Point::new(4, 2)];
        let mut snake = Snake::with_body(body, Direction::Right, &board());

        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);

        snake.change_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);

        snake.change_direction(Direction::Down);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_reversal_allowed_for_single_cell() {
        let mut snake = Snake::new(&board());
        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_move_slides_window() {
        let body = vec![Point::new(2, 2), Point::new(3, 2)];
        let mut snake = Snake::with_body(body, Direction::Right, &board());

        snake.do_move();
        assert_eq!(
            snake.grid_positions(),
            &[Point::new(3, 2), Point::new(4, 2)]
        );
    }

    #[test]
    fn test_growth_takes_effect_on_next_move() {
        let mut snake = Snake::new(&board());
        snake.do_move();
        assert_eq!(snake.len(), 1);

        snake.increase_length();
        assert_eq!(snake.len(), 1);

        snake.do_move();
        assert_eq!(snake.len(), 2);

        snake.do_move();
        snake.do_move();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(8, 4));
    }

    #[test]
    fn test_is_about_to_crash() {
        // Head at (3,3), tail right beside it at (2,3)
        let body = vec![
            Point::new(2, 3),
            Point::new(2, 2),
            Point::new(3, 2),
            Point::new(3, 3),
        ];
        let mut snake = Snake::with_body(body, Direction::Down, &board());
        assert!(!snake.is_about_to_crash());

        snake.change_direction(Direction::Left);
        assert!(snake.is_about_to_crash());
    }

    #[test]
    fn test_crash_check_includes_tail_cell() {
        let body = vec![Point::new(1, 1), Point::new(2, 1), Point::new(2, 2), Point::new(1, 2)];
        let mut snake = Snake::with_body(body, Direction::Left, &board());
        snake.change_direction(Direction::Up);
        assert_eq!(snake.next_move(), Point::new(1, 1));
        assert!(snake.is_about_to_crash());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least one cell")]
    fn test_empty_body_is_rejected() {
        Snake::with_body(Vec::new(), Direction::Right, &board());
    }
}

use super::direction::Direction;

/// A cell on the game grid, addressed by column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move point by delta, without any wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Step one cell in a direction, wrapping around a grid whose maximum
    /// column/row index is `grid_size`
    pub fn wrapped_step(&self, direction: Direction, grid_size: Point) -> Self {
        let (dx, dy) = direction.delta();
        let next = self.moved_by(dx, dy);

        Self::new(
            next.x.rem_euclid(grid_size.x + 1),
            next.y.rem_euclid(grid_size.y + 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equality() {
        assert_eq!(Point::new(3, 4), Point::new(3, 4));
        assert_ne!(Point::new(3, 4), Point::new(4, 3));
    }

    #[test]
    fn test_moved_by() {
        let pos = Point::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Point::new(6, 5));
        assert_eq!(pos.moved_by(0, -1), Point::new(5, 4));
    }

    #[test]
    fn test_wrapped_step_interior_matches_delta() {
        let grid = Point::new(9, 9);
        let pos = Point::new(4, 4);

        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(pos.wrapped_step(direction, grid), pos.moved_by(dx, dy));
        }
    }

    #[test]
    fn test_wrapped_step_edges() {
        let grid = Point::new(9, 7);

        assert_eq!(
            Point::new(9, 3).wrapped_step(Direction::Right, grid),
            Point::new(0, 3)
        );
        assert_eq!(
            Point::new(0, 3).wrapped_step(Direction::Left, grid),
            Point::new(9, 3)
        );
        assert_eq!(
            Point::new(2, 0).wrapped_step(Direction::Up, grid),
            Point::new(2, 7)
        );
        assert_eq!(
            Point::new(2, 7).wrapped_step(Direction::Down, grid),
            Point::new(2, 0)
        );
    }

    #[test]
    fn test_wrapped_step_on_two_cell_grid() {
        let grid = Point::new(1, 1);
        let corner = Point::new(0, 0);

        assert_eq!(corner.wrapped_step(Direction::Up, grid), Point::new(0, 1));
        assert_eq!(corner.wrapped_step(Direction::Left, grid), Point::new(1, 0));
        assert_eq!(
            Point::new(1, 1).wrapped_step(Direction::Down, grid),
            Point::new(1, 0)
        );
    }
}

use rand::Rng;

use super::board::Board;
use super::config::FoodPlacement;
use super::element::GridElement;
use super::point::Point;
use super::surface::Paint;

/// A single food cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: [Point; 1],
}

impl Food {
    /// Food at a fixed cell
    pub fn at(point: Point) -> Self {
        Self { position: [point] }
    }

    /// Food at a uniformly random cell of the placement region
    pub fn random(board: &Board, placement: FoodPlacement, rng: &mut impl Rng) -> Self {
        let (columns, rows) = placement_extent(board, placement);
        let x = rng.gen_range(0..columns);
        let y = rng.gen_range(0..rows);
        Self::at(Point::new(x, y))
    }

    pub fn cell(&self) -> Point {
        self.position[0]
    }
}

impl GridElement for Food {
    fn grid_positions(&self) -> &[Point] {
        &self.position
    }

    fn paint(&self) -> Paint {
        Paint::Food
    }
}

/// Columns and rows food may be placed in, counted from the origin
pub fn placement_extent(board: &Board, placement: FoodPlacement) -> (i32, i32) {
    let grid_size = board.grid_size();
    match placement {
        FoodPlacement::FullGrid => (grid_size.x + 1, grid_size.y + 1),
        FoodPlacement::Legacy => (grid_size.x, grid_size.y),
    }
}

use super::point::Point;
use super::surface::Paint;

/// Anything that occupies cells on the board
pub trait GridElement {
    /// Occupied cells, in the element's own order
    fn grid_positions(&self) -> &[Point];

    /// Color the element is drawn in
    fn paint(&self) -> Paint;
}

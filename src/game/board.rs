use super::element::GridElement;
use super::point::Point;
use super::surface::{Paint, RenderSurface};

const TITLE_FONT_PX: u32 = 30;
const SCORE_FONT_PX: u32 = 20;

/// Grid geometry derived from a pixel surface, plus the drawing helpers
/// that translate cells into pixel squares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    cell_size: u32,
    grid_size: Point,
}

impl Board {
    /// Build the grid for a `width` x `height` pixel surface.
    ///
    /// `grid_size` holds the largest valid column and row index, so the board spans
    /// `grid_size.x + 1` columns. The surface must be at least two cells on each axis
    /// (see `GameConfig::validate`).
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        let grid_size = Point::new(
            (width / cell_size) as i32 - 1,
            (height / cell_size) as i32 - 1,
        );

        Self {
            width,
            height,
            cell_size,
            grid_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Largest valid (column, row)
    pub fn grid_size(&self) -> Point {
        self.grid_size
    }

    pub fn calculate_center(&self) -> Point {
        Point::new(self.grid_size.x / 2, self.grid_size.y / 2)
    }

    /// Check if a cell lies on the board
    pub fn contains(&self, point: Point) -> bool {
        (0..=self.grid_size.x).contains(&point.x) && (0..=self.grid_size.y).contains(&point.y)
    }

    /// Paint the whole surface with the background color
    pub fn draw(&self, surface: &mut impl RenderSurface) {
        surface.fill_background(Paint::Background);
    }

    /// Paint one cell; cells off the board are skipped
    pub fn fill_cell(&self, surface: &mut impl RenderSurface, point: Point, paint: Paint) {
        if !self.contains(point) {
            return;
        }
        surface.fill_rect(
            point.x as u32 * self.cell_size,
            point.y as u32 * self.cell_size,
            self.cell_size,
            paint,
        );
    }

    /// Paint every cell of `element` in its own color
    pub fn attach(&self, surface: &mut impl RenderSurface, element: &dyn GridElement) {
        let paint = element.paint();
        for &position in element.grid_positions() {
            self.fill_cell(surface, position, paint);
        }
    }

    /// Erase every cell of `element` back to the background color
    pub fn detach(&self, surface: &mut impl RenderSurface, element: &dyn GridElement) {
        self.erase(surface, element.grid_positions());
    }

    pub fn erase(&self, surface: &mut impl RenderSurface, cells: &[Point]) {
        for &position in cells {
            self.fill_cell(surface, position, Paint::Background);
        }
    }

    /// Two centered lines: a title and the final score
    pub fn show_game_over(&self, surface: &mut impl RenderSurface, title: &str, score: u32) {
        let x = self.width / 2;
        let y = self.height / 2;
        surface.fill_text(title, x, y, TITLE_FONT_PX, Paint::Text);
        surface.fill_text(
            &format!("Score: {}", score),
            x,
            y + TITLE_FONT_PX,
            SCORE_FONT_PX,
            Paint::Text,
        );
    }
}

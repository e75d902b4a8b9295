use crate::game::{Board, Paint, Point, RenderSurface};

/// A line of text painted onto the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    /// Horizontal center, in pixels
    pub x: u32,
    /// Baseline, in pixels
    pub y: u32,
    pub font_px: u32,
    pub paint: Paint,
}

/// In-memory pixel surface with cell resolution.
///
/// Rectangles are snapped to the cells they cover; text is kept as a list of lines
/// for the terminal renderer to overlay.
#[derive(Debug, Clone)]
pub struct CanvasBuffer {
    cell_size: u32,
    columns: usize,
    rows: usize,
    cells: Vec<Paint>,
    text: Vec<TextLine>,
}

impl CanvasBuffer {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        let columns = (width / cell_size) as usize;
        let rows = (height / cell_size) as usize;

        Self {
            cell_size,
            columns,
            rows,
            cells: vec![Paint::Background; columns * rows],
            text: Vec::new(),
        }
    }

    /// A canvas matching the board's pixel surface
    pub fn for_board(board: &Board) -> Self {
        Self::new(board.width(), board.height(), board.cell_size())
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Paint of a cell, or `None` off the canvas
    pub fn cell(&self, point: Point) -> Option<Paint> {
        let x = usize::try_from(point.x).ok().filter(|&x| x < self.columns)?;
        let y = usize::try_from(point.y).ok().filter(|&y| y < self.rows)?;
        Some(self.cells[y * self.columns + x])
    }

    pub fn text_lines(&self) -> &[TextLine] {
        &self.text
    }

    /// Row a text line sits on
    pub fn text_row(&self, line: &TextLine) -> usize {
        ((line.y / self.cell_size) as usize).min(self.rows.saturating_sub(1))
    }
}

impl RenderSurface for CanvasBuffer {
    fn fill_background(&mut self, paint: Paint) {
        self.cells.fill(paint);
        self.text.clear();
    }

    fn fill_rect(&mut self, x: u32, y: u32, size: u32, paint: Paint) {
        let first_col = (x / self.cell_size) as usize;
        let first_row = (y / self.cell_size) as usize;
        let end_col = ((x + size).div_ceil(self.cell_size) as usize).min(self.columns);
        let end_row = ((y + size).div_ceil(self.cell_size) as usize).min(self.rows);

        for row in first_row..end_row {
            for col in first_col..end_col {
                self.cells[row * self.columns + col] = paint;
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: u32, y: u32, font_px: u32, paint: Paint) {
        self.text.push(TextLine {
            text: text.to_string(),
            x,
            y,
            font_px,
            paint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let canvas = CanvasBuffer::new(200, 150, 20);
        assert_eq!(canvas.columns(), 10);
        assert_eq!(canvas.rows(), 7);
        assert_eq!(canvas.cell(Point::new(0, 0)), Some(Paint::Background));
        assert_eq!(canvas.cell(Point::new(10, 0)), None);
        assert_eq!(canvas.cell(Point::new(-1, 0)), None);
    }

    #[test]
    fn test_fill_rect_snaps_to_cells() {
        let mut canvas = CanvasBuffer::new(200, 200, 20);
        canvas.fill_rect(40, 60, 20, Paint::Snake);

        assert_eq!(canvas.cell(Point::new(2, 3)), Some(Paint::Snake));
        assert_eq!(canvas.cell(Point::new(3, 3)), Some(Paint::Background));
        assert_eq!(canvas.cell(Point::new(2, 4)), Some(Paint::Background));
    }

    #[test]
    fn test_fill_rect_clips_at_edge() {
        let mut canvas = CanvasBuffer::new(100, 100, 20);
        canvas.fill_rect(80, 80, 60, Paint::Food);
        assert_eq!(canvas.cell(Point::new(4, 4)), Some(Paint::Food));
    }

    #[test]
    fn test_background_clears_text() {
        let mut canvas = CanvasBuffer::new(100, 100, 20);
        canvas.fill_text("hello", 50, 50, 20, Paint::Text);
        assert_eq!(canvas.text_lines().len(), 1);
        assert_eq!(canvas.text_row(&canvas.text_lines()[0]), 2);

        canvas.fill_background(Paint::Background);
        assert!(canvas.text_lines().is_empty());
    }
}

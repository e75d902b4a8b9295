//! Drawing contract the game core paints through.
//!
//! Coordinates are in pixels. The core converts cells with `pixel = cell * cell_size`,
//! so any surface with fixed pixel dimensions can host a game.

/// Colors the game paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paint {
    #[default]
    Background,
    Snake,
    Food,
    Text,
}

/// A drawable surface with fixed pixel dimensions
pub trait RenderSurface {
    /// Fill the whole surface with `paint`
    fn fill_background(&mut self, paint: Paint);

    /// Fill a `size` x `size` square whose top-left corner is at (`x`, `y`)
    fn fill_rect(&mut self, x: u32, y: u32, size: u32, paint: Paint);

    /// Draw one line of text horizontally centered on `x`, with its baseline at `y`
    fn fill_text(&mut self, text: &str, x: u32, y: u32, font_px: u32, paint: Paint);
}

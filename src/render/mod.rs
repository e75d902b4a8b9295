pub mod canvas;
pub mod renderer;

pub use canvas::{CanvasBuffer, TextLine};
pub use renderer::Renderer;

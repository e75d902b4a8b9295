//! Core game logic module for Snake
//!
//! Grid geometry, the snake, food and the referee that advances the game one tick at a
//! time. Nothing here touches the terminal; drawing goes through [`RenderSurface`].

pub mod board;
pub mod config;
pub mod direction;
pub mod element;
pub mod food;
pub mod point;
pub mod referee;
pub mod snake;
pub mod surface;

// Re-export commonly used types
pub use board::Board;
pub use config::{FoodPlacement, GameConfig};
pub use direction::Direction;
pub use element::GridElement;
pub use food::Food;
pub use point::Point;
pub use referee::{Referee, RefereeState, TickOutcome};
pub use snake::Snake;
pub use surface::{Paint, RenderSurface};

//! Grid Snake - a snake game driven by a timer-paced referee
//!
//! This library provides:
//! - Core game logic: grid geometry, snake, food and the referee (game module)
//! - An in-memory canvas and a TUI renderer (render module)
//! - Keyboard and swipe input mapping (input module)
//! - The interactive terminal mode that ties them together (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// Running statistics for the current game
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub food_eaten: u32,
    pub final_score: Option<u32>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            food_eaten: 0,
            final_score: None,
        }
    }

    /// Refresh the clock; it stops once the game has ended
    pub fn update(&mut self) {
        if self.final_score.is_none() {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn record_tick(&mut self, outcome: &TickOutcome) {
        match outcome {
            TickOutcome::Idle => return,
            TickOutcome::Ate { .. } => self.food_eaten += 1,
            TickOutcome::Cleared { score } => {
                // The last food was eaten before the board filled up
                self.food_eaten += 1;
                self.update();
                self.final_score = Some(*score);
            }
            TickOutcome::Crashed { score } => {
                self.update();
                self.final_score = Some(*score);
            }
            TickOutcome::Moved => {}
        }
        self.ticks += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

use crate::game::Direction;

/// Turns a drag (touch or mouse) into a single swipe direction.
///
/// A swipe fires once the pointer has travelled more than `threshold` pixels
/// (|dx| + |dy|) from where the drag started. The dominant axis picks the direction.
/// After firing, the tracker waits for a new drag start.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    threshold: f64,
    start: Option<(f64, f64)>,
}

impl GestureTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Feed a pointer move; returns the swipe direction once the drag is long enough
    pub fn track(&mut self, x: f64, y: f64) -> Option<Direction> {
        // A move without a recorded start is ignored
        let (start_x, start_y) = self.start?;

        let x_diff = start_x - x;
        let y_diff = start_y - y;
        if x_diff.abs() + y_diff.abs() <= self.threshold {
            return None;
        }

        self.start = None;

        let direction = if x_diff.abs() > y_diff.abs() {
            if x_diff > 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if y_diff > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };

        Some(direction)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

use rand::seq::IndexedRandom;

use crate::config::Config;
use crate::domain::{Grid, Pattern, Transition, presets};

/// GameState orchestrates the simulation.
/// It owns the grid, the run flag and the generation clock, and turns input
/// gestures into grid mutations.
pub struct GameState {
    pub grid: Grid,
    pub is_running: bool,
    pub generation: u64,
    patterns: Vec<Pattern>,
    step_interval: f32,
    step_timer: f32,
}

impl GameState {
    /// Create a paused, all-dead simulation sized from the configuration
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.rows(), config.cols()),
            is_running: false,
            generation: 0,
            patterns: presets::all_patterns(),
            step_interval: config.step_interval,
            step_timer: 0.0,
        }
    }

    /// Flip between RUNNING and PAUSED. The grid itself is untouched.
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Kill every cell, restart the generation count and pause
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.is_running = false;
    }

    /// Stamp a uniformly chosen seed pattern anchored at (row, col).
    /// Legal in both states; while running the seed merges into the live
    /// simulation. Returns the chosen pattern's name.
    pub fn seed_at(&mut self, row: usize, col: usize) -> &'static str {
        match self.patterns.choose(&mut rand::rng()) {
            Some(pattern) => {
                pattern.stamp_on(&mut self.grid, row, col);
                pattern.name
            }
            None => "",
        }
    }

    /// Advance the simulation clock by one frame. Returns the transition
    /// tags when a generation was computed this frame, `None` otherwise
    /// (paused, or still inside the step interval).
    pub fn tick(&mut self, delta_time: f32) -> Option<Vec<Transition>> {
        if !self.is_running {
            return None;
        }

        self.step_timer += delta_time;
        if self.step_timer < self.step_interval {
            return None;
        }
        self.step_timer = 0.0;

        let (next, transitions) = self.grid.step();
        self.grid = next;
        self.generation += 1;
        Some(transitions)
    }
}

use macroquad::prelude::*;

use crate::config::Config;
use crate::domain::{Grid, Transition};

/// Draw one cell as a filled rectangle, one pixel smaller than the cell
/// pitch so the clear color shows through as grid lines.
fn draw_cell(row: usize, col: usize, color: Color, config: &Config) {
    let size = config.cell_size;
    draw_rectangle(
        col as f32 * size,
        row as f32 * size,
        size - 1.0,
        size - 1.0,
        color,
    );
}

/// Render the grid by current state: live cells in the alive color, dead
/// cells in the background color. Used while paused and between throttled
/// generations.
pub fn draw_cells(grid: &Grid, config: &Config) {
    for (row, col, cell) in grid.iter_cells() {
        let color = if cell.is_alive() {
            config.alive_color
        } else {
            config.background_color
        };
        draw_cell(row, col, color, config);
    }
}

/// Render the generation that just advanced, colored by transition tag:
/// cells dying this step get their own color so the step's casualties are
/// visible against both the living and the dead.
pub fn draw_transitions(grid: &Grid, transitions: &[Transition], config: &Config) {
    let (_, cols) = grid.dimensions();
    for (idx, transition) in transitions.iter().enumerate() {
        let color = match transition {
            Transition::StaysDead => config.background_color,
            Transition::Born | Transition::Survives => config.alive_color,
            Transition::Dies => config.dying_color,
        };
        draw_cell(idx / cols, idx % cols, color, config);
    }
}

use macroquad::prelude::*;

use crate::application::GameState;
use crate::config::Config;

/// Seed while the primary button is held: one randomly chosen pattern per
/// frame, anchored at the cell under the pointer. Active in both states, so
/// seeds dropped mid-run merge into the live simulation.
pub fn handle_mouse_seed(state: &mut GameState, config: &Config) {
    if !is_mouse_button_down(MouseButton::Left) {
        return;
    }

    let (x, y) = mouse_position();
    let (row, col) = config.cell_at(x, y);
    let name = state.seed_at(row, col);
    debug!("seeded {} at ({}, {})", name, row, col);
}

/// Keyboard polls for the frame: space toggles the run state, C clears the
/// board. Returns false when the quit key was pressed.
pub fn handle_keyboard(state: &mut GameState) -> bool {
    if is_key_pressed(KeyCode::Space) {
        state.toggle_running();
        info!(
            "{} at generation {} ({} live cells)",
            if state.is_running { "running" } else { "paused" },
            state.generation,
            state.grid.population()
        );
    }

    if is_key_pressed(KeyCode::C) {
        state.clear();
        info!("cleared");
    }

    !is_key_pressed(KeyCode::Escape)
}

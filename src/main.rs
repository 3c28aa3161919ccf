use macroquad::prelude::*;
use methuselah::{Config, GameState, input, rendering};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: "Methuselah - Conway's Game of Life".to_owned(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::default();
    let mut state = GameState::new(&config);

    info!(
        "{}x{} grid at {}px cells; click to seed, space to run, C to clear",
        config.cols(),
        config.rows(),
        config.cell_size as i32
    );

    loop {
        input::handle_mouse_seed(&mut state, &config);
        if !input::handle_keyboard(&mut state) {
            break;
        }

        clear_background(config.grid_line_color);
        match state.tick(get_frame_time()) {
            Some(transitions) => {
                rendering::draw_transitions(&state.grid, &transitions, &config)
            }
            None => rendering::draw_cells(&state.grid, &config),
        }

        next_frame().await;
    }
}

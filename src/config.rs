use macroquad::color::Color;

/// Immutable startup configuration shared by the simulation loop and the
/// renderer. Built once in `main` and passed explicitly; nothing reads it
/// through globals.
#[derive(Clone)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Cell pitch in pixels. Rectangles are drawn one pixel smaller so the
    /// clear color shows through as grid lines.
    pub cell_size: f32,
    /// Canvas clear color (the visible grid lines).
    pub grid_line_color: Color,
    /// Dead cells.
    pub background_color: Color,
    /// Live cells.
    pub alive_color: Color,
    /// Cells dying this generation (transition render only).
    pub dying_color: Color,
    /// Seconds between generations while running. Zero advances every frame.
    pub step_interval: f32,
}

impl Config {
    /// Grid rows derived from the window height.
    pub fn rows(&self) -> usize {
        (self.screen_height / self.cell_size as i32) as usize
    }

    /// Grid columns derived from the window width.
    pub fn cols(&self) -> usize {
        (self.screen_width / self.cell_size as i32) as usize
    }

    /// Map a pointer position in pixels to the (row, col) cell under it.
    pub fn cell_at(&self, x: f32, y: f32) -> (usize, usize) {
        (
            (y.max(0.0) / self.cell_size) as usize,
            (x.max(0.0) / self.cell_size) as usize,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 1000,
            screen_height: 700,
            cell_size: 7.0,
            grid_line_color: Color::from_rgba(25, 25, 25, 255),
            background_color: Color::from_rgba(10, 10, 10, 255),
            alive_color: Color::from_rgba(255, 255, 255, 255),
            dying_color: Color::from_rgba(50, 50, 50, 255),
            step_interval: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions_derived_from_window() {
        let config = Config::default();
        assert_eq!(config.rows(), 100);
        assert_eq!(config.cols(), 142);
    }

    #[test]
    fn test_cell_at_maps_pixels_to_cells() {
        let config = Config::default();
        assert_eq!(config.cell_at(0.0, 0.0), (0, 0));
        assert_eq!(config.cell_at(6.9, 6.9), (0, 0));
        assert_eq!(config.cell_at(7.0, 14.0), (2, 1));
        assert_eq!(config.cell_at(351.0, 17.5), (2, 50));
    }

    #[test]
    fn test_cell_at_clamps_negative_positions() {
        let config = Config::default();
        assert_eq!(config.cell_at(-3.0, -10.0), (0, 0));
    }
}

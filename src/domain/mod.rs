mod cell;
mod grid;
mod patterns;

pub use cell::{Cell, Transition};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
